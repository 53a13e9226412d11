//! テーマコンテキスト
//!
//! アプリのルートで provide_context し、ヘッダーなどから参照する。

use leptos::prelude::*;
use stylist_common::Theme;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwSignal::new(initial),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.with(Theme::is_dark)
    }

    pub fn toggle(&self) {
        self.theme.update(Theme::toggle);
    }
}

/// ブラウザの `prefers-color-scheme` から初期テーマを決める
pub fn preferred_theme() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| Theme::from_dark_flag(query.matches()))
        .unwrap_or_default()
}

/// ルート要素（<html>）のテーマクラスを付け替える
pub fn apply_theme(theme: Theme) -> Result<(), String> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| "document element is not available".to_string())?;
    let classes = root.class_list();
    for candidate in [Theme::Light, Theme::Dark] {
        classes
            .toggle_with_force(candidate.class_name(), candidate == theme)
            .map_err(|e| format!("theme class update failed: {:?}", e))?;
    }
    Ok(())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn root_has_class(theme: Theme) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|el| el.class_list().contains(theme.class_name()))
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn wasm_apply_theme_toggles_root_class() {
        apply_theme(Theme::Dark).expect("適用失敗");
        assert!(root_has_class(Theme::Dark));
        assert!(!root_has_class(Theme::Light));
        apply_theme(Theme::Light).expect("適用失敗");
        assert!(!root_has_class(Theme::Dark));
        assert!(root_has_class(Theme::Light));
    }
}
