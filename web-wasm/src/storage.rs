//! 保存ルックのローカルストレージ永続化
//!
//! `savedLooks` スロットに推薦結果の配列（JSON）を丸ごと上書き保存する。

use gloo::storage::{errors::StorageError, LocalStorage, Storage};
use stylist_common::{Error, Recommendation, Result, SavedLooks};

pub const SAVED_LOOKS_KEY: &str = "savedLooks";

/// 起動時に保存ルックを復元
///
/// 未保存・読めないデータの場合は空から始める。
pub fn load_saved_looks() -> SavedLooks {
    match LocalStorage::get::<Vec<Recommendation>>(SAVED_LOOKS_KEY) {
        Ok(records) => SavedLooks::from_records(records),
        Err(StorageError::KeyNotFound(_)) => SavedLooks::default(),
        Err(e) => {
            gloo::console::warn!(format!("saved looks could not be restored: {}", e));
            SavedLooks::default()
        }
    }
}

pub fn persist_saved_looks(saved: &SavedLooks) -> Result<()> {
    LocalStorage::set(SAVED_LOOKS_KEY, saved).map_err(|e| Error::Storage(e.to_string()))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn look(title: &str) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            items: vec!["Trench coat".to_string()],
            explanation: "Rain-ready.".to_string(),
            images: vec!["https://example.com/rain.jpg".to_string()],
            confidence: 0.64,
            matched_rules: vec!["RAINY".to_string()],
        }
    }

    #[wasm_bindgen_test]
    fn wasm_saved_looks_roundtrip() {
        LocalStorage::delete(SAVED_LOOKS_KEY);
        assert!(load_saved_looks().is_empty());

        let list = vec![look("Rainy Commute"), look("Weekend Walk")];
        let mut saved = SavedLooks::default();
        saved.toggle_index(&list, 1);
        persist_saved_looks(&saved).expect("保存失敗");

        let raw = LocalStorage::raw()
            .get_item(SAVED_LOOKS_KEY)
            .ok()
            .flatten()
            .expect("保存されているはず");
        assert_eq!(raw, saved.to_json().expect("JSON変換失敗"));

        let restored = load_saved_looks();
        assert_eq!(restored, saved);
        LocalStorage::delete(SAVED_LOOKS_KEY);
    }

    #[wasm_bindgen_test]
    fn wasm_corrupt_storage_starts_empty() {
        LocalStorage::raw()
            .set_item(SAVED_LOOKS_KEY, "{not json")
            .expect("書き込み失敗");
        assert!(load_saved_looks().is_empty());
        LocalStorage::delete(SAVED_LOOKS_KEY);
    }
}
