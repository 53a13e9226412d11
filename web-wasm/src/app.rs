//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use stylist_common::{
    config::DEFAULT_BACKEND_URL, request_with_fallback, BackendConfig, Recommendation,
    RecommendOutcome, RequestTracker, UserInput,
};

use crate::api;
use crate::components::{
    footer::Footer,
    header::Header,
    hero::Hero,
    input_form::InputForm,
    recommendation_cards::RecommendationCards,
};
use crate::export;
use crate::storage;
use crate::theme::{self, ThemeContext};

/// 接続設定（ビルド時の値が不正ならデフォルトに戻す）
fn backend_config() -> BackendConfig {
    BackendConfig::from_build_env().unwrap_or_else(|e| {
        gloo::console::warn!(format!("{}; falling back to {}", e, DEFAULT_BACKEND_URL));
        BackendConfig::default()
    })
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let recommend_url = backend_config().recommend_url();

    // アプリケーション状態
    let (recommendations, set_recommendations) = signal(Vec::<Recommendation>::new());
    let (show_results, set_show_results) = signal(false);
    let tracker = RwSignal::new(RequestTracker::default());
    let is_loading = Signal::derive(move || tracker.with(RequestTracker::in_progress));
    let saved_looks = RwSignal::new(storage::load_saved_looks());

    // テーマ
    let theme_ctx = ThemeContext::new(theme::preferred_theme());
    provide_context(theme_ctx);
    Effect::new(move |_| {
        if let Err(e) = theme::apply_theme(theme_ctx.theme.get()) {
            gloo::console::warn!(e);
        }
    });

    // 画面破棄後に届いた応答は適用しない
    on_cleanup(move || {
        tracker.try_update(RequestTracker::abandon);
    });

    // 送信ハンドラ
    let on_submit = move |input: UserInput| {
        let Some(ticket) = tracker.try_update(RequestTracker::begin).flatten() else {
            gloo::console::warn!("recommendation request already in progress");
            return;
        };
        set_show_results.set(false);

        let url = recommend_url.clone();
        spawn_local(async move {
            let outcome = request_with_fallback(api::recommend::fetch_recommendations(&url, &input)).await;
            if let RecommendOutcome::Fallback { cause, .. } = &outcome {
                gloo::console::error!(format!("Error getting recommendations: {}", cause));
            }

            if !tracker.try_update(|t| t.finish(ticket)).unwrap_or(false) {
                return;
            }
            set_recommendations.set(outcome.into_recommendations());
            set_show_results.set(true);
        });
    };

    // 保存ハンドラ（変更のたびに丸ごと上書き保存）
    let on_toggle_save = move |index: usize| {
        let toggled = recommendations.with_untracked(|list| {
            saved_looks.try_update(|saved| saved.toggle_index(list, index))
        });
        if toggled.flatten().is_none() {
            return;
        }
        if let Err(e) = saved_looks.with_untracked(storage::persist_saved_looks) {
            gloo::console::error!(e.to_string());
        }
    };

    // 画像出力ハンドラ（失敗はログのみ）
    let on_export = move |index: usize| {
        let Some(recommendation) = recommendations.with_untracked(|list| list.get(index).cloned())
        else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = export::card_image::export_card_image(index, &recommendation.title).await {
                gloo::console::error!(format!("Error generating image: {}", e));
            }
        });
    };

    view! {
        <div class="app">
            <Header />

            <main>
                <Hero />

                <section class="form-section">
                    <div class="container">
                        <InputForm is_loading=is_loading on_submit=on_submit />

                        <Show when=move || show_results.get() || is_loading.get()>
                            <div class="results">
                                <RecommendationCards
                                    recommendations=recommendations
                                    is_loading=is_loading
                                    saved_looks=saved_looks
                                    on_toggle_save=on_toggle_save
                                    on_export=on_export
                                />
                            </div>
                        </Show>
                    </div>
                </section>
            </main>

            <Footer />
        </div>
    }
}
