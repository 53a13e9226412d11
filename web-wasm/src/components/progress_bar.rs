//! プログレスバーコンポーネント

use leptos::prelude::*;

/// `progress` は 0.0〜1.0
#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<f32>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div
                class="progress-fill"
                style=move || format!("width: {}%", progress.get() * 100.0)
            />
        </div>
    }
}
