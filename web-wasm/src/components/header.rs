//! ヘッダーコンポーネント

use leptos::prelude::*;
use crate::theme::ThemeContext;

#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <header class="header">
            <div class="header-inner">
                <div class="brand">
                    <span class="brand-icon">"✨"</span>
                    <h1>"AI Fashion Stylist"</h1>
                </div>
                <button
                    class="theme-toggle"
                    title="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || if theme.is_dark() { "☀" } else { "☾" }}
                </button>
            </div>
        </header>
    }
}
