//! フッターコンポーネント

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="brand">
                <span class="brand-icon">"✨"</span>
                <h3>"AI Fashion Stylist"</h3>
            </div>
            <p class="text-muted">
                "Empowering everyone to look and feel their best with intelligent, personalized fashion advice powered by expert knowledge and AI technology."
            </p>
            <p class="made-with">"Made with ♥ for fashion lovers everywhere"</p>
            <p class="copyright">"© 2024 AI Fashion Stylist. All rights reserved."</p>
        </footer>
    }
}
