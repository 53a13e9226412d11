//! ヒーローセクション

use leptos::prelude::*;

const FEATURES: [(&str, &str, &str); 3] = [
    ("⚡", "Instant Results", "Get styled in seconds"),
    ("👥", "Expert Knowledge", "Rule-based AI system"),
    ("✨", "Personalized", "Tailored to you"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-inner">
                <div class="hero-icon">"✨"</div>
                <h1 class="hero-title">
                    <span class="gradient-text">"Your AI Fashion"</span>
                    <br />
                    <span class="gradient-text accent">"Stylist"</span>
                </h1>
                <p class="hero-lead">
                    "Discover your perfect style with our intelligent fashion expert system. "
                    "Get personalized outfit recommendations tailored to your preferences, occasion, and body type."
                </p>

                <div class="feature-list">
                    {FEATURES
                        .iter()
                        .map(|(icon, label, desc)| {
                            view! {
                                <div class="feature-tile">
                                    <span class="feature-icon">{*icon}</span>
                                    <h3>{*label}</h3>
                                    <p>{*desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="scroll-hint">"Scroll down to get started"</div>
            </div>
        </section>
    }
}
