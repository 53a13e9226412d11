//! 推薦結果カードコンポーネント

use leptos::prelude::*;
use stylist_common::{
    card_element_id, confidence_percent, look_id, ExpandState, Recommendation, SavedLooks,
    SKELETON_CARD_COUNT, STYLING_TIPS,
};

#[component]
pub fn RecommendationCards<FS, FE>(
    #[prop(into)] recommendations: Signal<Vec<Recommendation>>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] saved_looks: Signal<SavedLooks>,
    on_toggle_save: FS,
    on_export: FE,
) -> impl IntoView
where
    FS: Fn(usize) + 'static + Clone + Send + Sync,
    FE: Fn(usize) + 'static + Clone + Send + Sync,
{
    let expand = RwSignal::new(ExpandState::default());

    // 一覧が入れ替わったら詳細パネルを閉じる
    Effect::new(move |_| {
        recommendations.track();
        expand.set(ExpandState::default());
    });

    let cards = move || {
        // 読み込み中は古い結果を出さない
        if is_loading.get() {
            return view! { <LoadingCards /> }.into_any();
        }

        let on_toggle_save = on_toggle_save.clone();
        let on_export = on_export.clone();
        view! {
            <div class="recommendations">
                <h2 class="section-title">"Your Personalized Style Recommendations"</h2>
                <div class="card-list">
                    <For
                        each={move || recommendations.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key={|item: &(usize, Recommendation)| (item.0, look_id(&item.1))}
                        children={move |(index, recommendation): (usize, Recommendation)| {
                            view! {
                                <RecommendationCard
                                    index=index
                                    recommendation=recommendation
                                    saved_looks=saved_looks
                                    expand=expand
                                    on_toggle_save=on_toggle_save.clone()
                                    on_export=on_export.clone()
                                />
                            }
                        }}
                    />
                </div>
            </div>
        }
        .into_any()
    };

    view! { <div class="recommendation-cards">{cards}</div> }
}

#[component]
fn LoadingCards() -> impl IntoView {
    view! {
        <div class="recommendations loading">
            <h2 class="section-title">"Crafting your perfect looks..."</h2>
            {(0..SKELETON_CARD_COUNT)
                .map(|_| {
                    view! {
                        <div class="skeleton-card">
                            <div class="skeleton-image" />
                            <div class="skeleton-body">
                                <div class="skeleton-line title" />
                                <div class="skeleton-line" />
                                <div class="skeleton-line wide" />
                                {(0..4).map(|_| view! { <div class="skeleton-line short" /> }).collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn RecommendationCard<FS, FE>(
    index: usize,
    recommendation: Recommendation,
    saved_looks: Signal<SavedLooks>,
    expand: RwSignal<ExpandState>,
    on_toggle_save: FS,
    on_export: FE,
) -> impl IntoView
where
    FS: Fn(usize) + 'static + Clone + Send + Sync,
    FE: Fn(usize) + 'static + Clone + Send + Sync,
{
    let id = look_id(&recommendation);
    let is_saved = move || saved_looks.with(|s| s.contains_id(&id));
    let is_saved_class = is_saved.clone();
    let is_expanded = move || expand.with(|e| e.is_expanded(index));

    let image = recommendation.primary_image().map(str::to_string);
    let Recommendation {
        title,
        items,
        explanation,
        confidence,
        matched_rules,
        ..
    } = recommendation;

    view! {
        <div class="recommendation-card" id=card_element_id(index)>
            <div class="card-image">
                {image.map(|src| view! { <img src=src alt=title.clone() loading="lazy" /> })}
            </div>

            <div class="card-content">
                <div class="card-header">
                    <div>
                        <h3>{title.clone()}</h3>
                        <div class="card-badges">
                            <span class="match-badge">
                                {format!("★ {} Match", confidence_percent(confidence))}
                            </span>
                            <div class="rule-tags">
                                {matched_rules
                                    .into_iter()
                                    .map(|rule| view! { <span class="rule-tag">{rule}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="card-actions">
                        <button
                            class="icon-button save-button"
                            class:saved=is_saved_class
                            title="Save look"
                            on:click=move |_| on_toggle_save(index)
                        >
                            {move || if is_saved() { "♥" } else { "♡" }}
                        </button>
                        <button
                            class="icon-button"
                            title="Download image"
                            on:click=move |_| on_export(index)
                        >
                            "⬇"
                        </button>
                    </div>
                </div>

                <p class="explanation">{explanation}</p>

                <div class="style-items">
                    <h4>"Style Items:"</h4>
                    <div class="item-list">
                        {items
                            .into_iter()
                            .map(|item| view! { <span class="item-chip">{item}</span> })
                            .collect_view()}
                    </div>
                </div>

                <button
                    class="details-toggle"
                    on:click=move |_| expand.update(|e| e.toggle(index))
                >
                    "Style Details "
                    {move || if is_expanded() { "▲" } else { "▼" }}
                </button>

                <Show when=is_expanded>
                    <div class="details-panel">
                        <h5>"Styling Tips:"</h5>
                        <ul>
                            {STYLING_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
