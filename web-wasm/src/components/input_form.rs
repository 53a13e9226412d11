//! ステップ形式の質問フォーム
//!
//! 1ステップ1問。最終ステップでは「次へ」の代わりに送信ボタンを表示する。

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use stylist_common::{StepForm, UserInput};

use crate::components::progress_bar::ProgressBar;

#[component]
pub fn InputForm<F>(
    #[prop(into)] is_loading: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(UserInput) + 'static + Clone + Send + Sync,
{
    let form = RwSignal::new(StepForm::new());

    let progress = Signal::derive(move || form.with(StepForm::progress));
    let current_field = move || form.with(|f| *f.current_field());
    let can_submit = move || form.with(StepForm::is_complete) && !is_loading.get();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        // 未完了なら何もしない（ボタンは無効化済み）
        if let Some(input) = form.with_untracked(StepForm::submit) {
            on_submit(input);
        }
    };

    view! {
        <div class="input-form">
            <ProgressBar progress=progress />

            <form class="form-body" on:submit=handle_submit>
                <div class="form-heading">
                    <h2>"Tell us about your style"</h2>
                    <p class="text-muted">
                        {move || form.with(|f| format!("Step {} of {}", f.current_step() + 1, f.step_count()))}
                    </p>
                </div>

                <div class="form-step">
                    <h3 class="field-label">
                        {move || current_field().label}
                        {move || current_field().required.then(|| view! { <span class="required">"*"</span> })}
                    </h3>

                    <div class="option-grid">
                        {move || {
                            let field = current_field();
                            let step = form.with(StepForm::current_step);
                            field
                                .options
                                .iter()
                                .map(|&option| {
                                    let is_selected = move || form.with(|f| f.selected(field.key) == option);
                                    view! {
                                        <button
                                            type="button"
                                            class="option-button"
                                            class:selected=is_selected
                                            on:click=move |_| form.update(|f| f.select_option(step, option))
                                        >
                                            {option}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="form-nav">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled=move || form.with(StepForm::is_first_step)
                        on:click=move |_| form.update(StepForm::retreat)
                    >
                        "Previous"
                    </button>

                    <Show
                        when=move || !form.with(StepForm::is_last_step)
                        fallback=move || view! {
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || !can_submit()
                            >
                                {move || if is_loading.get() { "Styling..." } else { "Get My Style" }}
                            </button>
                        }
                    >
                        <button
                            type="button"
                            class="btn btn-primary"
                            on:click=move |_| form.update(StepForm::advance)
                        >
                            "Next"
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}
