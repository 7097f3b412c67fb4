use leptos::prelude::*;

use super::ids;
use crate::content;
use crate::state::{Action, use_page_state};
use crate::ui::Card;
use crate::ui::icons::{self, Icon};
use crate::viewport::use_reveal;

#[component]
pub fn Faq() -> impl IntoView {
    let state = use_page_state();
    let reveal = use_reveal();
    let shown = move || reveal.is_visible(ids::FAQ_HEADER);

    view! {
        <section class="faq">
            <div class="container container-narrow">
                <div
                    class="section-header reveal"
                    class=("revealed", shown)
                    id=ids::FAQ_HEADER
                    data-reveal="true"
                >
                    <h2 class="section-title">"Frequently Asked Questions"</h2>
                </div>

                <div class="faq-list">
                    {content::FAQS
                        .iter()
                        .enumerate()
                        .map(|(i, faq)| {
                            let expanded = move || state.0.with(|s| s.expanded_faq == Some(i));
                            view! {
                                <Card glass=true class="faq-card">
                                    <button
                                        type="button"
                                        class="faq-question"
                                        aria-expanded=move || expanded().to_string()
                                        on:click=move |_| {
                                            state.dispatch(Action::ToggleFaq(i));
                                        }
                                    >
                                        <span class="faq-question-text">{faq.question}</span>
                                        <span class="faq-caret" class=("faq-caret-open", expanded)>
                                            <Icon path=icons::ICON_CARET_DOWN />
                                        </span>
                                    </button>
                                    <Show when=expanded>
                                        <div class="faq-answer">
                                            <p>{faq.answer}</p>
                                        </div>
                                    </Show>
                                </Card>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
