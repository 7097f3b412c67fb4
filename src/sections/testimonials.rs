use std::time::Duration;

use leptos::prelude::*;

use super::ids;
use crate::content;
use crate::state::{Action, use_page_state};
use crate::ui::icons::{self, Icon};
use crate::ui::{Avatar, Card};
use crate::viewport::use_reveal;

/// How long each testimonial stays active before the carousel advances.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(5);

#[component]
pub fn Testimonials() -> impl IntoView {
    let state = use_page_state();
    let reveal = use_reveal();
    let shown = move || reveal.is_visible(ids::TESTIMONIALS_HEADER);

    // The rotation runs for the whole mounted lifetime. Manual dot clicks
    // write the index directly and the interval keeps its own cadence.
    if let Ok(handle) = set_interval_with_handle(
        move || {
            state.dispatch(Action::AdvanceTestimonial);
        },
        ROTATION_INTERVAL,
    ) {
        on_cleanup(move || handle.clear());
    }

    let active = Memo::new(move |_| state.0.with(|s| s.active_testimonial));

    view! {
        <section id="testimonials" class="testimonials">
            <div class="container container-narrow">
                <div
                    class="section-header reveal"
                    class=("revealed", shown)
                    id=ids::TESTIMONIALS_HEADER
                    data-reveal="true"
                >
                    <h2 class="section-title">"Loved by Marketing Teams Worldwide"</h2>
                </div>

                <Card glass=true class="carousel-card">
                    <div class="carousel-stars">
                        {move || {
                            let rating = content::TESTIMONIALS[active.get()].rating;
                            (0..rating)
                                .map(|_| {
                                    view! {
                                        <Icon
                                            path=icons::ICON_STAR
                                            size="24"
                                            color="#facc15"
                                            class="carousel-star"
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>

                    <blockquote class="carousel-quote">
                        {move || format!("\"{}\"", content::TESTIMONIALS[active.get()].text)}
                    </blockquote>

                    {move || {
                        let t = &content::TESTIMONIALS[active.get()];
                        view! {
                            <div class="carousel-author">
                                <Avatar src=t.avatar alt=t.name size="lg" />
                                <div class="carousel-author-meta">
                                    <div class="carousel-author-name">{t.name}</div>
                                    <div class="carousel-author-role">{t.role}</div>
                                </div>
                            </div>
                        }
                    }}

                    <div class="carousel-dots">
                        {content::TESTIMONIALS
                            .iter()
                            .enumerate()
                            .map(|(i, _)| {
                                view! {
                                    <button
                                        type="button"
                                        class="carousel-dot"
                                        class=("carousel-dot-active", move || active.get() == i)
                                        aria-label="Show testimonial"
                                        on:click=move |_| {
                                            state.dispatch(Action::SelectTestimonial(i));
                                        }
                                    ></button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Card>
            </div>
        </section>
    }
}
