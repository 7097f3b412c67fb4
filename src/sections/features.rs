use leptos::prelude::*;

use super::ids;
use crate::content;
use crate::ui::Card;
use crate::ui::icons::Icon;
use crate::viewport::use_reveal;

#[component]
pub fn Features() -> impl IntoView {
    let reveal = use_reveal();
    let shown = move || reveal.is_visible(ids::FEATURES_HEADER);

    view! {
        <section id="features" class="features">
            <div class="container">
                <div
                    class="section-header reveal"
                    class=("revealed", shown)
                    id=ids::FEATURES_HEADER
                    data-reveal="true"
                >
                    <h2 class="section-title">"Powerful Features for Modern Marketers"</h2>
                    <p class="section-description">
                        "Everything you need to create, optimize, and scale your marketing "
                        "campaigns with the power of AI."
                    </p>
                </div>

                <div class="features-grid">
                    {content::FEATURES
                        .iter()
                        .map(|feature| {
                            // Cards fade in together with the section header.
                            view! {
                                <div class="reveal" class=("revealed", shown)>
                                    <Card glass=true class="feature-card">
                                        <div class="feature-icon">
                                            <Icon path=feature.icon size="32" />
                                        </div>
                                        <h3 class="feature-title">{feature.title}</h3>
                                        <p class="feature-description">{feature.description}</p>
                                    </Card>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
