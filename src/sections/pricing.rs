use leptos::prelude::*;

use super::ids;
use crate::content::{self, PricingTier};
use crate::state::{Action, use_page_state};
use crate::ui::icons::{self, Icon};
use crate::ui::{Badge, Button, ButtonVariant, Card};
use crate::viewport::use_reveal;

#[component]
pub fn Pricing() -> impl IntoView {
    let state = use_page_state();
    let reveal = use_reveal();
    let shown = move || reveal.is_visible(ids::PRICING_HEADER);

    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div
                    class="section-header reveal"
                    class=("revealed", shown)
                    id=ids::PRICING_HEADER
                    data-reveal="true"
                >
                    <h2 class="section-title">"Simple, Transparent Pricing"</h2>
                    <p class="section-description">
                        "Choose the perfect plan for your business. All plans include a "
                        "14-day free trial."
                    </p>
                    <Button
                        variant=ButtonVariant::Secondary
                        on_press=move || {
                            state.dispatch(Action::OpenCalculator);
                        }
                    >
                        "💰 Pricing Calculator"
                    </Button>
                </div>

                <div class="pricing-grid">
                    {content::PRICING_TIERS
                        .iter()
                        .map(|tier| {
                            view! {
                                <div class="reveal" class=("revealed", shown)>
                                    <TierCard tier=tier />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TierCard(tier: &'static PricingTier) -> impl IntoView {
    let state = use_page_state();
    let card_class = if tier.popular {
        "tier-card tier-popular"
    } else {
        "tier-card"
    };
    let cta_variant = if tier.popular {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    };

    view! {
        <Card glass=true class=card_class>
            <Show when=move || tier.popular>
                <Badge variant="success" class="tier-badge">"Most Popular"</Badge>
            </Show>
            <h3 class="tier-name">{tier.name}</h3>
            <p class="tier-description">{tier.description}</p>
            <div class="tier-price">
                <span class="tier-amount">{format!("${}", tier.price)}</span>
                <span class="tier-period">"/month"</span>
            </div>
            <Button
                variant=cta_variant
                class="btn-block"
                on_press=move || {
                    state.dispatch(Action::OpenContact);
                }
            >
                "Start Free Trial"
            </Button>
            <ul class="tier-features">
                {tier
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="tier-feature">
                                <Icon path=icons::ICON_CHECK class="tier-check" color="#4ade80" />
                                {*feature}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </Card>
    }
}
