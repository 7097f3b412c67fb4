use leptos::prelude::*;

use super::ids;
use crate::state::{Action, use_page_state};
use crate::ui::icons::{self, Icon};
use crate::ui::{Badge, Button, Card};

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_page_state();

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content fade-in-up" id=ids::HERO data-reveal="true">
                    <Badge class="hero-badge">"🚀 New: AI Creative Studio 2.0"</Badge>
                    <h1 class="hero-title">
                        "Marketing Magic with"
                        <span class="hero-title-accent">" AI Power"</span>
                    </h1>
                    <p class="hero-description">
                        "Transform your marketing campaigns with cutting-edge AI. Generate "
                        "compelling content, target precisely, and scale your brand like never before."
                    </p>

                    <div class="hero-actions">
                        <Button
                            size="lg"
                            on_press=move || {
                                state.dispatch(Action::OpenContact);
                            }
                        >
                            "Start Free Trial"
                            <Icon path=icons::ICON_ARROW_RIGHT class="btn-icon-right" />
                        </Button>
                        <a href="#features" class="btn btn-secondary btn-lg">
                            <Icon path=icons::ICON_PLAY class="btn-icon-left" />
                            "Watch Demo"
                        </a>
                    </div>

                    <StatsCard />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatsCard() -> impl IntoView {
    view! {
        <Card glass=true class="hero-stats">
            <div class="hero-stats-grid">
                <div class="hero-stat">
                    <div class="hero-stat-value">"300%"</div>
                    <div class="hero-stat-label">"ROI Increase"</div>
                </div>
                <div class="hero-stat">
                    <div class="hero-stat-value">"10M+"</div>
                    <div class="hero-stat-label">"Campaigns Created"</div>
                </div>
                <div class="hero-stat">
                    <div class="hero-stat-value">"50K+"</div>
                    <div class="hero-stat-label">"Happy Customers"</div>
                </div>
            </div>
        </Card>
    }
}
