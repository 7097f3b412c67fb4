use leptos::prelude::*;

use super::PRODUCT_NAME;
use crate::state::{Action, use_page_state};
use crate::ui::icons::{self, Icon};
use crate::ui::{Button, ButtonVariant};

#[component]
pub fn Nav() -> impl IntoView {
    let state = use_page_state();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <div class="nav-logo">
                        <Icon path=icons::ICON_SPARKLE size="24" />
                    </div>
                    <span class="nav-title">{PRODUCT_NAME}</span>
                </a>

                <div class="nav-links">
                    <a href="#features" class="nav-link">"Features"</a>
                    <a href="#pricing" class="nav-link">"Pricing"</a>
                    <a href="#testimonials" class="nav-link">"Reviews"</a>
                    <Button
                        variant=ButtonVariant::Secondary
                        on_press=move || {
                            state.dispatch(Action::OpenContact);
                        }
                    >
                        "Get Started"
                    </Button>
                </div>

                <button
                    type="button"
                    class="nav-menu-btn"
                    aria-label="Toggle menu"
                    on:click=move |_| {
                        state.dispatch(Action::ToggleMenu);
                    }
                >
                    {move || {
                        let path = if state.0.with(|s| s.menu_open) {
                            icons::ICON_X
                        } else {
                            icons::ICON_LIST
                        };
                        view! { <Icon path=path size="24" /> }
                    }}
                </button>
            </div>

            // Compact-layout menu overlay
            <Show when=move || state.0.with(|s| s.menu_open)>
                <div class="nav-drawer">
                    <a href="#features" class="nav-drawer-link">"Features"</a>
                    <a href="#pricing" class="nav-drawer-link">"Pricing"</a>
                    <a href="#testimonials" class="nav-drawer-link">"Reviews"</a>
                    <Button
                        variant=ButtonVariant::Secondary
                        class="btn-block"
                        on_press=move || {
                            state.dispatch(Action::OpenContact);
                        }
                    >
                        "Get Started"
                    </Button>
                </div>
            </Show>
        </nav>
    }
}
