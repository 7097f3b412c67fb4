use leptos::prelude::*;

use super::icons::{self, Icon};

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// corner button closes it; the content itself stays interactive.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
                <div class="modal-panel" role="dialog" aria-modal="true">
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon path=icons::ICON_X size="24" />
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
