use leptos::prelude::*;

use crate::state::{Action, CAMPAIGNS_RANGE, USERS_RANGE, use_page_state};
use crate::ui::{Modal, ProgressBar};

#[component]
pub fn CalculatorModal() -> impl IntoView {
    let state = use_page_state();

    let users = Signal::derive(move || state.0.with(|s| s.calculator.users));
    let campaigns = Signal::derive(move || state.0.with(|s| s.calculator.campaigns));
    let price = move || state.0.with(|s| s.calculator.price());

    view! {
        <Modal
            open=Signal::derive(move || state.0.with(|s| s.calculator_open))
            on_close=move || {
                state.dispatch(Action::CloseCalculator);
            }
        >
            <h3 class="modal-title">"💰 Pricing Calculator"</h3>
            <div class="calculator">
                <SliderRow
                    label="Number of Users"
                    value=users
                    range=USERS_RANGE
                    on_change=Callback::new(move |v| {
                        state.dispatch(Action::SetUsers(v));
                    })
                />
                <SliderRow
                    label="Campaigns per Month"
                    value=campaigns
                    range=CAMPAIGNS_RANGE
                    on_change=Callback::new(move |v| {
                        state.dispatch(Action::SetCampaigns(v));
                    })
                />

                <div class="calculator-result">
                    <div class="calculator-price">{move || format!("${}", price())}</div>
                    <div class="calculator-period">"per month"</div>
                    <div class="calculator-detail">
                        {move || {
                            format!(
                                "Based on {} users and {} campaigns",
                                users.get(),
                                campaigns.get(),
                            )
                        }}
                    </div>
                </div>

                <button
                    type="button"
                    class="btn btn-primary btn-md btn-block"
                    on:click=move |_| {
                        state.dispatch(Action::CloseCalculator);
                        state.dispatch(Action::OpenContact);
                    }
                >
                    "Get Started with This Plan"
                </button>
            </div>
        </Modal>
    }
}

/// A labeled range slider with min/max captions and a fill bar mirroring
/// the current position. The range attributes are the only clamping.
#[component]
fn SliderRow(
    label: &'static str,
    #[prop(into)] value: Signal<u32>,
    range: (u32, u32),
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    let (min, max) = range;
    view! {
        <div class="slider-row">
            <label class="field-label">
                {move || format!("{}: {}", label, value.get())}
            </label>
            <input
                type="range"
                class="slider"
                min=min.to_string()
                max=max.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(v);
                    }
                }
            />
            <ProgressBar value=value max=max />
            <div class="slider-bounds">
                <span>{min.to_string()}</span>
                <span>{max.to_string()}</span>
            </div>
        </div>
    }
}
