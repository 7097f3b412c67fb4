use leptos::prelude::*;

use crate::state::{Action, Field, use_page_state};
use crate::ui::{Modal, TextArea, TextInput, Toggle};

const SUBMIT_ACK: &str = "Thank you for your message! We'll get back to you soon.";

#[component]
pub fn ContactModal() -> impl IntoView {
    let state = use_page_state();
    // Presentation-only opt-in; not part of the validated form.
    let (newsletter, set_newsletter) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(accepted) = state.dispatch(Action::SubmitContact) {
            // No submission endpoint yet; leave a breadcrumb for devtools.
            web_sys::console::debug_1(
                &format!(
                    "contact submission (not transmitted): {} <{}>: {}",
                    accepted.name, accepted.email, accepted.message
                )
                .into(),
            );
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(SUBMIT_ACK);
            }
        }
    };

    view! {
        <Modal
            open=Signal::derive(move || state.0.with(|s| s.contact_open))
            on_close=move || {
                state.dispatch(Action::CloseContact);
            }
        >
            <h3 class="modal-title">"Start Your Free Trial"</h3>
            <form class="contact-form" on:submit=on_submit>
                <TextInput
                    label="Full Name"
                    value=Signal::derive(move || state.0.with(|s| s.contact_form.name.clone()))
                    error=Signal::derive(move || state.0.with(|s| s.form_errors.name.clone()))
                    on_edit=Callback::new(move |value| {
                        state.dispatch(Action::EditField(Field::Name, value));
                    })
                />
                <TextInput
                    label="Email Address"
                    kind="email"
                    value=Signal::derive(move || state.0.with(|s| s.contact_form.email.clone()))
                    error=Signal::derive(move || state.0.with(|s| s.form_errors.email.clone()))
                    on_edit=Callback::new(move |value| {
                        state.dispatch(Action::EditField(Field::Email, value));
                    })
                />
                <TextArea
                    label="Message"
                    placeholder="Tell us about your marketing goals..."
                    value=Signal::derive(move || state.0.with(|s| s.contact_form.message.clone()))
                    error=Signal::derive(move || state.0.with(|s| s.form_errors.message.clone()))
                    on_edit=Callback::new(move |value| {
                        state.dispatch(Action::EditField(Field::Message, value));
                    })
                />
                <Toggle
                    checked=newsletter
                    on_toggle=move || set_newsletter.update(|v| *v = !*v)
                    label="Send me product updates"
                />
                <button type="submit" class="btn btn-primary btn-md btn-block">
                    "Start Free Trial"
                </button>
            </form>
        </Modal>
    }
}
