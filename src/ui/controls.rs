//! Stateless, prop-driven widgets: buttons, badges, form fields, and the
//! small display helpers the sections share.

use leptos::prelude::*;

/// Visual treatments for [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Gradient call-to-action
    #[default]
    Primary,
    /// Translucent glass button
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    /// One of "sm", "md", "lg"
    #[prop(default = "md")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    #[prop(into)] on_press: Callback<()>,
    children: Children,
) -> impl IntoView {
    let classes = format!("btn {} btn-{} {}", variant.class(), size, class);
    view! {
        <button type="button" class=classes on:click=move |_| on_press.run(())>
            {children()}
        </button>
    }
}

#[component]
pub fn Badge(
    /// One of "default", "success", "warning"
    #[prop(default = "default")]
    variant: &'static str,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("badge badge-{} {}", variant, class);
    view! { <span class=classes>{children()}</span> }
}

#[component]
pub fn Avatar(
    src: &'static str,
    alt: &'static str,
    /// One of "sm", "md", "lg"
    #[prop(default = "md")]
    size: &'static str,
) -> impl IntoView {
    let classes = format!("avatar avatar-{}", size);
    view! { <img class=classes src=src alt=alt /> }
}

/// Horizontal fill bar showing `value` out of `max`.
#[component]
pub fn ProgressBar(#[prop(into)] value: Signal<u32>, max: u32) -> impl IntoView {
    let width = move || {
        let pct = if max == 0 {
            0.0
        } else {
            f64::from(value.get()) / f64::from(max) * 100.0
        };
        format!("{pct:.1}%")
    };
    view! {
        <div class="progress-track">
            <div class="progress-fill" style:width=width></div>
        </div>
    }
}

/// On/off switch with a trailing label. State belongs to the caller.
#[component]
pub fn Toggle(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="toggle">
            <button
                type="button"
                class="toggle-track"
                class=("toggle-on", move || checked.get())
                role="switch"
                aria-checked=move || checked.get().to_string()
                on:click=move |_| on_toggle.run(())
            >
                <span class="toggle-thumb"></span>
            </button>
            <span class="toggle-label">{label}</span>
        </div>
    }
}

/// Labeled single-line input with an optional error line underneath.
#[component]
pub fn TextInput(
    label: &'static str,
    /// HTML input type
    #[prop(default = "text")]
    kind: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_edit: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <input
                class="field-input"
                class=("field-invalid", move || error.get().is_some())
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}

/// Labeled multi-line input with an optional error line underneath.
#[component]
pub fn TextArea(
    label: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_edit: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <textarea
                class="field-input field-textarea"
                class=("field-invalid", move || error.get().is_some())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}
