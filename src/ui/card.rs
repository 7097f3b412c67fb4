use leptos::prelude::*;

/// Rounded container. The glass variant gets a translucent, blurred
/// backdrop for use over the page gradient.
#[component]
pub fn Card(
    #[prop(default = false)] glass: bool,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = if glass {
        format!("card card-glass {class}")
    } else {
        format!("card {class}")
    };
    view! { <div class=classes>{children()}</div> }
}
