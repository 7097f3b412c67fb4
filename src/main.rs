// ADmyBRAND AI landing page, Leptos 0.8 CSR

mod content;
mod sections;
mod state;
mod styles;
mod ui;
mod viewport;

use std::rc::Rc;

use leptos::prelude::*;

use sections::{
    CalculatorModal, ContactModal, Faq, Features, Footer, Hero, Nav, Pricing, Testimonials,
};
use state::provide_page_state;
use viewport::{IntersectionSource, VisibilitySource, provide_reveal};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_page_state();
    let reveal = provide_reveal();

    // Watch the marked sections once the tree is in the document, and
    // disconnect the observer when the page unmounts. The source holds
    // browser handles, so it lives in thread-local storage.
    let source: StoredValue<Box<dyn VisibilitySource>, LocalStorage> =
        StoredValue::new_local(Box::new(IntersectionSource::new()));
    Effect::new(move || {
        source.update_value(|s| s.watch(Rc::new(move |id: &str| reveal.mark(id))));
    });
    on_cleanup(move || source.update_value(|s| s.unwatch()));

    view! {
        <style>{styles::PAGE_CSS}</style>
        <Nav />
        <main>
            <Hero />
            <Features />
            <Pricing />
            <Testimonials />
            <Faq />
        </main>
        <Footer />
        <ContactModal />
        <CalculatorModal />
    }
}
