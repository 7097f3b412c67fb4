//! Landing page sections.

/// Product name used across the page (single source of truth)
pub const PRODUCT_NAME: &str = "ADmyBRAND AI";

/// Element ids observed for entrance transitions.
pub mod ids {
    pub const HERO: &str = "hero";
    pub const FEATURES_HEADER: &str = "features-header";
    pub const PRICING_HEADER: &str = "pricing-header";
    pub const TESTIMONIALS_HEADER: &str = "testimonials-header";
    pub const FAQ_HEADER: &str = "faq-header";
}

mod calculator;
mod contact;
mod faq;
mod features;
mod footer;
mod hero;
mod nav;
mod pricing;
mod testimonials;

pub use calculator::CalculatorModal;
pub use contact::ContactModal;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
