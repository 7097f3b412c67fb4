use leptos::prelude::*;

use super::PRODUCT_NAME;
use crate::ui::icons::{self, Icon};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-brand-row">
                            <div class="nav-logo">
                                <Icon path=icons::ICON_SPARKLE size="24" />
                            </div>
                            <span class="nav-title">{PRODUCT_NAME}</span>
                        </div>
                        <p class="footer-tagline">
                            "Revolutionizing marketing with AI-powered solutions for modern businesses."
                        </p>
                        <div class="footer-social">
                            <Icon path=icons::ICON_FACEBOOK size="24" class="footer-social-icon" />
                            <Icon path=icons::ICON_TWITTER size="24" class="footer-social-icon" />
                            <Icon path=icons::ICON_LINKEDIN size="24" class="footer-social-icon" />
                            <Icon path=icons::ICON_INSTAGRAM size="24" class="footer-social-icon" />
                        </div>
                    </div>

                    <FooterColumn
                        heading="Product"
                        links=&["Features", "Pricing", "API", "Integrations"]
                    />
                    <FooterColumn heading="Company" links=&["About", "Blog", "Careers", "Press"] />

                    <div class="footer-column">
                        <h4 class="footer-heading">"Contact"</h4>
                        <div class="footer-contact-row">
                            <Icon path=icons::ICON_ENVELOPE size="16" />
                            <span>"hello@admybrand.ai"</span>
                        </div>
                        <div class="footer-contact-row">
                            <Icon path=icons::ICON_PHONE size="16" />
                            <span>"+1 (555) 123-4567"</span>
                        </div>
                        <div class="footer-contact-row">
                            <Icon path=icons::ICON_MAP_PIN size="16" />
                            <span>"San Francisco, CA"</span>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>"© 2025 ADmyBRAND AI Suite. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(heading: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4 class="footer-heading">{heading}</h4>
            {links
                .iter()
                .map(|link| view! { <a href="#" class="footer-link">{*link}</a> })
                .collect::<Vec<_>>()}
        </div>
    }
}
