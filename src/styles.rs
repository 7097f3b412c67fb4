//! CSS for the landing page.
//!
//! The whole stylesheet ships as one constant and is injected by `App`
//! through a `<style>` element, so the page needs no external asset
//! pipeline beyond the WASM bundle itself.

/// Complete page CSS, dark gradient theme.
pub const PAGE_CSS: &str = r#"
:root {
    --grad-from: #581c87;
    --grad-via: #1e3a8a;
    --grad-to: #312e81;
    --accent-purple: #a855f7;
    --accent-purple-soft: #c084fc;
    --accent-blue: #3b82f6;
    --text-bright: #ffffff;
    --text-dim: rgba(255, 255, 255, 0.8);
    --text-muted: rgba(255, 255, 255, 0.6);
    --surface-glass: rgba(255, 255, 255, 0.1);
    --border-glass: rgba(255, 255, 255, 0.2);
    --error-red: #f87171;
    --success-green: #4ade80;
    --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
    --container-max: 1200px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    font-family: var(--font-sans);
    color: var(--text-bright);
    background: linear-gradient(135deg, var(--grad-from), var(--grad-via), var(--grad-to));
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.container-narrow {
    max-width: 860px;
}

/* ===== Buttons ===== */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    font-weight: 600;
    font-family: inherit;
    border: none;
    border-radius: 12px;
    cursor: pointer;
    text-decoration: none;
    transition: transform 0.3s, box-shadow 0.3s, background 0.3s;
}

.btn:hover { transform: scale(1.05); }
.btn:active { transform: scale(0.95); }

.btn-primary {
    background: linear-gradient(90deg, #9333ea, #2563eb);
    color: var(--text-bright);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
}

.btn-primary:hover {
    background: linear-gradient(90deg, #7e22ce, #1d4ed8);
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
}

.btn-secondary {
    background: var(--surface-glass);
    backdrop-filter: blur(8px);
    border: 1px solid var(--border-glass);
    color: var(--text-bright);
}

.btn-secondary:hover { background: rgba(255, 255, 255, 0.2); }

.btn-sm { padding: 8px 16px; font-size: 14px; }
.btn-md { padding: 12px 24px; font-size: 16px; }
.btn-lg { padding: 16px 32px; font-size: 18px; }
.btn-block { width: 100%; }

.btn-icon-left { margin-right: 4px; }
.btn-icon-right { margin-left: 4px; }

/* ===== Badges, avatars, cards ===== */

.badge {
    display: inline-flex;
    align-items: center;
    padding: 4px 12px;
    border-radius: 999px;
    font-size: 14px;
    font-weight: 500;
}

.badge-default { background: #f3e8ff; color: #6b21a8; }
.badge-success { background: #dcfce7; color: #166534; }
.badge-warning { background: #fef9c3; color: #854d0e; }

.avatar {
    border-radius: 50%;
    object-fit: cover;
    border: 2px solid var(--text-bright);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
}

.avatar-sm { width: 32px; height: 32px; }
.avatar-md { width: 48px; height: 48px; }
.avatar-lg { width: 64px; height: 64px; }

.card {
    border-radius: 16px;
    background: var(--text-bright);
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
    transition: transform 0.3s, box-shadow 0.3s;
}

.card:hover {
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    transform: scale(1.02);
}

.card-glass {
    background: var(--surface-glass);
    backdrop-filter: blur(12px);
    border: 1px solid var(--border-glass);
}

/* ===== Progress bar and toggle ===== */

.progress-track {
    width: 100%;
    height: 8px;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.2);
    overflow: hidden;
}

.progress-fill {
    height: 100%;
    border-radius: 999px;
    background: linear-gradient(90deg, #9333ea, #2563eb);
    transition: width 0.5s;
}

.toggle {
    display: flex;
    align-items: center;
    gap: 12px;
}

.toggle-track {
    width: 48px;
    height: 24px;
    border: none;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.3);
    cursor: pointer;
    padding: 2px;
    display: flex;
    transition: background 0.2s;
}

.toggle-track.toggle-on { background: var(--accent-purple); }

.toggle-thumb {
    width: 20px;
    height: 20px;
    border-radius: 50%;
    background: var(--text-bright);
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.2);
    transition: transform 0.2s;
}

.toggle-on .toggle-thumb { transform: translateX(24px); }

.toggle-label { color: var(--text-dim); font-size: 14px; }

/* ===== Form fields ===== */

.field { display: flex; flex-direction: column; gap: 8px; }

.field-label {
    font-size: 14px;
    font-weight: 500;
    color: var(--text-dim);
}

.field-input {
    width: 100%;
    padding: 12px 16px;
    border-radius: 12px;
    border: 1px solid var(--border-glass);
    background: rgba(255, 255, 255, 0.08);
    color: var(--text-bright);
    font-family: inherit;
    font-size: 15px;
    transition: border-color 0.2s, box-shadow 0.2s;
}

.field-input:focus {
    outline: none;
    box-shadow: 0 0 0 2px var(--accent-purple);
}

.field-invalid { border-color: var(--error-red); }

.field-textarea { height: 120px; resize: vertical; }

.field-error {
    margin: 0;
    color: var(--error-red);
    font-size: 14px;
}

/* ===== Navigation ===== */

.nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    background: var(--surface-glass);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--border-glass);
}

.nav-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 8px;
    text-decoration: none;
    color: var(--text-bright);
}

.nav-logo {
    width: 40px;
    height: 40px;
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: linear-gradient(90deg, #a855f7, #3b82f6);
    color: var(--text-bright);
}

.nav-title { font-size: 20px; font-weight: 700; }

.nav-links {
    display: flex;
    align-items: center;
    gap: 32px;
}

.nav-link {
    color: var(--text-dim);
    text-decoration: none;
    transition: color 0.2s;
}

.nav-link:hover { color: var(--text-bright); }

.nav-menu-btn {
    display: none;
    background: none;
    border: none;
    color: var(--text-bright);
    cursor: pointer;
}

.nav-drawer {
    display: none;
    padding: 16px 24px;
    flex-direction: column;
    gap: 16px;
    background: var(--surface-glass);
    backdrop-filter: blur(12px);
    border-top: 1px solid var(--border-glass);
}

.nav-drawer-link {
    color: var(--text-dim);
    text-decoration: none;
}

.nav-drawer-link:hover { color: var(--text-bright); }

@media (max-width: 768px) {
    .nav-links { display: none; }
    .nav-menu-btn { display: block; }
    .nav-drawer { display: flex; }
}

/* ===== Reveal transitions ===== */

.reveal {
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 1s, transform 1s;
}

.reveal.revealed {
    opacity: 1;
    transform: translateY(0);
}

.fade-in-up {
    animation: fade-in-up 0.8s ease-out both;
}

@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(40px); }
    to { opacity: 1; transform: translateY(0); }
}

/* ===== Hero ===== */

.hero { padding: 128px 0 80px; }

.hero-content { text-align: center; }

.hero-badge { margin-bottom: 24px; }

.hero-title {
    font-size: clamp(40px, 7vw, 72px);
    font-weight: 700;
    margin: 0 0 24px;
}

.hero-title-accent {
    background: linear-gradient(90deg, #c084fc, #60a5fa);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-description {
    font-size: clamp(18px, 2.5vw, 24px);
    color: var(--text-dim);
    max-width: 760px;
    margin: 0 auto 32px;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    justify-content: center;
    margin-bottom: 48px;
}

.hero-stats {
    max-width: 900px;
    margin: 0 auto;
    padding: 32px;
}

.hero-stats-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 24px;
    border-radius: 12px;
    padding: 24px;
    background: linear-gradient(90deg, rgba(168, 85, 247, 0.2), rgba(59, 130, 246, 0.2));
}

.hero-stat { text-align: center; }
.hero-stat-value { font-size: 30px; font-weight: 700; }
.hero-stat-label { color: var(--text-dim); }

@media (max-width: 640px) {
    .hero-stats-grid { grid-template-columns: 1fr; }
}

/* ===== Section scaffolding ===== */

.features, .pricing, .testimonials, .faq { padding: 80px 0; }

.section-header {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-size: clamp(32px, 5vw, 48px);
    font-weight: 700;
    margin: 0 0 24px;
}

.section-description {
    font-size: 20px;
    color: var(--text-dim);
    max-width: 760px;
    margin: 0 auto 32px;
}

/* ===== Features ===== */

.features-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 32px;
}

.feature-card {
    padding: 32px;
    text-align: center;
    height: 100%;
}

.feature-icon {
    color: var(--accent-purple-soft);
    display: flex;
    justify-content: center;
    margin-bottom: 16px;
}

.feature-title { font-size: 20px; font-weight: 700; margin: 0 0 16px; }
.feature-description { color: var(--text-dim); margin: 0; }

@media (max-width: 960px) {
    .features-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 640px) {
    .features-grid { grid-template-columns: 1fr; }
}

/* ===== Pricing ===== */

.pricing-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 32px;
    align-items: start;
}

.tier-card {
    position: relative;
    padding: 32px;
    text-align: center;
}

.tier-popular { box-shadow: 0 0 0 2px var(--accent-purple-soft); }

.tier-badge {
    position: absolute;
    top: -12px;
    left: 50%;
    transform: translateX(-50%);
}

.tier-name { font-size: 24px; font-weight: 700; margin: 0 0 8px; }
.tier-description { color: var(--text-dim); margin: 0 0 24px; }

.tier-price { margin-bottom: 24px; }
.tier-amount { font-size: 36px; font-weight: 700; }
.tier-period { color: var(--text-dim); }

.tier-features {
    list-style: none;
    margin: 24px 0 0;
    padding: 0;
    text-align: left;
}

.tier-feature {
    display: flex;
    align-items: center;
    gap: 12px;
    color: var(--text-dim);
    margin-bottom: 12px;
}

.tier-check { flex-shrink: 0; }

@media (max-width: 960px) {
    .pricing-grid { grid-template-columns: 1fr; }
}

/* ===== Testimonial carousel ===== */

.carousel-card {
    padding: 32px;
    text-align: center;
}

.carousel-stars {
    display: flex;
    justify-content: center;
    gap: 4px;
    margin-bottom: 16px;
}

.carousel-quote {
    font-size: clamp(20px, 3vw, 24px);
    font-style: italic;
    margin: 0 0 24px;
}

.carousel-author {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 16px;
}

.carousel-author-meta { text-align: left; }
.carousel-author-name { font-weight: 600; }
.carousel-author-role { color: var(--text-dim); }

.carousel-dots {
    display: flex;
    justify-content: center;
    gap: 8px;
    margin-top: 24px;
}

.carousel-dot {
    width: 12px;
    height: 12px;
    border: none;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.3);
    cursor: pointer;
    padding: 0;
    transition: background 0.3s;
}

.carousel-dot-active { background: var(--accent-purple-soft); }

/* ===== FAQ ===== */

.faq-list {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.faq-card { overflow: hidden; }

.faq-question {
    width: 100%;
    padding: 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    background: none;
    border: none;
    color: var(--text-bright);
    font-family: inherit;
    cursor: pointer;
    text-align: left;
    transition: background 0.2s;
}

.faq-question:hover { background: rgba(255, 255, 255, 0.05); }

.faq-question-text { font-size: 18px; font-weight: 600; }

.faq-caret {
    display: flex;
    transition: transform 0.2s;
}

.faq-caret-open { transform: rotate(180deg); }

.faq-answer {
    padding: 0 24px 24px;
    color: var(--text-dim);
}

.faq-answer p { margin: 0; }

/* ===== Footer ===== */

.footer {
    padding: 48px 0;
    background: rgba(0, 0, 0, 0.2);
    backdrop-filter: blur(12px);
    border-top: 1px solid var(--border-glass);
}

.footer-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 32px;
}

.footer-brand-row {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 16px;
}

.footer-tagline { color: var(--text-dim); margin: 0 0 16px; }

.footer-social { display: flex; gap: 16px; }

.footer-social-icon {
    color: var(--text-muted);
    cursor: pointer;
    transition: color 0.2s;
}

.footer-social-icon:hover { color: var(--text-bright); }

.footer-column { display: flex; flex-direction: column; gap: 8px; }

.footer-heading { font-weight: 600; margin: 0 0 8px; }

.footer-link {
    color: var(--text-dim);
    text-decoration: none;
}

.footer-link:hover { color: var(--text-bright); }

.footer-contact-row {
    display: flex;
    align-items: center;
    gap: 8px;
    color: var(--text-dim);
}

.footer-bottom {
    margin-top: 32px;
    padding-top: 32px;
    border-top: 1px solid var(--border-glass);
    text-align: center;
    color: var(--text-muted);
}

@media (max-width: 768px) {
    .footer-grid { grid-template-columns: 1fr; }
}

/* ===== Modals ===== */

.modal-overlay {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
}

.modal-backdrop {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(4px);
}

.modal-panel {
    position: relative;
    width: 100%;
    max-width: 512px;
    margin: 0 16px;
    padding: 24px;
    border-radius: 16px;
    background: #1e1b4b;
    border: 1px solid var(--border-glass);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
}

.modal-close {
    position: absolute;
    top: 16px;
    right: 16px;
    background: none;
    border: none;
    color: var(--text-muted);
    cursor: pointer;
    transition: color 0.2s;
}

.modal-close:hover { color: var(--text-bright); }

.modal-title {
    font-size: 24px;
    font-weight: 700;
    margin: 0 0 24px;
}

/* ===== Contact form and calculator ===== */

.contact-form {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.calculator {
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.slider-row {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.slider {
    width: 100%;
    accent-color: var(--accent-purple);
}

.slider-bounds {
    display: flex;
    justify-content: space-between;
    font-size: 14px;
    color: var(--text-muted);
}

.calculator-result {
    padding: 24px;
    border-radius: 12px;
    text-align: center;
    background: linear-gradient(90deg, rgba(168, 85, 247, 0.15), rgba(59, 130, 246, 0.15));
}

.calculator-price {
    font-size: 30px;
    font-weight: 700;
    color: var(--accent-purple-soft);
    margin-bottom: 8px;
}

.calculator-period { color: var(--text-dim); }

.calculator-detail {
    margin-top: 8px;
    font-size: 14px;
    color: var(--text-muted);
}
"#;
