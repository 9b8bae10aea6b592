use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, download::Download, features::Features, footer::Footer,
    header::Header, hero::Hero, how_it_works::HowItWorks, lead_capture::LeadCapture,
    pricing::Pricing, testimonials::Testimonials, toast::Toaster,
};
use crate::i18n::Language;
use crate::services::models::LeadSource;
use crate::state::overlay::LeadOverlay;
use crate::state::toasts::{Notice, ToastAction, Toasts};

#[function_component(Home)]
pub fn home() -> Html {
    let language = use_state(Language::default);
    let dark_mode = use_state(|| false);
    let overlay = use_state(LeadOverlay::default);
    let toasts = use_reducer(Toasts::default);

    let on_language = {
        let language = language.clone();
        Callback::from(move |next: Language| language.set(next))
    };

    let on_toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: ()| dark_mode.set(!*dark_mode))
    };

    let open_from = |source: LeadSource| {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(LeadOverlay::opened_from(source, None)))
    };

    let on_select_plan = {
        let overlay = overlay.clone();
        Callback::from(move |plan: String| {
            overlay.set(LeadOverlay::opened_from(LeadSource::Pricing, Some(plan)))
        })
    };

    let on_close = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(overlay.closed()))
    };

    let on_notice = {
        let toasts = toasts.clone();
        Callback::from(move |notice: Notice| toasts.dispatch(ToastAction::Push(notice)))
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let language = *language;
    let dark_mode = *dark_mode;

    html! {
        <div class={classes!("site", dark_mode.then(|| "dark"))} lang={language.code()}>
            <Header
                {language}
                {on_language}
                {dark_mode}
                {on_toggle_theme}
            />
            <Hero {language} {dark_mode} on_join={open_from(LeadSource::Hero)} />
            <About {language} {dark_mode} />
            <Features {language} {dark_mode} />
            <HowItWorks {language} {dark_mode} />
            <Pricing {language} {dark_mode} {on_select_plan} />
            <Download {language} {dark_mode} />
            <Testimonials {language} {dark_mode} />
            <Contact {language} {dark_mode} on_notice={on_notice.clone()} />
            <Footer {language} {dark_mode} on_join={open_from(LeadSource::Footer)} />

            <LeadCapture
                overlay={(*overlay).clone()}
                {language}
                {on_close}
                {on_notice}
            />
            <Toaster toasts={toasts.items.clone()} {on_dismiss} />

            <style>
                {r#"
:root {
    --accent-1: #e07a5f;
    --accent-2: #c8553d;
    --accent-3: #3f3d56;
    --cream: #fdf6ec;
    --cream-dark: #f3e3cc;
    --text: #1f2933;
    --muted: #52606d;
}

.site {
    min-height: 100vh;
    background: var(--cream);
    color: var(--text);
    font-family: 'Inter', sans-serif;
    transition: background 0.3s ease, color 0.3s ease;
}

.site.dark {
    background: #111827;
    color: #f9fafb;
    --muted: #9ca3af;
}

h1, h2, h3, h4 {
    font-family: 'Poppins', sans-serif;
}

.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    backdrop-filter: blur(12px);
    background: rgba(253, 246, 236, 0.85);
}

.dark .top-nav {
    background: rgba(17, 24, 39, 0.85);
}

.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 700;
    font-size: 1.4rem;
    color: inherit;
    text-decoration: none;
}

.logo-mark {
    display: inline-flex;
    width: 40px;
    height: 40px;
    align-items: center;
    justify-content: center;
    border-radius: 10px;
    background: linear-gradient(135deg, var(--accent-1), var(--accent-3));
    color: #fff;
}

.nav-right {
    display: flex;
    align-items: center;
    gap: 1.25rem;
}

.nav-link {
    color: inherit;
    text-decoration: none;
    font-weight: 500;
}

.nav-link:hover {
    color: var(--accent-1);
}

.lang-switch {
    display: flex;
    gap: 0.25rem;
}

.lang-button, .theme-toggle {
    border: 1px solid rgba(63, 61, 86, 0.2);
    background: transparent;
    color: inherit;
    border-radius: 8px;
    padding: 0.3rem 0.6rem;
    cursor: pointer;
}

.lang-button.active {
    background: var(--accent-1);
    color: #fff;
}

.nav-cta, .hero-cta.primary, .plan-cta, .submit-button, .footer-cta, .offer-cta {
    background: linear-gradient(90deg, var(--accent-1), var(--accent-3));
    color: #fff;
    border: none;
    border-radius: 12px;
    padding: 0.75rem 1.5rem;
    font-weight: 600;
    cursor: pointer;
    text-decoration: none;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}

.burger-menu span {
    width: 24px;
    height: 2px;
    background: currentColor;
}

section {
    padding: 6rem 1.5rem;
}

.section-dark {
    background: #1f2937;
}

.section-inner {
    max-width: 1200px;
    margin: 0 auto;
    text-align: center;
}

.section-inner h2 {
    font-size: 2.5rem;
    margin-bottom: 1rem;
}

.section-lead {
    color: var(--muted);
    font-size: 1.2rem;
    max-width: 720px;
    margin: 0 auto 3rem;
}

.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 3rem;
    padding-top: 8rem;
    background: linear-gradient(135deg, var(--cream), var(--cream-dark));
}

.hero.hero-dark {
    background: #111827;
}

.hero-content {
    max-width: 640px;
}

.hero-tagline {
    color: var(--accent-1);
    font-weight: 600;
    min-height: 1.5em;
    animation: fade-in 0.6s ease;
}

.hero h1 {
    font-size: 3.5rem;
    line-height: 1.1;
}

.hero-subtitle {
    color: var(--muted);
    font-size: 1.25rem;
}

.hero-cta-group {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    align-items: center;
    margin-top: 2rem;
}

.hero-cta.secondary {
    border: 2px solid rgba(63, 61, 86, 0.3);
    background: transparent;
    color: inherit;
    border-radius: 12px;
    padding: 0.75rem 1.5rem;
    cursor: pointer;
}

.hero-link {
    color: var(--accent-1);
    text-decoration: none;
}

.hero-card {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    max-width: 280px;
    padding: 1.5rem;
    border-radius: 16px;
    background: rgba(255, 255, 255, 0.8);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
}

.dark .hero-card, .dark .feature-card, .dark .plan-card, .dark .stat-card,
.dark .testimonial-card, .dark .contact-form, .dark .contact-info, .dark .lead-modal {
    background: rgba(31, 41, 55, 0.9);
}

.offer-card {
    margin: 0 auto 3rem;
    max-width: 560px;
    padding: 2rem;
    border-radius: 16px;
    border: 2px dashed var(--accent-1);
}

.stats-grid, .features-grid, .plans-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.5rem;
}

.stat-card, .feature-card, .plan-card {
    background: rgba(255, 255, 255, 0.85);
    border-radius: 16px;
    padding: 2rem;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
}

.stat-number {
    font-size: 2.5rem;
    font-weight: 700;
    color: var(--accent-1);
}

.stat-label, .stats-updated, .apk-note, .plan-description {
    color: var(--muted);
}

.inline-notice {
    color: #f87171;
    font-size: 0.9rem;
}

.feature-icon {
    font-size: 2rem;
}

.steps {
    list-style: none;
    padding: 0;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    gap: 1.5rem;
}

.step-number {
    display: inline-flex;
    width: 48px;
    height: 48px;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    background: var(--accent-1);
    color: #fff;
    font-weight: 700;
}

.plan-card {
    position: relative;
    text-align: left;
}

.plan-popular {
    border: 2px solid var(--accent-1);
}

.plan-badge {
    position: absolute;
    top: -14px;
    right: 1.5rem;
    background: var(--accent-1);
    color: #fff;
    border-radius: 999px;
    padding: 0.2rem 0.8rem;
    font-size: 0.85rem;
}

.plan-price {
    font-size: 2.5rem;
    font-weight: 700;
}

.plan-features {
    padding-left: 1.2rem;
    margin-bottom: 1.5rem;
}

.download-inner {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
    text-align: left;
}

.phone-mock {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 240px;
    height: 440px;
    margin: 0 auto;
    border-radius: 36px;
    border: 10px solid #111827;
    background: linear-gradient(160deg, var(--cream), var(--cream-dark));
}

.phone-mock .logo-mark {
    width: 96px;
    height: 96px;
    font-size: 3rem;
    border-radius: 24px;
}

.store-buttons {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.store-button {
    display: inline-flex;
    flex-direction: column;
    padding: 0.9rem 1.4rem;
    border-radius: 12px;
    background: #111827;
    color: #fff;
    text-decoration: none;
    font-weight: 600;
}

.store-button.disabled {
    opacity: 0.5;
    cursor: not-allowed;
    pointer-events: none;
}

.store-button small {
    font-weight: 400;
    font-size: 0.75rem;
}

.carousel {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}

.carousel-arrow {
    background: none;
    border: none;
    font-size: 2.5rem;
    color: inherit;
    cursor: pointer;
}

.testimonial-card {
    max-width: 640px;
    padding: 2.5rem;
    border-radius: 20px;
    background: rgba(255, 255, 255, 0.9);
    animation: fade-in 0.5s ease;
}

.testimonial-stars {
    color: #f59e0b;
    letter-spacing: 0.2rem;
}

.testimonial-author {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    text-align: left;
}

.testimonial-author img {
    width: 56px;
    height: 56px;
    border-radius: 50%;
}

.testimonial-author span {
    display: block;
    color: var(--muted);
}

.carousel-dots {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin-top: 1.5rem;
}

.carousel-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    border: none;
    background: rgba(63, 61, 86, 0.3);
    cursor: pointer;
}

.carousel-dot.active {
    background: var(--accent-1);
}

.contact-grid {
    display: grid;
    grid-template-columns: 3fr 2fr;
    gap: 2rem;
    text-align: left;
}

.contact-form, .contact-info {
    background: rgba(255, 255, 255, 0.9);
    border-radius: 20px;
    padding: 2rem;
}

fieldset {
    border: none;
    padding: 0;
    margin: 0;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}

input, textarea {
    padding: 0.8rem 1rem;
    border-radius: 10px;
    border: 1px solid rgba(63, 61, 86, 0.2);
    font: inherit;
    width: 100%;
    box-sizing: border-box;
}

label {
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
    font-size: 0.9rem;
}

.submit-button:disabled, fieldset:disabled .submit-button {
    opacity: 0.7;
    cursor: wait;
}

.spinner {
    display: inline-block;
    width: 14px;
    height: 14px;
    margin-right: 0.5rem;
    border: 2px solid rgba(255, 255, 255, 0.4);
    border-top-color: #fff;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}

.contact-item {
    display: flex;
    gap: 1rem;
    margin-top: 1.25rem;
}

.contact-item a {
    display: block;
    color: inherit;
}

.contact-icon {
    font-size: 1.4rem;
    color: var(--accent-1);
}

.site-footer {
    padding: 4rem 1.5rem 2rem;
    background: var(--cream-dark);
}

.footer-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 2fr 1fr 1fr 1fr;
    gap: 2rem;
}

.site-footer ul {
    list-style: none;
    padding: 0;
}

.site-footer a {
    color: inherit;
    text-decoration: none;
}

.social-links {
    display: flex;
    gap: 0.75rem;
}

.footer-bottom {
    max-width: 1200px;
    margin: 2rem auto 0;
    display: flex;
    justify-content: space-between;
    color: var(--muted);
    font-size: 0.9rem;
}

.modal-backdrop {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.55);
    padding: 1rem;
}

.lead-modal {
    position: relative;
    width: 100%;
    max-width: 520px;
    background: #fff;
    border-radius: 20px;
    padding: 2rem;
}

.modal-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    background: none;
    border: none;
    font-size: 1.2rem;
    color: inherit;
    cursor: pointer;
}

.modal-subtitle {
    color: var(--muted);
}

.toaster {
    position: fixed;
    top: 5rem;
    right: 1rem;
    z-index: 200;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.toast {
    display: flex;
    align-items: center;
    gap: 1rem;
    min-width: 260px;
    padding: 0.9rem 1.2rem;
    border-radius: 12px;
    color: #fff;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
    animation: fade-in 0.3s ease;
}

.toast-success {
    background: #059669;
}

.toast-error {
    background: #dc2626;
}

.toast-close {
    margin-left: auto;
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
}

@keyframes fade-in {
    from { opacity: 0; transform: translateY(8px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

@media (max-width: 900px) {
    .burger-menu {
        display: flex;
    }

    .nav-right {
        display: none;
    }

    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        padding: 1.5rem;
        background: inherit;
    }

    .hero {
        flex-direction: column;
    }

    .hero h1 {
        font-size: 2.4rem;
    }

    .download-inner, .contact-grid, .form-row, .footer-grid {
        grid-template-columns: 1fr;
    }

    .footer-bottom {
        flex-direction: column;
        gap: 0.5rem;
    }
}
                "#}
            </style>
        </div>
    }
}
