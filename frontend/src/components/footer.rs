use chrono::{Datelike, Local};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::content::FOOTER_LINKS;

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();
    let back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: var(--foreground);
                        color: var(--background);
                        padding: 4rem 0 2rem;
                    }
                    .footer-grid { display: grid; gap: 3rem; margin-bottom: 3rem; }
                    @media (min-width: 768px) { .footer-grid { grid-template-columns: 2fr 1fr 1fr; } }
                    .footer-brand { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
                    .footer-blurb { color: rgba(255, 255, 255, 0.6); max-width: 28rem; font-size: 0.875rem; }
                    .footer-social { display: flex; gap: 0.75rem; margin-top: 1.5rem; }
                    .footer-social a,
                    .footer-links a {
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                        font-size: 0.875rem;
                    }
                    .footer-social a {
                        padding: 0.5rem 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .footer-social a:hover,
                    .footer-links a:hover { color: var(--primary); }
                    .footer-heading { font-weight: 600; margin: 0 0 1rem; }
                    .footer-links { list-style: none; padding: 0; margin: 0; }
                    .footer-links li + li { margin-top: 0.75rem; }
                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.5);
                    }
                    .back-to-top {
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        font: inherit;
                    }
                    .back-to-top:hover { color: var(--primary); }
                "#}
            </style>
            <div class="section-container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <div class="icon-tile gradient-bg">{config::BRAND_INITIALS}</div>
                            <div>
                                <p class="footer-heading">{config::BRAND_NAME}</p>
                                <p class="footer-blurb">{config::BRAND_TITLE}</p>
                            </div>
                        </div>
                        <p class="footer-blurb">
                            {"SEO Manager at PingMedia. Master of SEO, SMO, ORM, SEM & SMM, helping brands turn search visibility into revenue with the COCO Strategy."}
                        </p>
                        <div class="footer-social">
                            <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"LinkedIn"}</a>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)} aria-label="Email">{"Email"}</a>
                        </div>
                    </div>
                    <div>
                        <p class="footer-heading">{"Quick Links"}</p>
                        <ul class="footer-links">
                            { for FOOTER_LINKS.iter().map(|link| html! {
                                <li><a href={link.href}>{link.label}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <p class="footer-heading">{"Free Consultation"}</p>
                        <p class="footer-blurb">{"Talk strategy directly on WhatsApp."}</p>
                        <a class="btn-hero" href={config::whatsapp_url(config::WHATSAPP_CONSULT, Some(config::WHATSAPP_MESSAGE))}
                            target="_blank" rel="noopener noreferrer">
                            {"Chat on WhatsApp"}
                        </a>
                    </div>
                </div>
                <div class="footer-bottom">
                    <span>{format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}</span>
                    <button class="back-to-top" onclick={back_to_top}>{"Back to top ↑"}</button>
                </div>
            </div>
        </footer>
    }
}
