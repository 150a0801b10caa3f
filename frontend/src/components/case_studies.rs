use yew::prelude::*;

use crate::config;
use crate::content::{Card, ACHIEVEMENTS, BRANDS, LORD_OF_SEO_REASONS};
use crate::reveal::{use_scroll_reveal, use_stagger_reveal, RevealConfig, RevealProfile};

fn reason(card: &Card) -> Html {
    html! {
        <div class="reason">
            <span class="reason-dot"></span>
            <div>
                <p class="reason-title">{card.title}</p>
                <p class="text-muted">{card.body}</p>
            </div>
        </div>
    }
}

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    let header_ref = use_scroll_reveal(RevealConfig::default());
    let brands_ref = use_stagger_reveal(
        RevealConfig::group()
            .profile(RevealProfile::ScaleIn)
            .duration(0.5)
            .stagger(0.05),
    );
    let achievements_ref = use_stagger_reveal(RevealConfig::group());
    let reasons_ref = use_stagger_reveal(
        RevealConfig::group()
            .duration(0.8)
            .stagger(0.2)
            .start("top 80%"),
    );
    let featured_ref = use_scroll_reveal(
        RevealConfig::new(RevealProfile::FadeIn)
            .duration(1.0)
            .start("top 80%"),
    );
    let cta_ref = use_scroll_reveal(RevealConfig::default().duration(0.6).start("top 90%"));

    html! {
        <section id="case-studies" class="section-padding">
            <style>
                {r#"
                    .brand-tiles { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; max-width: 56rem; margin: 0 auto 5rem; }
                    .brand-tile {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                    }
                    .brand-industry { font-size: 0.75rem; color: var(--muted); }
                    .achievement-grid { display: grid; gap: 1.5rem; max-width: 64rem; margin: 0 auto 5rem; }
                    @media (min-width: 768px) { .achievement-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (min-width: 1024px) { .achievement-grid { grid-template-columns: repeat(4, 1fr); } }
                    .achievement { text-align: center; }
                    .achievement .icon-tile { margin: 0 auto 1rem; border-radius: 9999px; }
                    .achievement-value { font-size: 1.875rem; font-weight: 700; margin: 0 0 0.5rem; }
                    .reasons-grid { display: grid; gap: 1.5rem 2rem; }
                    @media (min-width: 768px) { .reasons-grid { grid-template-columns: repeat(2, 1fr); } }
                    .reason { display: flex; align-items: flex-start; gap: 0.75rem; }
                    .reason-dot { width: 0.75rem; height: 0.75rem; margin-top: 0.5rem; border-radius: 9999px; background: var(--primary); flex-shrink: 0; }
                    .reason-title { font-size: 1.125rem; font-weight: 600; margin: 0 0 0.25rem; }
                "#}
            </style>
            <div class="section-container">
                <div class="section-header" ref={header_ref}>
                    <p class="text-caption">{"Proof of Performance"}</p>
                    <h2 class="heading-section">{"Trusted by Industry Leaders"}</h2>
                    <p class="text-body">
                        {"From startups to enterprise brands, Harsh Chauhan's SEO expertise has transformed businesses across industries."}
                    </p>
                </div>

                <p class="kicker-center">{"BRANDS HARSH HAS WORKED WITH"}</p>
                <div class="brand-tiles" ref={brands_ref}>
                    { for BRANDS.iter().map(|brand| html! {
                        <div class="brand-tile">
                            <span class="icon">{"▦"}</span>
                            <span>{brand.name}</span>
                            <span class="brand-industry">{format!("({})", brand.industry)}</span>
                        </div>
                    }) }
                </div>

                <div class="achievement-grid" ref={achievements_ref}>
                    { for ACHIEVEMENTS.iter().map(|achievement| html! {
                        <div class="card achievement">
                            <div class="icon-tile gradient-bg">{achievement.icon}</div>
                            <p class="achievement-value gradient-text">{achievement.value}</p>
                            <p class="metric-label">{achievement.metric}</p>
                            <p class="metric-detail">{achievement.description}</p>
                        </div>
                    }) }
                </div>

                <div class="framed-image narrow" ref={featured_ref}>
                    <img src="/assets/lord-of-seo.svg" alt="Harsh Chauhan - Lord of SEO Achievements" loading="lazy" />
                </div>
                <p class="kicker-center">{"Real results from real clients - The proof is in the performance"}</p>

                <div class="narrow">
                    <div class="section-header">
                        <h3 class="heading-card large">{"Why Harsh is the \"Lord of SEO\""}</h3>
                        <p class="text-muted">
                            {"The \"SEO Master\" title is not just a name, it's the result of Harsh's mastery and creativity in revolutionizing the industry."}
                        </p>
                    </div>
                    <div class="reasons-grid" ref={reasons_ref}>
                        { for LORD_OF_SEO_REASONS.iter().map(reason) }
                    </div>
                </div>

                <div class="dark-banner narrow" ref={cta_ref}>
                    <p class="banner-kicker">{"READY FOR TRANSFORMATIVE RESULTS?"}</p>
                    <p class="banner-quote">
                        {"\"Don't just rank, dominate. Let's apply the COCO Strategy to your business.\""}
                    </p>
                    <a class="btn-hero" href={config::whatsapp_url(config::WHATSAPP_PRIMARY, None)} target="_blank" rel="noopener noreferrer">
                        {"Get Your Custom SEO Strategy →"}
                    </a>
                </div>
            </div>
        </section>
    }
}
