use yew::prelude::*;

use crate::config;
use crate::content::TRUST_SIGNALS;
use crate::reveal::{use_count_up, use_scroll_reveal, use_stagger_reveal, RevealConfig, RevealProfile};

#[function_component(GrowthCounter)]
fn growth_counter() -> Html {
    let (node, value) = use_count_up(300, 2000);
    html! {
        <p ref={node} class="hero-stat-value gradient-text">
            <span class="tabular-nums">{format!("{}%+", value)}</span>
        </p>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    // Above the fold, so both reveals fire on the first viewport check.
    let copy_ref = use_stagger_reveal(
        RevealConfig::group()
            .stagger(0.15)
            .start("top 100%"),
    );
    let visual_ref = use_scroll_reveal(
        RevealConfig::new(RevealProfile::ScaleIn)
            .delay(0.4)
            .start("top 100%"),
    );

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding-top: 5rem;
                        overflow: hidden;
                        background-image:
                            linear-gradient(to right, var(--border) 1px, transparent 1px),
                            linear-gradient(to bottom, var(--border) 1px, transparent 1px);
                        background-size: 4rem 4rem;
                    }
                    .hero-grid {
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                    }
                    @media (min-width: 1024px) {
                        .hero-grid { grid-template-columns: 1fr 1fr; gap: 4rem; }
                    }
                    .hero-copy > * + * { margin-top: 2rem; }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        background: var(--accent);
                        border: 1px solid rgba(8, 145, 178, 0.2);
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .hero-badge .pulse {
                        width: 0.5rem;
                        height: 0.5rem;
                        background: var(--primary);
                        animation: pulse 2s infinite;
                    }
                    .hero-signals { list-style: none; padding: 0; }
                    .hero-signals li {
                        display: flex;
                        gap: 0.75rem;
                        color: var(--muted);
                        font-size: 0.875rem;
                        margin-bottom: 0.75rem;
                    }
                    .hero-ctas { display: flex; flex-wrap: wrap; gap: 1rem; }
                    .hero-visual { position: relative; }
                    .hero-visual img {
                        width: 100%;
                        height: auto;
                        border: 1px solid var(--border);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .hero-stats {
                        position: absolute;
                        bottom: -1.5rem;
                        left: -1.5rem;
                        display: flex;
                        gap: 0.75rem;
                        align-items: center;
                        padding: 1rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                    }
                    .hero-stat-value { font-size: 1.5rem; font-weight: 700; margin: 0; }
                    .hero-flag {
                        position: absolute;
                        top: -1rem;
                        right: -1rem;
                        padding: 0.5rem 1rem;
                        background: var(--primary);
                        color: var(--primary-foreground);
                        font-weight: 700;
                        font-size: 0.875rem;
                    }
                    @keyframes pulse { 50% { opacity: 0.4; } }
                "#}
            </style>
            <div class="section-container">
                <div class="hero-grid">
                    <div class="hero-copy" ref={copy_ref}>
                        <div class="hero-badge">
                            <span class="pulse"></span>
                            <span>{"God of SEO | Lord of SEO"}</span>
                        </div>
                        <h1 class="heading-display">
                            {"The "}<span class="gradient-text">{"God of SEO"}</span>{" & Digital Marketing Expert"}
                        </h1>
                        <p class="text-body hero-lead">
                            {"Harsh Chauhan, SEO Manager at PingMedia, master of SEO, SMO, ORM, SEM & SMM. Transforming brands into digital powerhouses with the revolutionary COCO Strategy."}
                        </p>
                        <ul class="hero-signals">
                            { for TRUST_SIGNALS.iter().map(|signal| html! {
                                <li>
                                    <span class="icon">{signal.icon}</span>
                                    <span>{signal.text}</span>
                                </li>
                            }) }
                        </ul>
                        <div class="hero-ctas">
                            <a class="btn-hero" href={config::whatsapp_url(config::WHATSAPP_PRIMARY, None)} target="_blank" rel="noopener noreferrer">
                                {"Get My SEO Strategy →"}
                            </a>
                            <a class="btn-outline" href="#case-studies">{"View Real Results"}</a>
                        </div>
                    </div>
                    <div class="hero-visual" ref={visual_ref}>
                        <img src="/assets/seo-analytics.svg" alt="SEO analytics dashboard" />
                        <div class="hero-stats">
                            <div class="gradient-bg icon-tile">{"↗"}</div>
                            <div>
                                <GrowthCounter />
                                <p class="text-caption">{"Organic Growth"}</p>
                            </div>
                        </div>
                        <div class="hero-flag">{"★ Lord of SEO"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
