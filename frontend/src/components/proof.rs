use yew::prelude::*;

use crate::content::{ProofMetric, DATA_DRIVEN_POINTS, PROOF_METRICS, TRUSTED_BRANDS};
use crate::reveal::{use_scroll_reveal, use_stagger_reveal, RevealConfig, RevealProfile};

fn metric_card(metric: &ProofMetric) -> Html {
    html! {
        <div class="card metric-card">
            <div class="icon-tile">{metric.icon}</div>
            <p class="metric-value">{metric.value}</p>
            <p class="metric-label">{metric.label}</p>
            <p class="metric-detail">{metric.detail}</p>
            <div class="mini-graph">
                { for metric.graph.iter().enumerate().map(|(i, height)| html! {
                    <div
                        class="mini-bar"
                        style={format!("height: {}%; transition-delay: {}ms;", height, i * 50)}
                    />
                }) }
            </div>
        </div>
    }
}

#[function_component(ProofSection)]
pub fn proof_section() -> Html {
    let header_ref = use_scroll_reveal(RevealConfig::default());
    let metrics_ref = use_stagger_reveal(RevealConfig::group().stagger(0.15));
    let content_ref = use_stagger_reveal(
        RevealConfig::group()
            .profile(RevealProfile::FadeLeft)
            .duration(0.8)
            .stagger(0.2)
            .start("top 80%"),
    );
    let brands_ref = use_stagger_reveal(
        RevealConfig::group()
            .profile(RevealProfile::ScaleIn)
            .duration(0.4),
    );
    let banner_ref = use_scroll_reveal(RevealConfig::default());

    html! {
        <section id="proof" class="section-padding bg-secondary">
            <style>
                {r#"
                    .metric-grid {
                        display: grid;
                        gap: 1.5rem;
                        margin-bottom: 4rem;
                    }
                    @media (min-width: 768px) { .metric-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (min-width: 1024px) { .metric-grid { grid-template-columns: repeat(4, 1fr); } }
                    .metric-value { font-size: 2.25rem; font-weight: 700; margin: 0 0 0.25rem; }
                    .metric-label { font-size: 0.875rem; font-weight: 600; margin: 0 0 0.25rem; }
                    .metric-detail { font-size: 0.75rem; color: var(--muted); margin: 0 0 1rem; }
                    .mini-graph { display: flex; align-items: flex-end; gap: 0.25rem; height: 2.5rem; }
                    .mini-bar {
                        flex: 1;
                        background: rgba(8, 145, 178, 0.2);
                        transition: background 0.5s;
                    }
                    .metric-card:hover .mini-bar { background: var(--primary); }
                    .brand-chips { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
                    .brand-chip {
                        padding: 0.5rem 1rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                "#}
            </style>
            <div class="section-container">
                <div class="section-header" ref={header_ref}>
                    <p class="text-caption">{"Real Data. Real Results."}</p>
                    <h2 class="heading-section">
                        {"SEO Is Not Magic. "}<span class="gradient-text">{"It's Systems + Execution."}</span>
                    </h2>
                    <p class="text-body">
                        {"Harsh Chauhan's data-driven optimization approach uses real-time analytics, user behavior tracking, and AI insights. No shortcuts. No tricks."}
                    </p>
                </div>

                <div class="metric-grid" ref={metrics_ref}>
                    { for PROOF_METRICS.iter().map(metric_card) }
                </div>

                <div class="split-grid" ref={content_ref}>
                    <div class="framed-image">
                        <img src="/assets/master-of-seo.svg" alt="Harsh Chauhan - Master of SEO" />
                    </div>
                    <div>
                        <h3 class="heading-card">{"The Power of Data-Driven SEO"}</h3>
                        <p class="text-muted">
                            {"One reason Harsh is very competitive in the SEO space, earning him the \"God of SEO\" title, is his data-driven optimization approach. Rather than using traditional methods, he utilizes modern-day tactics like real-time data analytics, user behavior tracking, and AI insights."}
                        </p>
                        <ul class="icon-list">
                            { for DATA_DRIVEN_POINTS.iter().map(|point| html! {
                                <li><span class="icon">{point.icon}</span><span>{point.text}</span></li>
                            }) }
                        </ul>
                    </div>
                </div>

                <p class="kicker-center">{"TRUSTED BY MAJOR BRANDS"}</p>
                <div class="brand-chips" ref={brands_ref}>
                    { for TRUSTED_BRANDS.iter().map(|brand| html! {
                        <span class="brand-chip">{*brand}</span>
                    }) }
                </div>

                <div class="dark-banner" ref={banner_ref}>
                    <p class="banner-kicker">{"THE GOD OF SEO PROMISE"}</p>
                    <p class="banner-quote">
                        {"\"SEO drives business growth, engagement, and long-term profitability, not just rankings.\""}
                    </p>
                </div>
            </div>
        </section>
    }
}
