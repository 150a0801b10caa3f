use yew::prelude::*;

use crate::config;
use crate::content::{INSIGHTS, LESSONS};
use crate::reveal::{use_scroll_reveal, use_stagger_reveal, RevealConfig, RevealProfile};

#[function_component(Insights)]
pub fn insights() -> Html {
    let header_ref = use_scroll_reveal(RevealConfig::default());
    let grid_ref = use_stagger_reveal(RevealConfig::group().duration(0.7).stagger(0.15));
    let lessons_ref = use_stagger_reveal(RevealConfig::group().profile(RevealProfile::ScaleIn));
    let cta_ref = use_scroll_reveal(RevealConfig::default().duration(0.6).start("top 90%"));

    html! {
        <section id="insights" class="section-padding">
            <style>
                {r#"
                    .insights-grid { display: grid; gap: 3rem; margin-bottom: 4rem; }
                    @media (min-width: 1024px) { .insights-grid { grid-template-columns: 1fr 1fr; align-items: start; } }
                    .insight-list > * + * { margin-top: 1rem; }
                    .insight { display: flex; align-items: flex-start; gap: 1rem; }
                    .lessons-grid { display: grid; gap: 1.5rem; margin-bottom: 4rem; }
                    @media (min-width: 768px) { .lessons-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (min-width: 1024px) { .lessons-grid { grid-template-columns: repeat(4, 1fr); } }
                    .lesson-number {
                        display: block;
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: rgba(8, 145, 178, 0.2);
                        margin-bottom: 0.75rem;
                    }
                "#}
            </style>
            <div class="section-container">
                <div class="section-header" ref={header_ref}>
                    <p class="text-caption">{"Thought Leadership"}</p>
                    <h2 class="heading-section">{"The Future of SEO"}</h2>
                    <p class="text-body">
                        {"Harsh Chauhan's predictions and insights on where search is heading, and how to stay ahead of the curve."}
                    </p>
                </div>

                <div class="insights-grid" ref={grid_ref}>
                    <div class="framed-image">
                        <img src="/assets/best-seo-expert.svg" alt="Harsh Chauhan - Best SEO Expert" loading="lazy" />
                    </div>
                    <div class="insight-list">
                        { for INSIGHTS.iter().map(|insight| html! {
                            <div class="card insight">
                                <div class="icon-tile">{insight.icon}</div>
                                <div>
                                    <h3 class="heading-card">{insight.card.title}</h3>
                                    <p class="text-muted small">{insight.card.body}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <p class="kicker-center">{"LESSONS FROM A DECADE IN SEARCH"}</p>
                <div class="lessons-grid" ref={lessons_ref}>
                    { for LESSONS.iter().enumerate().map(|(i, lesson)| html! {
                        <div class="card">
                            <span class="lesson-number">{format!("{:02}", i + 1)}</span>
                            <h3 class="heading-card">{lesson.title}</h3>
                            <p class="text-muted small">{lesson.body}</p>
                        </div>
                    }) }
                </div>

                <div class="dark-banner" ref={cta_ref}>
                    <p class="banner-kicker">{"STAY AHEAD OF THE ALGORITHM"}</p>
                    <p class="banner-quote">
                        {"\"The brands that win tomorrow are the ones adapting today.\""}
                    </p>
                    <a class="banner-link" href={config::whatsapp_url(config::WHATSAPP_PRIMARY, None)} target="_blank" rel="noopener noreferrer">
                        {"Future-Proof Your SEO →"}
                    </a>
                </div>
            </div>
        </section>
    }
}
