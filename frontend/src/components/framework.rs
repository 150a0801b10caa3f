use yew::prelude::*;

use crate::config;
use crate::content::FRAMEWORK_STEPS;
use crate::reveal::{use_scroll_reveal, use_stagger_reveal, RevealConfig, RevealProfile};

#[function_component(Framework)]
pub fn framework() -> Html {
    let header_ref = use_scroll_reveal(RevealConfig::default());
    let image_ref = use_scroll_reveal(RevealConfig::new(RevealProfile::ScaleIn).start("top 80%"));
    let steps_ref = use_stagger_reveal(RevealConfig::group().duration(0.7).stagger(0.2));
    let cta_ref = use_scroll_reveal(RevealConfig::default().start("top 90%"));

    html! {
        <section id="framework" class="section-padding">
            <style>
                {r#"
                    .steps-grid { display: grid; gap: 1.5rem; }
                    @media (min-width: 768px) { .steps-grid { grid-template-columns: repeat(2, 1fr); } }
                    .step-row { display: flex; align-items: flex-start; gap: 1rem; }
                    .step-letter {
                        width: 3.5rem;
                        height: 3.5rem;
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--primary-foreground);
                        box-shadow: 0 0 24px rgba(8, 145, 178, 0.35);
                    }
                    .step-points { list-style: none; padding: 0; margin: 0; }
                    .step-points li { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; color: var(--muted); }
                    .step-points li::before {
                        content: "";
                        width: 0.375rem;
                        height: 0.375rem;
                        background: var(--primary);
                        flex-shrink: 0;
                    }
                "#}
            </style>
            <div class="section-container">
                <div class="section-header" ref={header_ref}>
                    <p class="text-caption">{"The Revolutionary Method"}</p>
                    <h2 class="heading-section">{"The COCO Strategy"}</h2>
                    <p class="text-body">
                        {"Harsh Chauhan's revolutionary approach to SEO: Content Optimization & Conversion Optimization working together for maximum business impact."}
                    </p>
                </div>

                <div class="framed-image narrow" ref={image_ref}>
                    <img src="/assets/coco-strategy.svg" alt="COCO Strategy - Harsh Chauhan" />
                </div>

                <div class="steps-grid" ref={steps_ref}>
                    { for FRAMEWORK_STEPS.iter().map(|step| html! {
                        <div class="card">
                            <div class="step-row">
                                <div class="step-letter gradient-bg">{step.letter.to_string()}</div>
                                <div>
                                    <h3 class="heading-card">
                                        <span class="icon">{step.icon}</span>{" "}{step.title}
                                    </h3>
                                    <p class="text-muted">{step.description}</p>
                                    <ul class="step-points">
                                        { for step.points.iter().map(|point| html! { <li>{*point}</li> }) }
                                    </ul>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="dark-banner" ref={cta_ref}>
                    <p class="banner-kicker">{"THE COCO DIFFERENCE"}</p>
                    <p class="banner-quote">
                        {"\"Unlike legacy SEO techniques, COCO utilizes real-time information, AI-based audits, and predictive analysis to stay ahead of Google's algorithm updates.\""}
                    </p>
                    <a class="banner-link" href={config::whatsapp_url(config::WHATSAPP_PRIMARY, None)} target="_blank" rel="noopener noreferrer">
                        {"Apply COCO Strategy to Your Business →"}
                    </a>
                </div>
            </div>
        </section>
    }
}
