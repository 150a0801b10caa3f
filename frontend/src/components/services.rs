use yew::prelude::*;

use crate::content::{Service, SERVICES};
use crate::reveal::{use_scroll_reveal, use_stagger_reveal, RevealConfig};

fn service_card(service: &Service) -> Html {
    html! {
        <div class="card service-card">
            <div class="service-head">
                <div class="icon-tile large">{service.icon}</div>
                <div>
                    <h3 class="heading-card">{service.title}</h3>
                    <p class="text-muted small">{service.description}</p>
                </div>
            </div>
            <div class="why-different">
                <p><strong>{"Why it's different: "}</strong>{service.why_different}</p>
            </div>
            <p class="outcomes-title">{"What you get:"}</p>
            <ul class="icon-list">
                { for service.outcomes.iter().map(|outcome| html! {
                    <li><span class="icon">{"✓"}</span><span>{*outcome}</span></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let header_ref = use_scroll_reveal(RevealConfig::default());
    let cards_ref = use_stagger_reveal(RevealConfig::group().duration(0.7).stagger(0.15));

    html! {
        <section id="services" class="section-padding bg-secondary">
            <style>
                {r#"
                    .services-grid { display: grid; gap: 1.5rem; }
                    @media (min-width: 1024px) { .services-grid { grid-template-columns: repeat(2, 1fr); } }
                    .service-card { padding: 2rem; }
                    .service-head { display: flex; align-items: flex-start; gap: 1rem; margin-bottom: 1.5rem; }
                    .why-different {
                        background: rgba(224, 242, 254, 0.5);
                        border-left: 4px solid var(--primary);
                        padding: 1rem;
                        margin-bottom: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .why-different p { margin: 0; }
                    .outcomes-title { font-size: 0.875rem; font-weight: 600; }
                "#}
            </style>
            <div class="section-container">
                <div class="section-header" ref={header_ref}>
                    <p class="text-caption">{"What I Deliver"}</p>
                    <h2 class="heading-section">{"Solutions, Not Services"}</h2>
                    <p class="text-body">
                        {"I don't sell SEO packages. I solve growth problems. Each engagement is custom-built around your business goals, market position, and revenue targets."}
                    </p>
                </div>
                <div class="services-grid" ref={cards_ref}>
                    { for SERVICES.iter().map(service_card) }
                </div>
            </div>
        </section>
    }
}
