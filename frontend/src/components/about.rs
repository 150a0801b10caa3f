use yew::prelude::*;

use crate::content::{ABOUT_HIGHLIGHTS, PRINCIPLES};
use crate::reveal::{use_scroll_reveal, use_stagger_reveal, RevealConfig, RevealProfile};

#[function_component(About)]
pub fn about() -> Html {
    let profile_ref = use_scroll_reveal(
        RevealConfig::new(RevealProfile::FadeLeft)
            .duration(0.9)
            .start("top 80%"),
    );
    let philosophy_ref = use_stagger_reveal(
        RevealConfig::group()
            .profile(RevealProfile::FadeRight)
            .duration(0.7)
            .stagger(0.15)
            .start("top 80%"),
    );

    html! {
        <section id="about" class="section-padding bg-secondary">
            <style>
                {r#"
                    .about-grid { display: grid; gap: 3rem; align-items: center; }
                    @media (min-width: 1024px) { .about-grid { grid-template-columns: 1fr 1fr; gap: 5rem; } }
                    .about-photo { position: relative; margin-bottom: 2rem; }
                    .about-years {
                        position: absolute;
                        right: -1rem;
                        bottom: -1rem;
                        width: 7rem;
                        height: 7rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: var(--card);
                        border: 1px solid var(--border);
                    }
                    .about-quote {
                        padding: 1.5rem 1.5rem 1.5rem 3.5rem;
                        position: relative;
                        background: var(--card);
                        border: 1px solid var(--border);
                        font-size: 1.125rem;
                        font-style: italic;
                    }
                    .about-quote::before {
                        content: "\201C";
                        position: absolute;
                        left: 1rem;
                        top: 0.5rem;
                        font-size: 3rem;
                        color: rgba(8, 145, 178, 0.2);
                    }
                    .principles > * + * { margin-top: 1.5rem; }
                    .principle-row { display: flex; align-items: flex-start; gap: 1rem; }
                    .why-title { margin-top: 2rem; padding: 1.5rem; color: var(--primary-foreground); }
                "#}
            </style>
            <div class="section-container">
                <div class="about-grid">
                    <div ref={profile_ref}>
                        <div class="about-photo">
                            <div class="framed-image">
                                <img src="/assets/god-of-seo.svg" alt="Harsh Chauhan - God of SEO" />
                            </div>
                            <div class="about-years">
                                <p class="achievement-value gradient-text">{"2+"}</p>
                                <p class="metric-detail">{"Years at"}<br />{"PingMedia"}</p>
                            </div>
                        </div>
                        <p class="text-caption">{"About Harsh Chauhan"}</p>
                        <h2 class="heading-section">{"The God of SEO & Digital Marketing Expert"}</h2>
                        <p class="text-body">
                            {"For many people in digital marketing, "}<strong>{"Harsh Chauhan"}</strong>{" AKA "}<strong>{"Chauhan Sahab"}</strong>
                            {" has made a remarkable contribution, single-handedly changing how people use social media and search engine optimization (SEO)."}
                        </p>
                        <p class="text-body">
                            {"As an SEO Manager at "}<strong>{"PingMedia"}</strong>
                            {", Harsh has transformed the digital landscape by enabling brands to succeed online. His expertise in SEO, SMO, ORM, SEM and SMM earned him impressive results with big names like HostGator.in, LiveHindustan.com, HindustanTimes.com, EaseMyTrip.com, and many more."}
                        </p>
                        <ul class="icon-list">
                            { for ABOUT_HIGHLIGHTS.iter().map(|item| html! {
                                <li><span class="icon">{item.icon}</span><span>{item.text}</span></li>
                            }) }
                        </ul>
                        <p class="about-quote">
                            {"\"Everything I am today, I owe to PingMedia. Continuously learning the latest Google Algorithms is the key to mastering SEO.\""}
                        </p>
                    </div>

                    <div ref={philosophy_ref}>
                        <p class="text-caption">{"My Philosophy"}</p>
                        <div class="principles">
                            { for PRINCIPLES.iter().map(|principle| html! {
                                <div class="card">
                                    <div class="principle-row">
                                        <div class="icon-tile">{principle.icon}</div>
                                        <div>
                                            <h3 class="heading-card">{principle.card.title}</h3>
                                            <p class="text-muted small">{principle.card.body}</p>
                                        </div>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="why-title gradient-bg">
                            <h4>{"Why \"God of SEO\"?"}</h4>
                            <p class="small">
                                {"Harsh earned this title due to his innovative SEO techniques, massive digital impact, and ability to drive millions of organic views using strategic, algorithm-proof methods. His COCO Strategy (Content Optimization & Conversion Optimization) has revolutionized how brands approach SEO."}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
