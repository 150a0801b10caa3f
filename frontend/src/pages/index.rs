use yew::prelude::*;

use crate::components::{
    about::About,
    case_studies::CaseStudies,
    contact::Contact,
    footer::Footer,
    framework::Framework,
    hero::Hero,
    insights::Insights,
    proof::ProofSection,
    services::Services,
};

/// The whole site: every section in page order.
#[function_component(Index)]
pub fn index() -> Html {
    html! {
        <>
            <style>
                {r#"
                    :root {
                        --background: #ffffff;
                        --foreground: #0f172a;
                        --primary: #0891b2;
                        --primary-foreground: #ffffff;
                        --secondary: #f8fafc;
                        --accent: #e0f2fe;
                        --card: #ffffff;
                        --muted: #64748b;
                        --border: #e2e8f0;
                    }
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        font-family: 'Inter', system-ui, -apple-system, sans-serif;
                        background: var(--background);
                        color: var(--foreground);
                        -webkit-font-smoothing: antialiased;
                    }
                    img { max-width: 100%; display: block; }
                    .section-container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                    .section-padding { padding: 6rem 0; }
                    .bg-secondary { background: var(--secondary); }
                    .section-header { text-align: center; max-width: 48rem; margin: 0 auto 4rem; }
                    .narrow { max-width: 56rem; margin-left: auto; margin-right: auto; }
                    .text-caption {
                        font-size: 0.75rem;
                        font-weight: 600;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: var(--primary);
                        margin: 0 0 1rem;
                    }
                    .heading-display { font-size: clamp(2.5rem, 5vw, 4rem); line-height: 1.1; font-weight: 800; margin: 0; }
                    .heading-section { font-size: clamp(2rem, 4vw, 3rem); line-height: 1.15; font-weight: 700; margin: 0 0 1.5rem; }
                    .heading-card { font-size: 1.25rem; font-weight: 600; margin: 0 0 0.5rem; }
                    .heading-card.large { font-size: 1.75rem; }
                    .text-body { font-size: 1.125rem; line-height: 1.7; color: var(--muted); }
                    .text-muted { color: var(--muted); line-height: 1.6; }
                    .small { font-size: 0.875rem; }
                    .tabular-nums { font-variant-numeric: tabular-nums; }
                    .gradient-text {
                        background: linear-gradient(135deg, #0891b2, #0e7490);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .gradient-bg { background: linear-gradient(135deg, #0891b2, #0e7490); color: var(--primary-foreground); }
                    .card {
                        background: var(--card);
                        border: 1px solid var(--border);
                        padding: 1.5rem;
                        transition: border-color 0.3s, box-shadow 0.3s;
                    }
                    .card:hover { border-color: rgba(8, 145, 178, 0.4); box-shadow: 0 10px 30px rgba(8, 145, 178, 0.08); }
                    .icon-tile {
                        width: 3rem;
                        height: 3rem;
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--accent);
                        color: var(--primary);
                        font-size: 1.25rem;
                        margin-bottom: 1rem;
                    }
                    .icon-tile.large { width: 3.5rem; height: 3.5rem; }
                    .icon { color: var(--primary); }
                    .icon-list { list-style: none; padding: 0; margin: 1.5rem 0; }
                    .icon-list li { display: flex; gap: 0.75rem; margin-bottom: 0.75rem; }
                    .split-grid { display: grid; gap: 3rem; align-items: center; margin-bottom: 4rem; }
                    @media (min-width: 1024px) { .split-grid { grid-template-columns: 1fr 1fr; } }
                    .framed-image { border: 1px solid var(--border); overflow: hidden; margin-bottom: 3rem; }
                    .framed-image img { width: 100%; height: auto; }
                    .kicker-center {
                        text-align: center;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        color: var(--muted);
                        margin: 0 0 2rem;
                    }
                    .dark-banner {
                        margin-top: 4rem;
                        padding: 3rem 2rem;
                        text-align: center;
                        background: var(--foreground);
                        color: var(--background);
                    }
                    .banner-kicker { font-size: 0.75rem; letter-spacing: 0.15em; color: var(--primary); margin: 0 0 1rem; }
                    .banner-quote { font-size: 1.5rem; font-weight: 500; max-width: 48rem; margin: 0 auto 1.5rem; }
                    .banner-link { color: var(--primary); font-weight: 600; text-decoration: none; }
                    .btn-hero,
                    .btn-outline {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.875rem 1.75rem;
                        font-weight: 600;
                        font-size: 1rem;
                        text-decoration: none;
                        border: none;
                        cursor: pointer;
                        transition: transform 0.2s, box-shadow 0.2s;
                    }
                    .btn-hero { background: var(--primary); color: var(--primary-foreground); }
                    .btn-hero:hover { transform: translateY(-2px); box-shadow: 0 10px 25px rgba(8, 145, 178, 0.3); }
                    .btn-outline { background: transparent; color: var(--foreground); border: 1px solid var(--border); }
                    .btn-outline:hover { border-color: var(--primary); color: var(--primary); }
                "#}
            </style>
            <main>
                <Hero />
                <ProofSection />
                <Framework />
                <Services />
                <CaseStudies />
                <About />
                <Insights />
                <Contact />
            </main>
            <Footer />
        </>
    }
}
