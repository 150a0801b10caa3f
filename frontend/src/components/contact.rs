use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::Toast;
use crate::config;
use crate::contact::{ContactForm, Field};
use crate::content::{CONTACT_FEATURES, SUBMITTED_MESSAGE, SUBMITTED_TITLE};
use crate::reveal::{use_scroll_reveal, RevealConfig, RevealProfile};

/// Field and value of whichever input or textarea fired the event.
fn edited_field(e: &InputEvent) -> Option<(Field, String)> {
    let target: Element = e.target_dyn_into()?;
    let field = Field::from_name(&target.get_attribute("name")?)?;
    let value = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else {
        target.dyn_ref::<HtmlTextAreaElement>()?.value()
    };
    Some((field, value))
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<&'static str>);
    let submitting = use_state(|| false);
    let submitted = use_state(|| false);

    let copy_ref = use_scroll_reveal(
        RevealConfig::new(RevealProfile::FadeLeft)
            .duration(0.8)
            .start("top 80%"),
    );
    let form_ref = use_scroll_reveal(
        RevealConfig::new(RevealProfile::FadeRight)
            .duration(0.8)
            .start("top 80%"),
    );

    let oninput = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            if let Some((field, value)) = edited_field(&e) {
                let mut next = (*form).clone();
                next.set(field, value);
                form.set(next);
                error.set(None);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if let Err(message) = form.validate() {
                log::debug!("Contact form rejected: {}", message);
                error.set(Some(message));
                return;
            }

            submitting.set(true);
            let payload = form.payload();
            let form = form.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                match payload {
                    Ok(body) => log::debug!("Lead captured: {}", body),
                    Err(e) => log::warn!("Failed to serialize lead: {}", e),
                }
                log::info!("Contact request submitted");
                submitted.set(true);
                form.set(ContactForm::default());
                submitting.set(false);
            });
        })
    };

    let close_toast = {
        let submitted = submitted.clone();
        Callback::from(move |_| submitted.set(false))
    };

    html! {
        <section id="contact" class="section-padding bg-secondary">
            <style>
                {r#"
                    .contact-grid { display: grid; gap: 3rem; }
                    @media (min-width: 1024px) { .contact-grid { grid-template-columns: 1fr 1fr; gap: 4rem; } }
                    .trust-note {
                        margin-top: 2rem;
                        padding: 1.5rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .contact-form { padding: 2rem; }
                    .form-field { margin-bottom: 1.25rem; }
                    .form-field label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
                    .form-field input,
                    .form-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border: 1px solid var(--border);
                        background: var(--background);
                        font: inherit;
                    }
                    .form-field textarea { min-height: 8rem; resize: vertical; }
                    .form-error { color: #dc2626; font-size: 0.875rem; margin: 0 0 1rem; }
                    .contact-form .btn-hero { width: 100%; justify-content: center; }
                    .contact-form .btn-hero:disabled { opacity: 0.6; cursor: not-allowed; }
                "#}
            </style>
            <div class="section-container">
                <div class="contact-grid">
                    <div ref={copy_ref}>
                        <p class="text-caption">{"Let's Work Together"}</p>
                        <h2 class="heading-section">{"Ready to Dominate Search?"}</h2>
                        <p class="text-body">
                            {"Tell me about your business and goals. I'll review your current SEO position and share a clear, data-backed plan to grow your organic revenue."}
                        </p>
                        <ul class="icon-list">
                            { for CONTACT_FEATURES.iter().map(|feature| html! {
                                <li><span class="icon">{feature.icon}</span><span>{feature.text}</span></li>
                            }) }
                        </ul>
                        <div class="trust-note">
                            {"Trusted by brands like HostGator, EaseMyTrip and HindustanTimes. Every engagement starts with understanding your business, not selling a package."}
                        </div>
                    </div>

                    <form class="card contact-form" ref={form_ref} onsubmit={onsubmit} novalidate=true>
                        <div class="form-field">
                            <label for="contact-name">{"Your Name *"}</label>
                            <input id="contact-name" name="name" type="text" placeholder="John Smith"
                                value={form.name.clone()} oninput={oninput.clone()} />
                        </div>
                        <div class="form-field">
                            <label for="contact-email">{"Email Address *"}</label>
                            <input id="contact-email" name="email" type="email" placeholder="john@company.com"
                                value={form.email.clone()} oninput={oninput.clone()} />
                        </div>
                        <div class="form-field">
                            <label for="contact-website">{"Website URL"}</label>
                            <input id="contact-website" name="website" type="url" placeholder="https://yourcompany.com"
                                value={form.website.clone()} oninput={oninput.clone()} />
                        </div>
                        <div class="form-field">
                            <label for="contact-goal">{"What's your main SEO goal? *"}</label>
                            <textarea id="contact-goal" name="goal"
                                placeholder="E.g., Increase organic traffic by 200%, rank for competitive keywords..."
                                value={form.goal.clone()} oninput={oninput} />
                        </div>
                        {
                            if let Some(message) = *error {
                                html! { <p class="form-error">{message}</p> }
                            } else {
                                html! {}
                            }
                        }
                        <button type="submit" class="btn-hero" disabled={*submitting}>
                            { if *submitting { "Submitting..." } else { "Get My Free SEO Audit →" } }
                        </button>
                    </form>
                </div>
            </div>
            {
                if *submitted {
                    html! {
                        <Toast
                            title={SUBMITTED_TITLE}
                            message={SUBMITTED_MESSAGE}
                            on_close={close_toast}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
