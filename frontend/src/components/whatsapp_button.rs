use yew::prelude::*;

use crate::config;

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let href = config::whatsapp_url(config::WHATSAPP_PRIMARY, Some(config::WHATSAPP_MESSAGE));

    html! {
        <a class="whatsapp-float" href={href} target="_blank" rel="noopener noreferrer" aria-label="Chat on WhatsApp">
            <style>
                {r#"
                    .whatsapp-float {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 50;
                        width: 3.5rem;
                        height: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 9999px;
                        background: #25d366;
                        color: #fff;
                        font-size: 1.5rem;
                        text-decoration: none;
                        box-shadow: 0 10px 25px rgba(37, 211, 102, 0.4);
                        transition: transform 0.2s;
                    }
                    .whatsapp-float:hover { transform: scale(1.1); }
                    .whatsapp-tooltip {
                        position: absolute;
                        right: 4.25rem;
                        white-space: nowrap;
                        padding: 0.5rem 0.75rem;
                        background: var(--foreground);
                        color: var(--background);
                        font-size: 0.875rem;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.2s;
                    }
                    .whatsapp-float:hover .whatsapp-tooltip { opacity: 1; }
                "#}
            </style>
            <span aria-hidden="true">{"✆"}</span>
            <span class="whatsapp-tooltip">{"Chat with Harsh"}</span>
        </a>
    }
}
