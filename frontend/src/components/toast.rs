use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub title: AttrValue,
    pub message: AttrValue,
    pub on_close: Callback<()>,
}

/// Bottom-corner notice that closes itself after `TOAST_DURATION_MS`.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || on_close.emit(()));
                // Dropping the timeout cancels it if the toast goes away first.
                move || drop(timeout)
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="toast" role="status">
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 6rem;
                        z-index: 60;
                        max-width: 22rem;
                        padding: 1rem 2.5rem 1rem 1.25rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        border-left: 4px solid var(--primary);
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast-title { font-weight: 600; margin: 0 0 0.25rem; }
                    .toast-message { font-size: 0.875rem; color: var(--muted); margin: 0; }
                    .toast-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.5rem;
                        border: none;
                        background: none;
                        cursor: pointer;
                        color: var(--muted);
                    }
                    @keyframes toastIn {
                        from { transform: translateY(1rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <p class="toast-title">{props.title.clone()}</p>
            <p class="toast-message">{props.message.clone()}</p>
            <button class="toast-close" aria-label="Dismiss" onclick={close}>{"×"}</button>
        </div>
    }
}
