use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod contact;
mod content;
mod reveal;
mod components {
    pub mod about;
    pub mod case_studies;
    pub mod contact;
    pub mod footer;
    pub mod framework;
    pub mod hero;
    pub mod insights;
    pub mod proof;
    pub mod services;
    pub mod toast;
    pub mod whatsapp_button;
}
mod pages {
    pub mod index;
    pub mod not_found;
}

use components::whatsapp_button::WhatsAppButton;
use content::NAV_LINKS;
use pages::{index::Index, not_found::NotFound};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! {
                <>
                    <Nav />
                    <Index />
                    <WhatsAppButton />
                </>
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_y > config::HEADER_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not listen for scroll events");
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // No prevent_default here, the anchor still has to jump to its section.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        transition: background 0.3s, box-shadow 0.3s;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 1px 0 var(--border);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                        color: var(--foreground);
                        font-weight: 700;
                    }
                    .nav-logo .icon-tile { width: 2.5rem; height: 2.5rem; margin: 0; font-size: 1rem; }
                    .nav-logo small { display: block; font-weight: 400; font-size: 0.75rem; color: var(--muted); }
                    .nav-right { display: flex; align-items: center; gap: 2rem; }
                    .nav-link { color: var(--muted); text-decoration: none; font-size: 0.875rem; font-weight: 500; }
                    .nav-link:hover { color: var(--primary); }
                    .nav-cta { padding: 0.625rem 1.25rem; font-size: 0.875rem; }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span { width: 22px; height: 2px; background: var(--foreground); }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            align-items: stretch;
                            gap: 0;
                            padding: 1rem 1.5rem;
                            background: var(--background);
                            border-bottom: 1px solid var(--border);
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                        .nav-right .nav-link { padding: 0.75rem 0; }
                        .nav-right .nav-cta { margin-top: 0.5rem; justify-content: center; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="icon-tile gradient-bg">{config::BRAND_INITIALS}</span>
                    <span>
                        {config::BRAND_NAME}
                        <small>{config::BRAND_TITLE}</small>
                    </span>
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a class="nav-link" href={link.href} onclick={close_menu.clone()}>{link.label}</a>
                    }) }
                    <a
                        class="btn-hero nav-cta"
                        href={config::whatsapp_url(config::WHATSAPP_CONSULT, None)}
                        target="_blank"
                        rel="noopener noreferrer"
                        onclick={close_menu.clone()}
                    >
                        {"Free SEO Audit"}
                    </a>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    reveal::install();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
