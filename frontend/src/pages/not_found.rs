use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        background: #f1f5f9;
                        font-family: system-ui, sans-serif;
                    }
                    .not-found h1 { font-size: 2.25rem; margin: 0; }
                    .not-found p { color: #64748b; font-size: 1.25rem; margin: 0; }
                    .not-found a { color: #0891b2; }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home}>{"Return to Home"}</Link<Route>>
        </div>
    }
}
