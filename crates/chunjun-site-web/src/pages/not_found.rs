//! Fallback for unknown routes

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page">
            <h1>"Page not found"</h1>
            <p class="hint">"The page you are looking for does not exist."</p>
            <A href="/" attr:class="btn btn-primary">"Back to Home"</A>
        </section>
    }
}
