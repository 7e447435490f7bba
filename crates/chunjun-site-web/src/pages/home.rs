//! Landing page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"ChunJun"</h1>
            <p>
                "A distributed data integration framework built on Flink. "
                "Synchronise and compute data across heterogeneous sources in batch and streaming mode."
            </p>
            <A href="/documents" attr:class="btn btn-primary">"Get Started"</A>
        </section>
    }
}
