//! Burger control toggling the mobile drawer

use leptos::prelude::*;

use crate::state::Toggle;

/// Three-line toggle button
#[component]
pub fn Burger(
    open: Toggle,
    /// Accessible label
    #[prop(default = "Toggle navigation")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <button
            class="burger"
            class:burger-open=move || open.is_open()
            on:click=move |_| open.toggle()
            aria-label=label
            aria-expanded=move || open.aria_expanded()
        >
            <span class="burger-line"></span>
            <span class="burger-line"></span>
            <span class="burger-line"></span>
        </button>
    }
}
