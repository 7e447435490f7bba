//! Page for any route reachable from the header

use chunjun_site_core::builtin_nav;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::NotFound;

/// Titled after the header link pointing at the current route; routes the
/// header does not link to fall through to [`NotFound`].
#[component]
pub fn RoutePage() -> impl IntoView {
    let location = use_location();

    move || {
        let pathname = location.pathname.get();
        match builtin_nav().label_for(&pathname) {
            Some(title) => view! {
                <section class="page">
                    <h1>{title}</h1>
                    <p class="hint">
                        "Content for this section is published from the documentation repository."
                    </p>
                </section>
            }
            .into_any(),
            None => view! { <NotFound /> }.into_any(),
        }
    }
}
