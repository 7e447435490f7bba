//! Off-canvas drawer used for mobile navigation

use leptos::ev;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::state::Toggle;

fn set_body_overflow(value: &str) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(err) = body.style().set_property("overflow", value) {
        warn!("failed to set body overflow to {value:?}: {err:?}");
    }
}

/// Slide-out panel with a dismissible overlay.
///
/// Closes on the close button, on an overlay click, and on Escape. Page
/// scrolling is locked while the drawer is open and released when it closes
/// or unmounts.
#[component]
pub fn AppDrawer(
    open: Toggle,
    /// Content of the drawer header
    #[prop(into)]
    title: ViewFn,
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.is_open_untracked() {
            open.close();
        }
    });
    on_cleanup(move || escape.remove());

    Effect::new(move |_| {
        if open.is_open() {
            set_body_overflow("hidden");
            on_cleanup(|| set_body_overflow(""));
        } else {
            set_body_overflow("");
        }
    });

    view! {
        <>
            <Show when=move || open.is_open()>
                <div class="drawer-overlay" on:click=move |_| open.close()></div>
            </Show>

            <aside
                class="drawer drawer-xl drawer-padding-xl"
                class:drawer-open=move || open.is_open()
                role="dialog"
                aria-modal="true"
                aria-hidden=move || (!open.is_open()).to_string()
            >
                <div class="drawer-header">
                    <div class="drawer-title">{title.run()}</div>
                    <button
                        class="drawer-close"
                        on:click=move |_| open.close()
                        aria-label="Close navigation"
                    >
                        "✕"
                    </button>
                </div>
                <div class="drawer-body">{children()}</div>
            </aside>
        </>
    }
}
