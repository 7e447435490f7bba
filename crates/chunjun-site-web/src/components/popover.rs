//! Popover anchored to a text trigger

use leptos::prelude::*;

use crate::state::Toggle;

/// Horizontal alignment of the dropdown relative to its trigger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PopoverPlacement {
    #[default]
    Center,
    Start,
}

impl PopoverPlacement {
    fn class(self) -> &'static str {
        match self {
            PopoverPlacement::Center => "popover-center",
            PopoverPlacement::Start => "popover-start",
        }
    }
}

/// Trigger plus dropdown.
///
/// Each trigger click flips `open`; a click anywhere outside the dropdown
/// closes it. The dropdown is only in the DOM while open.
#[component]
pub fn Popover(
    /// Trigger text
    #[prop(into)]
    label: String,
    open: Toggle,
    /// Dropdown width in pixels
    width: u32,
    #[prop(optional)] placement: PopoverPlacement,
    #[prop(optional)] with_arrow: bool,
    /// Classes of the trigger element
    #[prop(optional)]
    trigger_class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="popover">
            <a
                class=trigger_class
                role="button"
                aria-haspopup="true"
                aria-expanded=move || open.aria_expanded()
                on:click=move |_| open.toggle()
            >
                {label}
            </a>
            <Show when=move || open.is_open()>
                <div class="popover-backdrop" on:click=move |_| open.close()></div>
                <div
                    class=format!("popover-dropdown {}", placement.class())
                    style=format!("width: {}px", width)
                >
                    {with_arrow.then(|| view! { <div class="popover-arrow"></div> })}
                    {children()}
                </div>
            </Show>
        </div>
    }
}
