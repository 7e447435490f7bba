//! Text wrapper for popover sub-links

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextSize {
    #[default]
    Md,
    Lg,
}

impl TextSize {
    fn class(self) -> &'static str {
        match self {
            TextSize::Md => "text-md",
            TextSize::Lg => "text-lg",
        }
    }
}

#[component]
pub fn NavText(
    #[prop(optional)] size: TextSize,
    /// Extra classes
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("text {} {}", size.class(), class)>
            {children()}
        </div>
    }
}
