//! One navigation entry, rendered according to its kind

use chunjun_site_types::{NavEntry, EXTERNAL_REL, EXTERNAL_TARGET};
use leptos::prelude::*;
use leptos_router::components::A;

use super::{NavText, Popover, PopoverPlacement, TextSize};
use crate::state::{Surface, Toggle};

/// Internal route → router link, group → popover of router links,
/// external url → anchor opening in a new tab without a referrer.
#[component]
pub fn NavItem(
    entry: NavEntry,
    surface: Surface,
    /// Popover toggle shared by every group on this surface
    popover: Toggle,
    /// Runs after an internal link is followed
    #[prop(optional, into)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let link_class = surface.link_class();
    let navigate = move |_| {
        if let Some(callback) = on_navigate {
            callback.run(());
        }
    };

    match entry {
        NavEntry::Internal { name, path } => view! {
            <A href=path attr:class=link_class on:click=navigate>
                {name}
            </A>
        }
        .into_any(),
        NavEntry::Group { name, links } => {
            let (placement, with_arrow, text_size) = match surface {
                Surface::Desktop => (PopoverPlacement::Center, false, TextSize::Md),
                Surface::Mobile => (PopoverPlacement::Start, true, TextSize::Lg),
            };

            view! {
                <Popover
                    label=name
                    open=popover
                    width=surface.popover_width()
                    placement=placement
                    with_arrow=with_arrow
                    trigger_class=link_class
                >
                    <div class=surface.group_class()>
                        {links
                            .iter()
                            .map(|sub| {
                                let (sub_name, sub_link) = (sub.name.clone(), sub.link.clone());
                                view! {
                                    <NavText size=text_size class=surface.sub_link_class()>
                                        <A href=sub_link on:click=navigate>
                                            {sub_name}
                                        </A>
                                    </NavText>
                                }
                            })
                            .collect_view()}
                    </div>
                </Popover>
            }
            .into_any()
        }
        NavEntry::External { name, url } => view! {
            <a class=link_class href=url target=EXTERNAL_TARGET rel=EXTERNAL_REL>
                {name}
            </a>
        }
        .into_any(),
    }
}
