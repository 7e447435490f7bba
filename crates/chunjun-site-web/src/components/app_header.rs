//! Site header: brand link, desktop link row, burger and mobile drawer

use chunjun_site_core::builtin_nav;
use chunjun_site_types::NavConfig;
use leptos::prelude::*;
use leptos_router::components::A;

use super::{AppDrawer, Burger, NavItem};
use crate::state::{HeaderState, Surface};

const LOGO_SRC: &str = "/img/logo-light.svg";
const BRAND_NAME: &str = "ChunJun";
const DRAWER_TITLE: &str = "纯钧";

/// Sticky top bar.
///
/// The link list is rendered twice, once per [`Surface`], each with its own
/// popover toggle. Defaults to the list compiled into the site.
#[component]
pub fn AppHeader(
    /// Overrides the built-in link list
    #[prop(optional)]
    links: Option<NavConfig>,
) -> impl IntoView {
    let links = links.unwrap_or_else(|| builtin_nav().clone());
    let state = HeaderState::new();

    let desktop_navigate = Callback::new(move |_: ()| state.after_navigate(Surface::Desktop));
    let mobile_navigate = Callback::new(move |_: ()| state.after_navigate(Surface::Mobile));

    let desktop_items = links
        .iter()
        .cloned()
        .map(|entry| {
            view! {
                <li class="header-item">
                    <NavItem
                        entry
                        surface=Surface::Desktop
                        popover=state.popover(Surface::Desktop)
                        on_navigate=desktop_navigate
                    />
                </li>
            }
        })
        .collect_view();

    let mobile_items = links
        .iter()
        .cloned()
        .map(|entry| {
            view! {
                <NavItem
                    entry
                    surface=Surface::Mobile
                    popover=state.popover(Surface::Mobile)
                    on_navigate=mobile_navigate
                />
            }
        })
        .collect_view();

    view! {
        <header class="app-header">
            <A
                href="/"
                attr:class="brand"
                on:click=move |_| state.after_navigate(Surface::Desktop)
            >
                <img src=LOGO_SRC alt="" class="brand-logo" />
                {BRAND_NAME}
            </A>

            <nav aria-label="Main">
                <ul class="header-links">{desktop_items}</ul>
            </nav>

            <div class="header-burger">
                <Burger open=state.drawer />
            </div>

            <AppDrawer
                open=state.drawer
                title=|| {
                    view! {
                        <div class="drawer-brand">
                            <img src=LOGO_SRC class="drawer-logo" alt="logo" />
                            {DRAWER_TITLE}
                        </div>
                    }
                }
            >
                <nav aria-label="Mobile" class="drawer-links">
                    {mobile_items}
                </nav>
            </AppDrawer>
        </header>
    }
}
