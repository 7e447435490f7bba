//! Server-rendered markup of the header and its popovers

use chunjun_site_types::{NavConfig, NavEntry, SubLink};
use chunjun_site_web::components::{AppHeader, NavItem, Popover};
use chunjun_site_web::state::{Surface, Toggle};
use hydration_context::SsrSharedContext;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use leptos_router::components::Router;
use leptos_router::location::RequestUrl;
use std::sync::Arc;

fn with_ssr_owner<T>(test: impl FnOnce() -> T) -> T {
    let owner = Owner::new_root(Some(Arc::new(SsrSharedContext::new())));
    owner.with(|| {
        provide_context(RequestUrl::new("/"));
        test()
    })
}

fn render_header(cfg: NavConfig) -> String {
    with_ssr_owner(|| {
        view! {
            <Router>
                <AppHeader links=cfg />
            </Router>
        }
        .to_html()
    })
}

fn more_group() -> NavEntry {
    NavEntry::group("More", vec![SubLink::new("Blog", "/blog")])
}

#[test]
fn test_internal_link_on_both_surfaces() {
    let cfg = NavConfig::new(vec![NavEntry::internal("Docs", "/docs")]).unwrap();
    let html = render_header(cfg);

    assert_eq!(html.matches(r#"href="/docs""#).count(), 2);
    assert_eq!(html.matches("Docs").count(), 2);
    assert!(html.contains("header-link"));
    assert!(html.contains("drawer-link"));
}

#[test]
fn test_external_link_opens_new_context_without_referrer() {
    let cfg = NavConfig::new(vec![NavEntry::external(
        "GitHub",
        "https://github.com/DTStack/chunjun",
    )])
    .unwrap();
    let html = render_header(cfg);

    assert_eq!(
        html.matches(r#"href="https://github.com/DTStack/chunjun""#).count(),
        2
    );
    assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
    assert_eq!(html.matches(r#"rel="noreferrer""#).count(), 2);
}

#[test]
fn test_group_sub_links_hidden_initially() {
    let cfg = NavConfig::new(vec![more_group()]).unwrap();
    let html = render_header(cfg);

    assert_eq!(html.matches("More").count(), 2);
    assert!(!html.contains("/blog"));
    assert!(!html.contains("Blog"));
}

#[test]
fn test_drawer_starts_closed() {
    let cfg = NavConfig::new(vec![NavEntry::internal("Docs", "/docs")]).unwrap();
    let html = render_header(cfg);

    assert!(html.contains(r#"aria-hidden="true""#));
    assert!(!html.contains("drawer-overlay"));
    assert!(!html.contains("drawer-open"));
}

#[test]
fn test_group_trigger_clicks_show_then_hide_sub_links() {
    with_ssr_owner(|| {
        let popover = Toggle::new();
        let render = || {
            view! {
                <Router>
                    <NavItem entry=more_group() surface=Surface::Desktop popover />
                </Router>
            }
            .to_html()
        };

        let html = render();
        assert!(html.contains("More"));
        assert!(!html.contains(r#"href="/blog""#));

        popover.toggle();
        let html = render();
        assert!(html.contains(r#"href="/blog""#));
        assert!(html.contains("Blog"));

        popover.toggle();
        assert!(!render().contains(r#"href="/blog""#));
    });
}

#[test]
fn test_popover_backdrop_and_width() {
    with_ssr_owner(|| {
        let open = Toggle::new();
        let render = || {
            view! {
                <Popover label="More" open width=Surface::Mobile.popover_width() with_arrow=true>
                    <span>"Blog"</span>
                </Popover>
            }
            .to_html()
        };

        assert!(!render().contains("popover-backdrop"));

        open.toggle();
        let html = render();
        assert!(html.contains("popover-backdrop"));
        assert!(html.contains("popover-arrow"));
        assert!(html.contains("width: 150px"));
        assert!(html.contains(r#"aria-expanded="true""#));

        open.close();
        assert!(!render().contains("popover-backdrop"));
    });
}
