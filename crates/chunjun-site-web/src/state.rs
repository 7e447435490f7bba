//! Toggle state owned by the header

use chunjun_site_types::Disclosure;
use leptos::prelude::*;

/// Where a navigation entry is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Horizontal row in the header bar
    Desktop,
    /// Vertical list inside the drawer
    Mobile,
}

impl Surface {
    /// Class of top-level links on this surface
    pub fn link_class(self) -> &'static str {
        match self {
            Surface::Desktop => "header-link",
            Surface::Mobile => "drawer-link",
        }
    }

    /// Class of the sub-link list inside a popover
    pub fn group_class(self) -> &'static str {
        match self {
            Surface::Desktop => "popover-links",
            Surface::Mobile => "popover-links popover-links-mobile",
        }
    }

    /// Class applied to each sub-link's text
    pub fn sub_link_class(self) -> &'static str {
        match self {
            Surface::Desktop => "text-sub-desktop",
            Surface::Mobile => "text-sub-mobile",
        }
    }

    /// Popover dropdown width in pixels
    pub fn popover_width(self) -> u32 {
        match self {
            Surface::Desktop => 88,
            Surface::Mobile => 150,
        }
    }
}

/// Reactive open/closed flag behind the burger, the drawer and the popovers.
///
/// Every click handler goes through [`Toggle::toggle`] or [`Toggle::close`].
#[derive(Debug, Clone, Copy)]
pub struct Toggle(RwSignal<Disclosure>);

impl Toggle {
    /// New toggle, closed
    pub fn new() -> Self {
        Self(RwSignal::new(Disclosure::Closed))
    }

    /// One trigger click
    pub fn toggle(&self) {
        self.0.update(|d| *d = d.toggled());
    }

    pub fn close(&self) {
        self.0.set(Disclosure::Closed);
    }

    /// Tracked read, for use inside views
    pub fn is_open(&self) -> bool {
        self.0.get().is_open()
    }

    /// Untracked read, for event handlers
    pub fn is_open_untracked(&self) -> bool {
        self.0.get_untracked().is_open()
    }

    /// Tracked `aria-expanded` value
    pub fn aria_expanded(&self) -> &'static str {
        self.0.get().aria_expanded()
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

/// Drawer and popover toggles of one header instance.
///
/// Created on mount (all closed) and dropped with the component; the three
/// toggles never influence each other except through [`HeaderState::after_navigate`].
#[derive(Debug, Clone, Copy)]
pub struct HeaderState {
    pub drawer: Toggle,
    pub desktop_popover: Toggle,
    pub mobile_popover: Toggle,
}

impl HeaderState {
    pub fn new() -> Self {
        Self {
            drawer: Toggle::new(),
            desktop_popover: Toggle::new(),
            mobile_popover: Toggle::new(),
        }
    }

    /// Popover toggle of the given surface
    pub fn popover(&self, surface: Surface) -> Toggle {
        match surface {
            Surface::Desktop => self.desktop_popover,
            Surface::Mobile => self.mobile_popover,
        }
    }

    /// Following an internal link closes the popover of that surface, and the
    /// drawer when the link was inside it
    pub fn after_navigate(&self, surface: Surface) {
        self.popover(surface).close();
        if surface == Surface::Mobile {
            self.drawer.close();
        }
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}
