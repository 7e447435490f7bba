//! Leptos UI components

mod app_header;
mod burger;
mod drawer;
mod nav_item;
mod nav_text;
mod popover;

pub use app_header::AppHeader;
pub use burger::Burger;
pub use drawer::AppDrawer;
pub use nav_item::NavItem;
pub use nav_text::{NavText, TextSize};
pub use popover::{Popover, PopoverPlacement};
