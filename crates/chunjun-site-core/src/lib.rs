//! chunjun-site-core - Navigation configuration for the ChunJun website
//!
//! Loads the header link list from YAML, JSON or TOML files and exposes the
//! list compiled into the site.

pub mod builtin;
pub mod config;
pub mod error;

pub use builtin::{builtin_nav, BUILTIN_NAV_YAML};
pub use config::{load_nav, parse_nav, ConfigFormat};
pub use error::CoreError;

pub use chunjun_site_types::{Disclosure, LinkKind, NavConfig, NavEntry, NavEntryError, SubLink};
