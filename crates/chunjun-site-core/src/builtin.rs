//! Navigation list compiled into the site

use crate::config::{parse_from, ConfigFormat};
use chunjun_site_types::NavConfig;
use once_cell::sync::Lazy;
use std::path::Path;
use tracing::error;

/// Contents of `nav.yaml`, embedded at compile time
pub const BUILTIN_NAV_YAML: &str = include_str!("../nav.yaml");

static BUILTIN_NAV: Lazy<NavConfig> = Lazy::new(|| {
    parse_from(BUILTIN_NAV_YAML, ConfigFormat::Yaml, Path::new("nav.yaml")).unwrap_or_else(|e| {
        // The header still renders (brand + burger) with an empty list
        error!(error = %e, "Built-in navigation is invalid");
        NavConfig::default()
    })
});

/// The header link list, parsed once on first use
pub fn builtin_nav() -> &'static NavConfig {
    &BUILTIN_NAV
}
