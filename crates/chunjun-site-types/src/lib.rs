//! chunjun-site-types - Shared navigation types for the ChunJun website
//!
//! This crate contains pure data structures without heavy dependencies.
//! No async runtime, no file system - just serde-serializable types.
//!
//! Used by:
//! - chunjun-site-core (configuration loading)
//! - chunjun-site-web (frontend WASM + server)
//! - chunjun-site (CLI)

pub mod disclosure;
pub mod nav;

pub use disclosure::Disclosure;
pub use nav::{
    LinkKind, NavConfig, NavEntry, NavEntryError, RawNavEntry, RawPath, SubLink, EXTERNAL_REL,
    EXTERNAL_TARGET,
};
