//! Navigation entries rendered by the site header
//!
//! Configuration files describe an entry as `{ name, path, url }` where `path`
//! is either a route, a list of sub-links, or absent. [`NavEntry`] turns that
//! shape into an explicit variant once, at deserialization time.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// `target` attribute carried by external links (new browsing context)
pub const EXTERNAL_TARGET: &str = "_blank";

/// `rel` attribute carried by external links
pub const EXTERNAL_REL: &str = "noreferrer";

/// Validation errors for navigation entries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavEntryError {
    #[error("Navigation entry has an empty name")]
    EmptyName,

    #[error("Navigation entry '{name}' has neither a path nor a url")]
    MissingTarget { name: String },

    #[error("Navigation entry '{name}' has both a path and a url")]
    AmbiguousTarget { name: String },

    #[error("Route '{route}' in '{name}' must start with '/'")]
    InvalidRoute { name: String, route: String },

    #[error("Navigation group '{name}' has no links")]
    EmptyGroup { name: String },

    #[error("External entry '{name}' has an empty url")]
    EmptyUrl { name: String },

    #[error("Duplicate navigation entry name: {name}")]
    DuplicateName { name: String },
}

/// Link inside a navigation group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubLink {
    /// Display text
    pub name: String,
    /// Internal route
    pub link: String,
}

impl SubLink {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// How an entry is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Router link to a single route
    Internal,
    /// Popover trigger listing sub-links
    Group,
    /// Plain anchor opening in a new browsing context
    External,
}

/// Single header entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNavEntry", into = "RawNavEntry")]
pub enum NavEntry {
    Internal { name: String, path: String },
    Group { name: String, links: Vec<SubLink> },
    External { name: String, url: String },
}

impl NavEntry {
    pub fn internal(name: impl Into<String>, path: impl Into<String>) -> Self {
        NavEntry::Internal {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn group(name: impl Into<String>, links: Vec<SubLink>) -> Self {
        NavEntry::Group {
            name: name.into(),
            links,
        }
    }

    pub fn external(name: impl Into<String>, url: impl Into<String>) -> Self {
        NavEntry::External {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Display text
    pub fn name(&self) -> &str {
        match self {
            NavEntry::Internal { name, .. }
            | NavEntry::Group { name, .. }
            | NavEntry::External { name, .. } => name,
        }
    }

    pub fn kind(&self) -> LinkKind {
        match self {
            NavEntry::Internal { .. } => LinkKind::Internal,
            NavEntry::Group { .. } => LinkKind::Group,
            NavEntry::External { .. } => LinkKind::External,
        }
    }

    /// Target route of an internal entry
    pub fn route(&self) -> Option<&str> {
        match self {
            NavEntry::Internal { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Sub-links of a group (empty for other kinds)
    pub fn sub_links(&self) -> &[SubLink] {
        match self {
            NavEntry::Group { links, .. } => links,
            _ => &[],
        }
    }

    /// Address of an external entry
    pub fn url(&self) -> Option<&str> {
        match self {
            NavEntry::External { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Check the invariants the header relies on
    pub fn validate(&self) -> Result<(), NavEntryError> {
        let name = self.name();
        if name.trim().is_empty() {
            return Err(NavEntryError::EmptyName);
        }

        match self {
            NavEntry::Internal { path, .. } => check_route(name, path),
            NavEntry::Group { links, .. } => {
                if links.is_empty() {
                    return Err(NavEntryError::EmptyGroup {
                        name: name.to_string(),
                    });
                }
                for sub in links {
                    if sub.name.trim().is_empty() {
                        return Err(NavEntryError::EmptyName);
                    }
                    check_route(&sub.name, &sub.link)?;
                }
                Ok(())
            }
            NavEntry::External { url, .. } => {
                if url.trim().is_empty() {
                    Err(NavEntryError::EmptyUrl {
                        name: name.to_string(),
                    })
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn check_route(name: &str, route: &str) -> Result<(), NavEntryError> {
    if route.starts_with('/') {
        Ok(())
    } else {
        Err(NavEntryError::InvalidRoute {
            name: name.to_string(),
            route: route.to_string(),
        })
    }
}

/// Wire shape of a navigation entry, as written in configuration files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNavEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<RawPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// `path` field: a single route or a list of sub-links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPath {
    Route(String),
    Group(Vec<SubLink>),
}

impl TryFrom<RawNavEntry> for NavEntry {
    type Error = NavEntryError;

    fn try_from(raw: RawNavEntry) -> Result<Self, Self::Error> {
        let entry = match (raw.path, raw.url) {
            (Some(_), Some(_)) => {
                return Err(NavEntryError::AmbiguousTarget { name: raw.name });
            }
            (Some(RawPath::Route(path)), None) => NavEntry::Internal {
                name: raw.name,
                path,
            },
            (Some(RawPath::Group(links)), None) => NavEntry::Group {
                name: raw.name,
                links,
            },
            (None, Some(url)) => NavEntry::External {
                name: raw.name,
                url,
            },
            (None, None) => {
                if raw.name.trim().is_empty() {
                    return Err(NavEntryError::EmptyName);
                }
                return Err(NavEntryError::MissingTarget { name: raw.name });
            }
        };

        entry.validate()?;
        Ok(entry)
    }
}

impl From<NavEntry> for RawNavEntry {
    fn from(entry: NavEntry) -> Self {
        match entry {
            NavEntry::Internal { name, path } => RawNavEntry {
                name,
                path: Some(RawPath::Route(path)),
                url: None,
            },
            NavEntry::Group { name, links } => RawNavEntry {
                name,
                path: Some(RawPath::Group(links)),
                url: None,
            },
            NavEntry::External { name, url } => RawNavEntry {
                name,
                path: None,
                url: Some(url),
            },
        }
    }
}

/// Ordered, validated list of header entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NavEntry>", into = "Vec<NavEntry>")]
pub struct NavConfig {
    entries: Vec<NavEntry>,
}

impl NavConfig {
    /// Validate every entry and reject duplicate names (names key the rendered items)
    pub fn new(entries: Vec<NavEntry>) -> Result<Self, NavEntryError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.name()) {
                return Err(NavEntryError::DuplicateName {
                    name: entry.name().to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by display name
    pub fn get(&self, name: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Every internal route reachable from the header, in display order
    pub fn routes(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|entry| match entry {
                NavEntry::Internal { path, .. } => vec![path.as_str()],
                NavEntry::Group { links, .. } => links.iter().map(|l| l.link.as_str()).collect(),
                NavEntry::External { .. } => Vec::new(),
            })
            .collect()
    }

    /// Display text of the link pointing at `route` (trailing slashes ignored)
    pub fn label_for(&self, route: &str) -> Option<&str> {
        let wanted = normalize_route(route);
        self.entries.iter().find_map(|entry| match entry {
            NavEntry::Internal { name, path } if normalize_route(path) == wanted => {
                Some(name.as_str())
            }
            NavEntry::Group { links, .. } => links
                .iter()
                .find(|l| normalize_route(&l.link) == wanted)
                .map(|l| l.name.as_str()),
            _ => None,
        })
    }
}

fn normalize_route(route: &str) -> &str {
    match route.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

impl TryFrom<Vec<NavEntry>> for NavConfig {
    type Error = NavEntryError;

    fn try_from(entries: Vec<NavEntry>) -> Result<Self, Self::Error> {
        NavConfig::new(entries)
    }
}

impl From<NavConfig> for Vec<NavEntry> {
    fn from(config: NavConfig) -> Self {
        config.entries
    }
}

impl<'a> IntoIterator for &'a NavConfig {
    type Item = &'a NavEntry;
    type IntoIter = std::slice::Iter<'a, NavEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_route_is_internal() {
        let entry: NavEntry = serde_json::from_str(r#"{"name":"Docs","path":"/docs"}"#).unwrap();
        assert_eq!(entry.kind(), LinkKind::Internal);
        assert_eq!(entry.route(), Some("/docs"));
        assert_eq!(entry.name(), "Docs");
    }

    #[test]
    fn test_path_list_is_group() {
        let entry: NavEntry = serde_json::from_str(
            r#"{"name":"More","path":[{"name":"Blog","link":"/blog"}]}"#,
        )
        .unwrap();
        assert_eq!(entry.kind(), LinkKind::Group);
        assert_eq!(entry.sub_links(), &[SubLink::new("Blog", "/blog")]);
        assert_eq!(entry.route(), None);
    }

    #[test]
    fn test_url_without_path_is_external() {
        let entry: NavEntry =
            serde_json::from_str(r#"{"name":"GitHub","url":"https://github.com/DTStack/chunjun"}"#)
                .unwrap();
        assert_eq!(entry.kind(), LinkKind::External);
        assert_eq!(entry.url(), Some("https://github.com/DTStack/chunjun"));
    }

    #[test]
    fn test_null_path_with_url_is_external() {
        let entry: NavEntry =
            serde_json::from_str(r#"{"name":"GitHub","path":null,"url":"https://github.com"}"#)
                .unwrap();
        assert_eq!(entry.kind(), LinkKind::External);
    }

    #[test]
    fn test_missing_target_rejected() {
        let err = serde_json::from_str::<NavEntry>(r#"{"name":"Nowhere"}"#).unwrap_err();
        assert!(err.to_string().contains("neither a path nor a url"));
    }

    #[test]
    fn test_ambiguous_target_rejected() {
        let raw = RawNavEntry {
            name: "Both".to_string(),
            path: Some(RawPath::Route("/both".to_string())),
            url: Some("https://example.com".to_string()),
        };
        assert_eq!(
            NavEntry::try_from(raw),
            Err(NavEntryError::AmbiguousTarget {
                name: "Both".to_string()
            })
        );
    }

    #[test]
    fn test_relative_route_rejected() {
        assert_eq!(
            NavEntry::internal("Docs", "docs").validate(),
            Err(NavEntryError::InvalidRoute {
                name: "Docs".to_string(),
                route: "docs".to_string()
            })
        );
        let group = NavEntry::group("More", vec![SubLink::new("Blog", "blog")]);
        assert!(matches!(
            group.validate(),
            Err(NavEntryError::InvalidRoute { .. })
        ));
    }

    #[test]
    fn test_empty_group_and_url_rejected() {
        assert_eq!(
            NavEntry::group("More", Vec::new()).validate(),
            Err(NavEntryError::EmptyGroup {
                name: "More".to_string()
            })
        );
        assert_eq!(
            NavEntry::external("GitHub", " ").validate(),
            Err(NavEntryError::EmptyUrl {
                name: "GitHub".to_string()
            })
        );
        assert_eq!(
            NavEntry::internal("", "/").validate(),
            Err(NavEntryError::EmptyName)
        );
    }

    #[test]
    fn test_serialize_keeps_config_shape() {
        let json = serde_json::to_value(NavEntry::external("GitHub", "https://github.com")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "GitHub", "url": "https://github.com"})
        );

        let json = serde_json::to_value(NavEntry::group(
            "More",
            vec![SubLink::new("Blog", "/blog")],
        ))
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "More", "path": [{"name": "Blog", "link": "/blog"}]})
        );
    }

    #[test]
    fn test_config_preserves_order() {
        let config: NavConfig = serde_json::from_str(
            r#"[
                {"name":"Docs","path":"/docs"},
                {"name":"More","path":[{"name":"Blog","link":"/blog"}]},
                {"name":"GitHub","url":"https://github.com"}
            ]"#,
        )
        .unwrap();

        let names: Vec<&str> = config.iter().map(NavEntry::name).collect();
        assert_eq!(names, vec!["Docs", "More", "GitHub"]);
        assert_eq!(config.routes(), vec!["/docs", "/blog"]);
        assert_eq!(config.get("GitHub").map(NavEntry::kind), Some(LinkKind::External));
    }

    #[test]
    fn test_label_for_route() {
        let config = NavConfig::new(vec![
            NavEntry::internal("Home", "/"),
            NavEntry::internal("Docs", "/docs"),
            NavEntry::group("More", vec![SubLink::new("Blog", "/blog")]),
            NavEntry::external("GitHub", "https://github.com"),
        ])
        .unwrap();

        assert_eq!(config.label_for("/docs/"), Some("Docs"));
        assert_eq!(config.label_for("/blog"), Some("Blog"));
        assert_eq!(config.label_for("/"), Some("Home"));
        assert_eq!(config.label_for("/missing"), None);
    }

    #[test]
    fn test_config_rejects_duplicate_names() {
        let result = NavConfig::new(vec![
            NavEntry::internal("Docs", "/docs"),
            NavEntry::internal("Docs", "/docs/v2"),
        ]);
        assert_eq!(
            result,
            Err(NavEntryError::DuplicateName {
                name: "Docs".to_string()
            })
        );
    }

    #[test]
    fn test_external_attributes() {
        assert_eq!(EXTERNAL_TARGET, "_blank");
        assert_eq!(EXTERNAL_REL, "noreferrer");
    }
}
