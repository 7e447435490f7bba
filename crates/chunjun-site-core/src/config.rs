//! Navigation configuration loading
//!
//! YAML and JSON files hold a top-level list of entries; TOML files use a
//! `[[links]]` array of tables since TOML has no top-level arrays.

use crate::error::CoreError;
use chunjun_site_types::{NavConfig, NavEntry, RawNavEntry};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(CoreError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
        }
    }
}

#[derive(Deserialize)]
struct TomlNavFile {
    #[serde(default)]
    links: Vec<RawNavEntry>,
}

/// Load and validate a navigation file
pub fn load_nav(path: &Path) -> Result<NavConfig, CoreError> {
    let format = ConfigFormat::from_path(path)?;

    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CoreError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CoreError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let config = parse_from(&content, format, path)?;
    info!(
        path = %path.display(),
        format = format.as_str(),
        links = config.len(),
        "Loaded navigation config"
    );
    Ok(config)
}

/// Parse and validate navigation entries from a string
pub fn parse_nav(content: &str, format: ConfigFormat) -> Result<NavConfig, CoreError> {
    parse_from(content, format, Path::new("<inline>"))
}

pub(crate) fn parse_from(
    content: &str,
    format: ConfigFormat,
    origin: &Path,
) -> Result<NavConfig, CoreError> {
    let raw: Vec<RawNavEntry> = match format {
        ConfigFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|source| CoreError::YamlParse {
                path: origin.to_path_buf(),
                message: source.to_string(),
                source,
            })?
        }
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|source| CoreError::JsonParse {
                path: origin.to_path_buf(),
                message: source.to_string(),
                source,
            })?
        }
        ConfigFormat::Toml => {
            toml::from_str::<TomlNavFile>(content)
                .map_err(|source| CoreError::TomlParse {
                    path: origin.to_path_buf(),
                    message: source.message().to_string(),
                    source,
                })?
                .links
        }
    };

    debug!(origin = %origin.display(), entries = raw.len(), "Parsed raw navigation entries");

    // Entry numbers are 1-based in error messages
    let entries = raw
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            NavEntry::try_from(entry).map_err(|source| CoreError::InvalidEntry {
                path: origin.to_path_buf(),
                index: i + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    NavConfig::new(entries).map_err(|source| CoreError::InvalidList {
        path: origin.to_path_buf(),
        source,
    })
}
