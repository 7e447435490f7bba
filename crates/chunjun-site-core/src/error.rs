//! Error types for chunjun-site-core

use chunjun_site_types::NavEntryError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading navigation configuration
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported configuration format: {path} (expected .yaml, .yml, .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {message}")]
    YamlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse TOML in {path}: {message}")]
    TomlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    // ===================
    // Validation Errors
    // ===================
    #[error("Invalid navigation entry #{index} in {path}")]
    InvalidEntry {
        path: PathBuf,
        index: usize,
        #[source]
        source: NavEntryError,
    },

    #[error("Invalid navigation list in {path}")]
    InvalidList {
        path: PathBuf,
        #[source]
        source: NavEntryError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_entry_keeps_source() {
        let err = CoreError::InvalidEntry {
            path: PathBuf::from("nav.yaml"),
            index: 2,
            source: NavEntryError::EmptyName,
        };
        assert_eq!(err.to_string(), "Invalid navigation entry #2 in nav.yaml");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("Navigation entry has an empty name".to_string())
        );
    }
}
