//! Error types for pgc-core

use thiserror::Error;

/// Core error type for pgcopy
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Explicitly requested config file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// E003: Empty name where a table or trigger name is required
    #[error("[E003] Empty name: {context}")]
    EmptyName { context: String },

    /// E004: IO error with file path context
    #[error("[E004] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
