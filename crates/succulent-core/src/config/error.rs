//! Error types for rule configuration.

use crate::responders::ResponderError;
use std::path::PathBuf;

/// Rule setup error. Raised while building rules, never while matching requests.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Path or query-parameter pattern that does not compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// JSON parsing or serialisation error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Unknown file type
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),

    /// Config file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid glob pattern for config files
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// A rule declares more than one kind of response body
    #[error("Rule '{path}' declares more than one of content, json and resource")]
    ConflictingResponse { path: String },

    /// Responder could not be set up (e.g. missing resource)
    #[error(transparent)]
    Responder(#[from] ResponderError),
}

impl From<glob::GlobError> for ConfigError {
    fn from(error: glob::GlobError) -> Self {
        ConfigError::Io {
            path: error.path().to_path_buf(),
            source: error.into_error(),
        }
    }
}
