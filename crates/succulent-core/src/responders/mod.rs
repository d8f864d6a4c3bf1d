//! Response producers.
//!
//! A [`Responder`] turns a matched request into a response. The router never looks inside
//! one; any type implementing the trait can be bound to a rule:
//! - [`StatusResponder`]: a bare status
//! - [`ContentResponder`]: static bytes with a content type
//! - [`ResourceResponder`]: a file read on every request
//! - [`CallbackResponder`]: a user closure

mod callback;
mod content;
mod resource;
mod status;

pub use callback::CallbackResponder;
pub use content::ContentResponder;
pub use resource::ResourceResponder;
pub use status::StatusResponder;

use crate::types::request::Request;
use crate::types::response::Response;
use std::fmt;
use std::path::PathBuf;

/// Capability to produce a response for a matched request.
///
/// `Ok(None)` means the producer declined; the rule answers `404 Not Found`.
pub trait Responder: Send + Sync + fmt::Debug {
    fn respond(&self, request: &Request) -> Result<Option<Response>, ResponderError>;
}

/// Errors raised while locating or producing a response.
#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    /// Named resource does not exist under the given root
    #[error("Resource '{resource}' not found in {}", .root.display())]
    ResourceNotFound { root: PathBuf, resource: String },

    /// Resource exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by a user callback
    #[error("Callback failed: {0}")]
    Callback(String),
}

impl ResponderError {
    pub fn callback(message: impl Into<String>) -> Self {
        ResponderError::Callback(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_resource_not_found_display() {
        let err = ResponderError::ResourceNotFound {
            root: PathBuf::from("fixtures"),
            resource: "missing.json".to_string(),
        };
        assert_eq!(err.to_string(), "Resource 'missing.json' not found in fixtures");
    }

    #[rstest]
    fn test_io_error_has_source() {
        let err = ResponderError::Io {
            path: PathBuf::from("gone.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("gone.txt"));
        assert!(err.source().is_some());
    }

    #[rstest]
    fn test_callback_error_display() {
        assert_eq!(
            ResponderError::callback("boom").to_string(),
            "Callback failed: boom"
        );
    }
}
