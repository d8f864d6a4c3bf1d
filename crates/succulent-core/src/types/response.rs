//! Mocked response.

use crate::types::content_type::ContentType;
use crate::types::status::ResponseStatus;

/// Response produced for an intercepted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: ResponseStatus,
    pub headers: Vec<(String, String)>,
    pub data: Option<Vec<u8>>,
    pub content_type: Option<ContentType>,
}

impl Response {
    /// Response with a status and nothing else.
    pub fn new(status: ResponseStatus) -> Self {
        Self {
            status,
            headers: Vec::new(),
            data: None,
            content_type: None,
        }
    }

    pub fn with_data(
        status: ResponseStatus,
        data: impl Into<Vec<u8>>,
        content_type: Option<ContentType>,
    ) -> Self {
        Self {
            status,
            headers: Vec::new(),
            data: Some(data.into()),
            content_type,
        }
    }

    pub fn not_found() -> Self {
        Self::new(ResponseStatus::NotFound)
    }

    pub fn internal_server_error() -> Self {
        Self::new(ResponseStatus::InternalServerError)
    }

    /// Value of the first header with this name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
