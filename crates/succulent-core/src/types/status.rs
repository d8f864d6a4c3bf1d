//! Response status codes.

use std::fmt;

/// Status of a mocked response.
///
/// Equality is structural on `(code, message)`, so `Other { code: 404, message: "Not Found" }`
/// equals [`ResponseStatus::NotFound`].
#[derive(Debug, Clone, Eq)]
pub enum ResponseStatus {
    Ok,
    NotModified,
    NotFound,
    InternalServerError,
    Other { code: u16, message: String },
}

impl ResponseStatus {
    /// Numeric HTTP status code.
    pub fn code(&self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::NotModified => 304,
            ResponseStatus::NotFound => 404,
            ResponseStatus::InternalServerError => 500,
            ResponseStatus::Other { code, .. } => *code,
        }
    }

    /// Reason phrase.
    pub fn message(&self) -> &str {
        match self {
            ResponseStatus::Ok => "OK",
            ResponseStatus::NotModified => "Not Modified",
            ResponseStatus::NotFound => "Not Found",
            ResponseStatus::InternalServerError => "Internal Server Error",
            ResponseStatus::Other { message, .. } => message,
        }
    }

    /// Map a bare code to a status, using the named variant when one exists.
    /// Unknown codes get an empty reason phrase.
    pub fn from_code(code: u16) -> Self {
        match code {
            200 => ResponseStatus::Ok,
            304 => ResponseStatus::NotModified,
            404 => ResponseStatus::NotFound,
            500 => ResponseStatus::InternalServerError,
            code => ResponseStatus::Other {
                code,
                message: String::new(),
            },
        }
    }

    pub fn other(code: u16, message: impl Into<String>) -> Self {
        ResponseStatus::Other {
            code,
            message: message.into(),
        }
    }
}

impl PartialEq for ResponseStatus {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code() && self.message() == other.message()
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.message())
    }
}
