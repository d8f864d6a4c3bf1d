//! Response content types.

use std::path::Path;

/// Content type attached to a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    TextJson,
    TextPlain,
    TextHtml,
    Other(String),
}

impl ContentType {
    /// MIME type string.
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::TextJson => "text/json",
            ContentType::TextPlain => "text/plain",
            ContentType::TextHtml => "text/html",
            ContentType::Other(mime) => mime,
        }
    }

    /// Content type for a well-known file extension (case-insensitive).
    pub fn for_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ContentType::TextJson),
            "txt" => Some(ContentType::TextPlain),
            "html" | "htm" => Some(ContentType::TextHtml),
            _ => None,
        }
    }

    /// Content type for a file path: well-known extensions first, then a MIME guess.
    pub fn for_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        Self::for_extension(ext).or_else(|| {
            mime_guess::from_ext(ext)
                .first_raw()
                .map(|mime| ContentType::Other(mime.to_string()))
        })
    }

    /// Parse a MIME string, folding the well-known ones into their named variants.
    pub fn parse(mime: &str) -> Self {
        match mime {
            "text/json" => ContentType::TextJson,
            "text/plain" => ContentType::TextPlain,
            "text/html" => ContentType::TextHtml,
            other => ContentType::Other(other.to_string()),
        }
    }
}
