//! Anchored regular-expression matching for request paths.

use crate::config::error::ConfigError;
use regex::Regex;

/// Compile `pattern` so that it only accepts a match spanning the whole input.
pub(crate) fn full_match_regex(pattern: &str) -> Result<Regex, ConfigError> {
    // Validate the user pattern on its own first so the error points at their text,
    // not at the anchored wrapper.
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Path pattern of a rule. Matches only when the expression describes the entire path.
///
/// The whole path is tried against the pattern, not just its leftmost match: `/a|/ab`
/// accepts `/ab` and lazy `/a.*?` accepts `/abc`, where a leftmost-first search that
/// then checks for end of input would reject both.
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    regex: Regex,
}

impl PathPattern {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            source: pattern.to_string(),
            regex: full_match_regex(pattern)?,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}
