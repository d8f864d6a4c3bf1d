//! Query-string parsing and query-parameter constraint scoring.

use crate::config::error::ConfigError;
use crate::matching::path::full_match_regex;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Parse a query string into ordered `(key, value)` pairs with URL decoding.
///
/// Pairs split on the first `=`; a pair without `=` yields an empty value. Empty pairs are
/// skipped and repeated keys are kept as separate pairs.
pub fn parse_query_string(query_str: &str) -> Vec<(String, String)> {
    query_str
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Required query parameters of a rule, each constrained by an anchored expression.
#[derive(Debug, Clone, Default)]
pub struct QueryConstraints {
    required: HashMap<String, Regex>,
    allow_unlisted: bool,
}

impl QueryConstraints {
    /// Compile the required parameter patterns. An invalid pattern is a configuration error.
    pub fn new(
        required: &HashMap<String, String>,
        allow_unlisted: bool,
    ) -> Result<Self, ConfigError> {
        let required = required
            .iter()
            .map(|(name, pattern)| full_match_regex(pattern).map(|regex| (name.clone(), regex)))
            .collect::<Result<HashMap<_, _>, ConfigError>>()?;

        Ok(Self {
            required,
            allow_unlisted,
        })
    }

    pub fn required_count(&self) -> usize {
        self.required.len()
    }

    pub fn allows_unlisted(&self) -> bool {
        self.allow_unlisted
    }

    /// Score a request's query string against these constraints.
    ///
    /// Returns `None` when the rule is rejected, otherwise the number of satisfied
    /// required parameters. Every occurrence of a required key must fully match, but
    /// each key counts once toward the score.
    pub fn score(&self, query_string: Option<&str>) -> Option<u32> {
        let Some(query_string) = query_string else {
            return self.required.is_empty().then_some(0);
        };

        let mut remaining: HashSet<&str> = self.required.keys().map(String::as_str).collect();
        let mut score = 0;

        for (key, value) in parse_query_string(query_string) {
            match self.required.get(&key) {
                Some(pattern) => {
                    if !pattern.is_match(&value) {
                        return None;
                    }
                    if remaining.remove(key.as_str()) {
                        score += 1;
                    }
                }
                None if self.allow_unlisted => {}
                None => return None,
            }
        }

        remaining.is_empty().then_some(score)
    }
}
