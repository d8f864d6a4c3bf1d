//! Rule registry and winner selection.
//!
//! This module provides `Router`, which holds rules in registration order and answers each
//! request with the response of the best-scoring rule.

use crate::config::error::ConfigError;
use crate::mocks::rule::{Rule, RuleBuilder};
use crate::types::request::Request;
use crate::types::response::Response;

/// Ordered collection of rules.
///
/// Every request is scored against every rule; the highest score wins and among equal
/// scores the rule registered last wins. Matching keeps no state between requests.
///
/// Registration takes `&mut self` and dispatch takes `&self`, so rules are expected to be
/// registered during setup, before the router is shared.
#[derive(Debug, Clone, Default)]
pub struct Router {
    rules: Vec<Rule>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and register a rule. An invalid pattern aborts with a configuration error
    /// and leaves the router unchanged.
    pub fn add(&mut self, builder: RuleBuilder) -> Result<(), ConfigError> {
        self.push(builder.build()?);
        Ok(())
    }

    /// Register an already compiled rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Registered rules in registration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Winning rule for `request` with its score.
    pub fn best_match(&self, request: &Request) -> Option<(&Rule, u32)> {
        let mut best: Option<(&Rule, u32)> = None;

        for rule in &self.rules {
            let Some(score) = rule.score(request) else {
                continue;
            };
            // `>=` lets a later registration override an earlier one of equal specificity
            if best.map_or(true, |(_, best_score)| score >= best_score) {
                best = Some((rule, score));
            }
        }

        best
    }

    /// Answer a request. Never fails: no match gives `404 Not Found` and a failing
    /// responder gives `500 Internal Server Error`.
    pub fn handle(&self, request: &Request) -> Response {
        match self.best_match(request) {
            Some((rule, score)) => {
                tracing::debug!(
                    method = %request.method,
                    path = %request.path,
                    pattern = %rule.pattern(),
                    score,
                    "Rule matched"
                );
                rule.handle(request)
            }
            None => {
                tracing::debug!(
                    method = %request.method,
                    path = %request.path,
                    query = ?request.query_string,
                    "No rule matched"
                );
                Response::not_found()
            }
        }
    }
}
