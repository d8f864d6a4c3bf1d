//! A single registered route and its staged builder.

use crate::config::error::ConfigError;
use crate::matching::{PathPattern, QueryConstraints};
use crate::responders::{
    CallbackResponder, ContentResponder, Responder, ResponderError, ResourceResponder,
    StatusResponder,
};
use crate::types::content_type::ContentType;
use crate::types::request::Request;
use crate::types::response::Response;
use crate::types::status::ResponseStatus;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Accumulates the configuration of a rule before it is compiled.
///
/// Every method consumes and returns the builder, so a half-configured rule is never
/// shared. Patterns are compiled in [`RuleBuilder::build`].
///
/// ```
/// # use succulent_core::{Request, ResponseStatus, Rule};
/// # fn main() -> Result<(), succulent_core::ConfigError> {
/// let rule = Rule::builder("/search")
///     .param("q", r"\w+")
///     .status(ResponseStatus::Ok)
///     .build()?;
///
/// assert_eq!(rule.score(&Request::get("/search").with_query("q=cats")), Some(1));
/// assert_eq!(rule.score(&Request::get("/search")), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    path: String,
    params: HashMap<String, String>,
    allow_unlisted: bool,
    headers: Vec<(String, String)>,
    responder: Option<Arc<dyn Responder>>,
}

impl RuleBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: HashMap::new(),
            allow_unlisted: false,
            headers: Vec::new(),
            responder: None,
        }
    }

    /// Require query parameter `name` with a value fully matching `pattern`.
    pub fn param(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.params.insert(name.into(), pattern.into());
        self
    }

    /// Accept query parameters that are not required.
    pub fn any_params(mut self) -> Self {
        self.allow_unlisted = true;
        self
    }

    /// Header attached to every response this rule produces. Not used for matching.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(existing) => existing.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Bind any response producer, replacing the previous one.
    pub fn respond(mut self, responder: impl Responder + 'static) -> Self {
        self.responder = Some(Arc::new(responder));
        self
    }

    pub fn status(self, status: ResponseStatus) -> Self {
        self.respond(StatusResponder::new(status))
    }

    pub fn content(self, data: impl Into<Vec<u8>>, content_type: ContentType) -> Self {
        self.respond(ContentResponder::new(data, content_type))
    }

    pub fn text(self, text: &str, content_type: ContentType) -> Self {
        self.content(text.as_bytes(), content_type)
    }

    /// Serve `value` serialised as JSON.
    pub fn json<T: serde::Serialize + ?Sized>(self, value: &T) -> Result<Self, ConfigError> {
        Ok(self.respond(ContentResponder::json(value)?))
    }

    /// Serve a file. The file is read on each request.
    pub fn resource(self, path: impl Into<PathBuf>) -> Self {
        self.respond(ResourceResponder::new(path))
    }

    /// Serve a named resource under `root`, failing now if it does not exist.
    pub fn resource_in(self, root: impl AsRef<Path>, name: &str) -> Result<Self, ConfigError> {
        Ok(self.respond(ResourceResponder::locate(root, name)?))
    }

    pub fn block<F>(self, callback: F) -> Self
    where
        F: Fn(&Request) -> Option<Response> + Send + Sync + 'static,
    {
        self.respond(CallbackResponder::new(callback))
    }

    pub fn try_block<F>(self, callback: F) -> Self
    where
        F: Fn(&Request) -> Result<Option<Response>, ResponderError> + Send + Sync + 'static,
    {
        self.respond(CallbackResponder::fallible(callback))
    }

    /// Compile the path and parameter patterns into an immutable [`Rule`].
    pub fn build(self) -> Result<Rule, ConfigError> {
        Ok(Rule {
            path: PathPattern::new(&self.path)?,
            query: QueryConstraints::new(&self.params, self.allow_unlisted)?,
            headers: self.headers,
            responder: self.responder,
        })
    }
}

/// Registered route: a path pattern, query constraints and a bound responder.
#[derive(Debug, Clone)]
pub struct Rule {
    path: PathPattern,
    query: QueryConstraints,
    headers: Vec<(String, String)>,
    responder: Option<Arc<dyn Responder>>,
}

impl Rule {
    pub fn builder(path: impl Into<String>) -> RuleBuilder {
        RuleBuilder::new(path)
    }

    /// Path pattern as written.
    pub fn pattern(&self) -> &str {
        self.path.as_str()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Match quality for `request`, or `None` when the rule does not apply.
    pub fn score(&self, request: &Request) -> Option<u32> {
        if !self.path.matches(&request.path) {
            return None;
        }
        self.query.score(request.query_string.as_deref())
    }

    /// Produce the response for a request this rule matched.
    ///
    /// No responder, or a responder declining, gives `404 Not Found`. A responder error is
    /// logged and gives `500 Internal Server Error`.
    pub fn handle(&self, request: &Request) -> Response {
        match self.produce(request) {
            Ok(Some(mut response)) => {
                self.attach_headers(&mut response);
                response
            }
            Ok(None) => Response::not_found(),
            Err(error) => {
                tracing::error!(
                    pattern = %self.pattern(),
                    path = %request.path,
                    error = %error,
                    "Failed to generate response"
                );
                Response::internal_server_error()
            }
        }
    }

    fn produce(&self, request: &Request) -> Result<Option<Response>, ResponderError> {
        match &self.responder {
            Some(responder) => responder.respond(request),
            None => Ok(None),
        }
    }

    fn attach_headers(&self, response: &mut Response) {
        for (name, value) in &self.headers {
            if response.header(name).is_none() {
                response.headers.push((name.clone(), value.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use tracing_test::traced_test;

    fn request(target: &str) -> Request {
        Request::from_target(Default::default(), target)
    }

    #[rstest]
    #[case("/search?q=cats", Some(1))]
    #[case("/search?q=cats&page=2", None)]
    #[case("/search", None)]
    #[case("/search/more?q=cats", None)]
    fn test_search_rule_score(#[case] target: &str, #[case] expected: Option<u32>) {
        let rule = Rule::builder("/search").param("q", r"\w+").build().unwrap();
        assert_eq!(rule.score(&request(target)), expected);
    }

    #[rstest]
    #[case("/search?q=cats&page=2", Some(1))]
    #[case("/search?page=2", None)]
    fn test_any_params(#[case] target: &str, #[case] expected: Option<u32>) {
        let rule = Rule::builder("/search")
            .param("q", r"\w+")
            .any_params()
            .build()
            .unwrap();
        assert_eq!(rule.score(&request(target)), expected);
    }

    #[rstest]
    fn test_path_rejection_skips_query() {
        let rule = Rule::builder(r"/item/\d+").build().unwrap();
        assert_eq!(rule.score(&request("/item/5")), Some(0));
        assert_eq!(rule.score(&request("/item/x")), None);
    }

    #[rstest]
    fn test_build_rejects_invalid_patterns() {
        assert!(matches!(
            Rule::builder("/item/(").build(),
            Err(ConfigError::InvalidPattern { .. })
        ));
        assert!(matches!(
            Rule::builder("/item").param("id", "[").build(),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[rstest]
    fn test_handle_without_responder_is_not_found() {
        let rule = Rule::builder("/a").build().unwrap();
        assert_eq!(rule.handle(&request("/a")), Response::not_found());
    }

    #[rstest]
    fn test_handle_declining_responder_is_not_found() {
        let rule = Rule::builder("/a").block(|_| None).build().unwrap();
        assert_eq!(rule.handle(&request("/a")).status, ResponseStatus::NotFound);
    }

    #[rstest]
    fn test_handle_failing_responder_is_internal_server_error() {
        let rule = Rule::builder("/a")
            .try_block(|_| Err(ResponderError::callback("boom")))
            .build()
            .unwrap();
        let response = rule.handle(&request("/a"));
        assert_eq!(response.status.code(), 500);
        assert_eq!(response.status.message(), "Internal Server Error");
    }

    #[test]
    #[traced_test]
    fn test_failing_responder_is_logged() {
        let rule = Rule::builder("/a")
            .try_block(|_| Err(ResponderError::callback("disk on fire")))
            .build()
            .unwrap();
        rule.handle(&request("/a"));
        assert!(logs_contain("Failed to generate response"));
        assert!(logs_contain("disk on fire"));
    }

    #[rstest]
    fn test_handle_missing_resource_is_internal_server_error() {
        let rule = Rule::builder("/a")
            .resource("/definitely/not/here.json")
            .build()
            .unwrap();
        assert_eq!(rule.handle(&request("/a")).status.code(), 500);
    }

    #[rstest]
    fn test_later_responder_replaces_earlier() {
        let rule = Rule::builder("/a")
            .status(ResponseStatus::NotModified)
            .text("body", ContentType::TextPlain)
            .build()
            .unwrap();
        let response = rule.handle(&request("/a"));
        assert_eq!(response.status, ResponseStatus::Ok);
        assert_eq!(response.data.as_deref(), Some(&b"body"[..]));
    }

    #[rstest]
    fn test_json_body() {
        let rule = Rule::builder("/user")
            .json(&json!({"name": "Ada"}))
            .unwrap()
            .build()
            .unwrap();
        let response = rule.handle(&request("/user"));
        assert_eq!(response.content_type, Some(ContentType::TextJson));
        assert_eq!(response.data.as_deref(), Some(&br#"{"name":"Ada"}"#[..]));
    }

    #[rstest]
    fn test_resource_in_missing_is_config_error() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let result = Rule::builder("/a").resource_in(&root, "missing.json");
        assert!(matches!(
            result,
            Err(ConfigError::Responder(ResponderError::ResourceNotFound { .. }))
        ));

        let rule = Rule::builder("/a")
            .resource_in(&root, "user.json")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(rule.handle(&request("/a")).status, ResponseStatus::Ok);
    }

    #[rstest]
    fn test_headers_are_attached_but_not_matched() {
        let rule = Rule::builder("/a")
            .header("X-Mock", "1")
            .header("x-mock", "2")
            .header("Cache-Control", "no-store")
            .status(ResponseStatus::Ok)
            .build()
            .unwrap();

        assert_eq!(rule.headers().len(), 2);
        assert_eq!(rule.score(&request("/a")), Some(0));

        let response = rule.handle(&request("/a"));
        assert_eq!(response.header("X-Mock"), Some("2"));
        assert_eq!(response.header("cache-control"), Some("no-store"));
    }

    #[rstest]
    fn test_responder_headers_take_precedence() {
        let rule = Rule::builder("/a")
            .header("X-Mock", "rule")
            .block(|_| {
                let mut response = Response::new(ResponseStatus::Ok);
                response.headers.push(("X-Mock".to_string(), "block".to_string()));
                Some(response)
            })
            .build()
            .unwrap();
        let response = rule.handle(&request("/a"));
        assert_eq!(response.header("x-mock"), Some("block"));
        assert_eq!(response.headers.len(), 1);
    }
}
