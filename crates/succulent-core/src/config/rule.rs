//! Declarative rule definitions.

use crate::config::error::ConfigError;
use crate::mocks::rule::RuleBuilder;
use crate::responders::{ContentResponder, ResourceResponder};
use crate::types::content_type::ContentType;
use crate::types::status::ResponseStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Status as written in a config file: a bare code or a code with a reason phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusConfig {
    Code(u16),
    Full { code: u16, message: String },
}

impl From<&StatusConfig> for ResponseStatus {
    fn from(status: &StatusConfig) -> Self {
        match status {
            StatusConfig::Code(code) => ResponseStatus::from_code(*code),
            StatusConfig::Full { code, message } => ResponseStatus::other(*code, message.clone()),
        }
    }
}

/// Response of a declared rule. At most one of `content`, `json` and `resource` may be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseConfig {
    /// Status code (defaults to 200)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusConfig>,
    /// Literal text body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// JSON body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<serde_json::Value>,
    /// File to serve, relative to the config file's directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// MIME type overriding the default for the body kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Rule definition as found in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    /// Path pattern (regular expression matched against the whole path)
    pub path: String,
    /// Required query parameters and their value patterns
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, String>,
    /// Accept query parameters that are not listed in `params`
    #[serde(default)]
    pub any_params: bool,
    /// Headers added to the response
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    /// Response; a rule without one answers 404
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseConfig>,
}

impl RuleConfig {
    /// Turn the definition into a builder. Resources resolve against `base_dir`.
    pub fn into_builder(self, base_dir: &Path) -> Result<RuleBuilder, ConfigError> {
        let mut builder = RuleBuilder::new(self.path.clone());

        let mut params: Vec<_> = self.params.into_iter().collect();
        params.sort();
        for (name, pattern) in params {
            builder = builder.param(name, pattern);
        }
        if self.any_params {
            builder = builder.any_params();
        }

        let mut headers: Vec<_> = self.headers.into_iter().collect();
        headers.sort();
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        match self.response {
            Some(response) => response.apply(builder, &self.path, base_dir),
            None => Ok(builder),
        }
    }
}

impl ResponseConfig {
    fn apply(
        self,
        builder: RuleBuilder,
        path: &str,
        base_dir: &Path,
    ) -> Result<RuleBuilder, ConfigError> {
        let bodies = [
            self.content.is_some(),
            self.json.is_some(),
            self.resource.is_some(),
        ];
        if bodies.iter().filter(|set| **set).count() > 1 {
            return Err(ConfigError::ConflictingResponse {
                path: path.to_string(),
            });
        }

        let status = self.status.as_ref().map(ResponseStatus::from);
        let content_type = self.content_type.as_deref().map(ContentType::parse);

        if let Some(content) = self.content {
            let responder = ContentResponder::new(
                content,
                content_type.unwrap_or(ContentType::TextPlain),
            );
            return Ok(builder.respond(with_status(responder, status)));
        }

        if let Some(json) = self.json {
            let responder = ContentResponder::new(
                serde_json::to_vec(&json)?,
                content_type.unwrap_or(ContentType::TextJson),
            );
            return Ok(builder.respond(with_status(responder, status)));
        }

        if let Some(resource) = self.resource {
            let mut responder = ResourceResponder::locate(base_dir, &resource)?;
            if let Some(content_type) = content_type {
                responder = responder.with_content_type(content_type);
            }
            if let Some(status) = status {
                responder = responder.with_status(status);
            }
            return Ok(builder.respond(responder));
        }

        Ok(builder.status(status.unwrap_or(ResponseStatus::Ok)))
    }
}

fn with_status(responder: ContentResponder, status: Option<ResponseStatus>) -> ContentResponder {
    match status {
        Some(status) => responder.with_status(status),
        None => responder,
    }
}
