//! Declarative rule configuration.
//!
//! Rules can be written in YAML, JSON or JSONC files and loaded into a
//! [`Router`](crate::mocks::router::Router):
//! - [`rule`]: serde definitions of a rule and its response
//! - [`parser`]: file type detection, parsing and glob loading
//! - [`error`]: [`ConfigError`](error::ConfigError), raised for every setup failure

pub mod error;
pub mod parser;
pub mod rule;
