//! In-process HTTP request mocking.
//!
//! Register rules on a [`Router`], each pairing an anchored path pattern and optional
//! query-parameter constraints with a [`Responder`]. Each request is scored against every
//! rule and answered by the best one:
//!
//! ```
//! use succulent_core::{HttpMethod, Request, ResponseStatus, Router, Rule};
//!
//! # fn main() -> Result<(), succulent_core::ConfigError> {
//! let results = vec!["cats", "more cats"];
//!
//! let mut router = Router::new();
//! router.add(Rule::builder("/search").param("q", r"\w+").json(&results)?)?;
//! router.add(Rule::builder(r"/item/\d+").status(ResponseStatus::NotModified))?;
//!
//! let response = router.handle(&Request::from_target(HttpMethod::Get, "/search?q=cats"));
//! assert_eq!(response.status, ResponseStatus::Ok);
//! assert_eq!(response.data.as_deref(), Some(&br#"["cats","more cats"]"#[..]));
//!
//! assert_eq!(router.handle(&Request::get("/item/7")).status.code(), 304);
//! assert_eq!(router.handle(&Request::get("/item/x")).status.code(), 404);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod matching;
pub mod mocks;
pub mod responders;
pub mod types;

pub use config::error::ConfigError;
pub use mocks::router::Router;
pub use mocks::rule::{Rule, RuleBuilder};
pub use responders::{Responder, ResponderError};
pub use types::content_type::ContentType;
pub use types::request::{HttpMethod, Request};
pub use types::response::Response;
pub use types::status::ResponseStatus;
