//! Rule registry.
//!
//! This module provides the routing core:
//! - [`Rule`](rule::Rule): a path pattern, query constraints and a bound responder
//! - [`RuleBuilder`](rule::RuleBuilder): staged configuration compiled into a `Rule`
//! - [`Router`](router::Router): ordered rules and best-score dispatch

pub mod router;
pub mod rule;
