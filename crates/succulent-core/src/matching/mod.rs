//! Request matching: anchored path patterns and scored query constraints.

mod path;
mod query;

pub use path::PathPattern;
pub use query::{parse_query_string, QueryConstraints};
