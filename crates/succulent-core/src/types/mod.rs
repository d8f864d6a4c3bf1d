//! Request, response and status value types.

pub mod content_type;
pub mod request;
pub mod response;
pub mod status;
