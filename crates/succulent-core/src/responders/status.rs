use crate::responders::{Responder, ResponderError};
use crate::types::request::Request;
use crate::types::response::Response;
use crate::types::status::ResponseStatus;

/// Answers every request with a fixed status and no body.
#[derive(Debug, Clone)]
pub struct StatusResponder {
    status: ResponseStatus,
}

impl StatusResponder {
    pub fn new(status: ResponseStatus) -> Self {
        Self { status }
    }
}

impl Responder for StatusResponder {
    fn respond(&self, _request: &Request) -> Result<Option<Response>, ResponderError> {
        Ok(Some(Response::new(self.status.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ResponseStatus::Ok)]
    #[case(ResponseStatus::NotModified)]
    #[case(ResponseStatus::other(418, "I'm a teapot"))]
    fn test_status_responder(#[case] status: ResponseStatus) {
        let responder = StatusResponder::new(status.clone());
        let response = responder.respond(&Request::get("/")).unwrap().unwrap();
        assert_eq!(response.status, status);
        assert_eq!(response.data, None);
        assert_eq!(response.content_type, None);
    }
}
