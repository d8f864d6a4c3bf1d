use crate::responders::{Responder, ResponderError};
use crate::types::content_type::ContentType;
use crate::types::request::Request;
use crate::types::response::Response;
use crate::types::status::ResponseStatus;

/// Serves a static body held in memory.
#[derive(Debug, Clone)]
pub struct ContentResponder {
    status: ResponseStatus,
    data: Vec<u8>,
    content_type: ContentType,
}

impl ContentResponder {
    pub fn new(data: impl Into<Vec<u8>>, content_type: ContentType) -> Self {
        Self {
            status: ResponseStatus::Ok,
            data: data.into(),
            content_type,
        }
    }

    /// JSON body serialised from any `Serialize` value.
    pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::to_vec(value)?, ContentType::TextJson))
    }

    /// Replace the default `200 OK` status.
    pub fn with_status(mut self, status: ResponseStatus) -> Self {
        self.status = status;
        self
    }
}

impl Responder for ContentResponder {
    fn respond(&self, _request: &Request) -> Result<Option<Response>, ResponderError> {
        Ok(Some(Response::with_data(
            self.status.clone(),
            self.data.clone(),
            Some(self.content_type.clone()),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_content_responder() {
        let responder = ContentResponder::new("hello", ContentType::TextHtml);
        let response = responder.respond(&Request::get("/")).unwrap().unwrap();
        assert_eq!(response.status, ResponseStatus::Ok);
        assert_eq!(response.data.as_deref(), Some(&b"hello"[..]));
        assert_eq!(response.content_type, Some(ContentType::TextHtml));
    }

    #[rstest]
    fn test_json_responder() {
        let responder = ContentResponder::json(&json!({"id": 5})).unwrap();
        let response = responder.respond(&Request::get("/")).unwrap().unwrap();
        let body: serde_json::Value = serde_json::from_slice(&response.data.unwrap()).unwrap();
        assert_eq!(body, json!({"id": 5}));
        assert_eq!(response.content_type, Some(ContentType::TextJson));
    }

    #[rstest]
    fn test_with_status() {
        let responder = ContentResponder::new("gone", ContentType::TextPlain)
            .with_status(ResponseStatus::other(410, "Gone"));
        let response = responder.respond(&Request::get("/")).unwrap().unwrap();
        assert_eq!(response.status.code(), 410);
    }
}
