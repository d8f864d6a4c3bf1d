use crate::responders::{Responder, ResponderError};
use crate::types::request::Request;
use crate::types::response::Response;
use std::fmt;

type Callback =
    dyn Fn(&Request) -> Result<Option<Response>, ResponderError> + Send + Sync + 'static;

/// Delegates response generation to a user closure.
pub struct CallbackResponder {
    callback: Box<Callback>,
}

impl CallbackResponder {
    /// Closure that cannot fail. Returning `None` yields `404 Not Found`.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Request) -> Option<Response> + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(move |request: &Request| Ok(callback(request))),
        }
    }

    /// Closure that may fail; the failure becomes `500 Internal Server Error`.
    pub fn fallible<F>(callback: F) -> Self
    where
        F: Fn(&Request) -> Result<Option<Response>, ResponderError> + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl fmt::Debug for CallbackResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackResponder").finish_non_exhaustive()
    }
}

impl Responder for CallbackResponder {
    fn respond(&self, request: &Request) -> Result<Option<Response>, ResponderError> {
        (self.callback)(request)
    }
}
