use crate::responders::{Responder, ResponderError};
use crate::types::content_type::ContentType;
use crate::types::request::Request;
use crate::types::response::Response;
use crate::types::status::ResponseStatus;
use std::path::{Path, PathBuf};

/// Serves the contents of a file, read fresh on every request.
///
/// The content type comes from the file extension, defaulting to `text/plain`.
#[derive(Debug, Clone)]
pub struct ResourceResponder {
    path: PathBuf,
    status: ResponseStatus,
    content_type: ContentType,
}

impl ResourceResponder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let content_type = ContentType::for_path(&path).unwrap_or(ContentType::TextPlain);
        Self {
            path,
            status: ResponseStatus::Ok,
            content_type,
        }
    }

    /// Locate a named resource under `root`. A missing resource is a setup error.
    pub fn locate(root: impl AsRef<Path>, resource: &str) -> Result<Self, ResponderError> {
        let root = root.as_ref();
        let path = root.join(resource);
        if !path.is_file() {
            return Err(ResponderError::ResourceNotFound {
                root: root.to_path_buf(),
                resource: resource.to_string(),
            });
        }
        Ok(Self::new(path))
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Replace the default `200 OK` status.
    pub fn with_status(mut self, status: ResponseStatus) -> Self {
        self.status = status;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Responder for ResourceResponder {
    fn respond(&self, _request: &Request) -> Result<Option<Response>, ResponderError> {
        let data = std::fs::read(&self.path).map_err(|source| ResponderError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(Response::with_data(
            self.status.clone(),
            data,
            Some(self.content_type.clone()),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fixtures() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    #[rstest]
    #[case("user.json", ContentType::TextJson)]
    #[case("hello.txt", ContentType::TextPlain)]
    #[case("page.html", ContentType::TextHtml)]
    fn test_locate_and_respond(#[case] name: &str, #[case] content_type: ContentType) {
        let responder = ResourceResponder::locate(fixtures(), name).unwrap();
        let response = responder.respond(&Request::get("/")).unwrap().unwrap();

        let expected = std::fs::read(fixtures().join(name)).unwrap();
        assert_eq!(response.status, ResponseStatus::Ok);
        assert_eq!(response.data, Some(expected));
        assert_eq!(response.content_type, Some(content_type));
    }

    #[rstest]
    fn test_locate_missing_resource() {
        let err = ResourceResponder::locate(fixtures(), "missing.json").unwrap_err();
        assert!(matches!(
            err,
            ResponderError::ResourceNotFound { ref resource, .. } if resource == "missing.json"
        ));
    }

    #[rstest]
    fn test_respond_fails_when_file_disappears() {
        let responder = ResourceResponder::new(fixtures().join("not-there.txt"));
        let err = responder.respond(&Request::get("/")).unwrap_err();
        assert!(matches!(err, ResponderError::Io { .. }));
    }

    #[rstest]
    fn test_content_type_override() {
        let responder = ResourceResponder::locate(fixtures(), "hello.txt")
            .unwrap()
            .with_content_type(ContentType::Other("text/markdown".to_string()));
        let response = responder.respond(&Request::get("/")).unwrap().unwrap();
        assert_eq!(
            response.content_type,
            Some(ContentType::Other("text/markdown".to_string()))
        );
    }
}
