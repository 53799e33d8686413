//! Identifier extraction from request paths.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload};

/// The substring after the last `/` of `path`.
///
/// No validation happens here: a path ending in `/` yields `""`, which the
/// query layer rejects as an invalid identifier.
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

/// Raw resource identifier taken from the trailing path segment.
///
/// ```ignore
/// async fn get_user(id: ResourceId) -> impl Responder {
///     format!("looking up {}", id.as_str())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId(pub String);

impl ResourceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for ResourceId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(ResourceId(last_segment(req.path()).to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/users/abc"), "abc");
        assert_eq!(last_segment("/posts/users/0123"), "0123");
        assert_eq!(last_segment("/users/"), "");
        assert_eq!(last_segment("plain"), "plain");
        assert_eq!(last_segment(""), "");
    }

    #[actix_web::test]
    async fn test_extractor_reads_request_path() {
        let req = TestRequest::get()
            .uri("/posts/users/5f1d7f1e9c1b2a3d4e5f6a7b?skip=1")
            .to_http_request();

        let id = ResourceId::extract(&req).await.unwrap();
        assert_eq!(id.as_str(), "5f1d7f1e9c1b2a3d4e5f6a7b");
    }
}
