//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: classifies the method and hands the
//! request to the matching handler.

use crate::handler::{echo, lookup};
use crate::http;
use crate::logger;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};

/// Request method as seen by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Other,
}

impl From<&Method> for RequestMethod {
    fn from(method: &Method) -> Self {
        match method {
            &Method::GET => Self::Get,
            &Method::POST => Self::Post,
            _ => Self::Other,
        }
    }
}

/// Main entry point for HTTP request handling
///
/// Produces exactly one response per request. The only error is a failure
/// while reading a POST body, which is returned so the connection gets closed.
pub async fn handle_request<B>(req: Request<B>) -> Result<Response<Full<Bytes>>, B::Error>
where
    B: Body,
{
    match RequestMethod::from(req.method()) {
        RequestMethod::Post => {
            let payload = req.into_body().collect().await?.to_bytes();
            Ok(echo::handle(&payload))
        }
        RequestMethod::Get => Ok(lookup::handle(req.uri().path())),
        RequestMethod::Other => {
            logger::log_warning(&format!("Method not allowed: {}", req.method()));
            Ok(http::build_405_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::body::Frame;
    use hyper::StatusCode;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Body whose first read fails, as with a connection reset mid-upload
    struct FailingBody;

    impl Body for FailingBody {
        type Data = Bytes;
        type Error = std::io::Error;

        fn poll_frame(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
            Poll::Ready(Some(Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "reset mid-body",
            ))))
        }
    }

    fn request(method: &str, uri: &str, body: &'static str) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Full::new(Bytes::from_static(body.as_bytes())))
            .unwrap()
    }

    async fn dispatch(method: &str, uri: &str, body: &'static str) -> (StatusCode, String, Bytes) {
        let resp = handle_request(request(method, uri, body)).await.unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, body)
    }

    #[test]
    fn test_method_classification() {
        assert_eq!(RequestMethod::from(&Method::GET), RequestMethod::Get);
        assert_eq!(RequestMethod::from(&Method::POST), RequestMethod::Post);
        assert_eq!(RequestMethod::from(&Method::PUT), RequestMethod::Other);
        assert_eq!(RequestMethod::from(&Method::HEAD), RequestMethod::Other);
        let custom = Method::from_bytes(b"PURGE").unwrap();
        assert_eq!(RequestMethod::from(&custom), RequestMethod::Other);
    }

    #[tokio::test]
    async fn test_post_echoes_ack() {
        let (status, content_type, body) = dispatch("POST", "/", "hello").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(content_type, "application/json");
        assert_eq!(body, r#"{"message": "OK"}"#);
    }

    #[tokio::test]
    async fn test_post_on_any_path() {
        let (status, _, body) = dispatch("POST", "/users/alice", "{}").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, r#"{"message": "OK"}"#);
    }

    #[tokio::test]
    async fn test_get_returns_segment() {
        let (status, content_type, body) = dispatch("GET", "/alice", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/plain");
        assert_eq!(body, "alice");
    }

    #[tokio::test]
    async fn test_get_ignores_query() {
        let (_, _, body) = dispatch("GET", "/alice?verbose=1", "").await;
        assert_eq!(body, "alice");
    }

    #[tokio::test]
    async fn test_get_root_not_found_text() {
        let (status, _, body) = dispatch("GET", "/", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "User null not found.");
    }

    #[tokio::test]
    async fn test_other_method_refused() {
        let (status, _, _) = dispatch("PUT", "/", "data").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, _, _) = dispatch("DELETE", "/alice", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_body_read_failure_propagates() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(FailingBody)
            .unwrap();
        let err = handle_request(req).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::ConnectionReset);
    }

    #[tokio::test]
    async fn test_get_does_not_read_body() {
        let req = Request::builder()
            .method("GET")
            .uri("/bob")
            .body(FailingBody)
            .unwrap();
        let resp = handle_request(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
