//! Lookup handler
//!
//! Answers `GET /{name}` (or `GET /{collection}/{name}`) with the name as plain text.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::http;

/// Placeholder rendered in the not-found text when no name was given
const MISSING_NAME: &str = "null";

/// Split a path on `/`, dropping trailing empty segments
///
/// `"/alice/"` yields `["", "alice"]` and `"/"` yields nothing.
fn segments(path: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = path.split('/').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

/// Extract the requested name from a request path
///
/// The third raw segment wins when present (`/users/alice`), otherwise the
/// second (`/alice`). A present segment is returned verbatim, even when
/// empty (`/users//x` yields `""`).
pub fn extract_name(path: &str) -> Option<&str> {
    let parts = segments(path);
    parts.get(2).or_else(|| parts.get(1)).copied()
}

/// Text returned when the path carries no name
pub fn not_found_message(name: Option<&str>) -> String {
    // Clients match on the literal `User null not found.`
    format!("User {} not found.", name.unwrap_or(MISSING_NAME))
}

pub fn handle(path: &str) -> Response<Full<Bytes>> {
    let body = match extract_name(path) {
        Some(name) => name.to_string(),
        None => not_found_message(None),
    };

    // Not-found is still a 200
    http::build_text_response(StatusCode::OK, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_extract_single_segment() {
        assert_eq!(extract_name("/alice"), Some("alice"));
        assert_eq!(extract_name("/alice/"), Some("alice"));
        assert_eq!(extract_name("/x"), Some("x"));
    }

    #[test]
    fn test_extract_third_segment() {
        assert_eq!(extract_name("/users/alice"), Some("alice"));
        assert_eq!(extract_name("/users/alice/extra"), Some("alice"));
        assert_eq!(extract_name("//bob"), Some("bob"));
    }

    #[test]
    fn test_extract_absent() {
        assert_eq!(extract_name("/"), None);
        assert_eq!(extract_name("//"), None);
    }

    #[test]
    fn test_extract_empty_third_segment() {
        assert_eq!(extract_name("/users//x"), Some(""));
    }

    #[test]
    fn test_segment_kept_verbatim() {
        assert_eq!(extract_name("/Al%20ice"), Some("Al%20ice"));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(not_found_message(None), "User null not found.");
        assert_eq!(not_found_message(Some("bob")), "User bob not found.");
    }

    #[tokio::test]
    async fn test_handle_found_and_missing() {
        let resp = handle("/alice");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "text/plain");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "alice");

        let resp = handle("/");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "User null not found.");

        let resp = handle("/users//x");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
