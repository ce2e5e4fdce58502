//! Echo handler
//!
//! Logs the posted payload and acknowledges it with a fixed JSON body.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::http;
use crate::logger;

/// Acknowledgement sent for every accepted payload
pub const ACK_BODY: &str = r#"{"message": "OK"}"#;

pub fn handle(payload: &[u8]) -> Response<Full<Bytes>> {
    logger::log_client_data(payload);
    http::build_json_response(StatusCode::CREATED, ACK_BODY)
}
