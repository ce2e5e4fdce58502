// Application state module
// Read-only per-process state shared with every connection task

use hyper::header::HeaderValue;

use crate::logger::LogFormat;

use super::types::Config;

/// Application state
///
/// Built once at startup and never mutated; requests share nothing else.
pub struct AppState {
    pub config: Config,

    /// Parsed `logging.access_log_format`
    pub access_log_format: LogFormat,

    /// Pre-validated `Server` header, `None` if the configured name is not a valid header value
    pub server_header: Option<HeaderValue>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let access_log_format = LogFormat::parse(&config.logging.access_log_format);
        let server_header = HeaderValue::from_str(&config.http.server_name).ok();

        Self {
            config,
            access_log_format,
            server_header,
        }
    }
}
