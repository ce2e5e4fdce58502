// Configuration module entry point
// Loads ambient settings and holds the per-process application state

mod state;
mod types;

use std::net::{Ipv4Addr, SocketAddr};

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Port the dispatcher listens on. Not configurable.
pub const LISTEN_PORT: u16 = 8000;

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Address the dispatcher binds: all IPv4 interfaces on [`LISTEN_PORT`]
pub fn listen_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT))
}

impl Config {
    /// Load configuration from `config.toml` in the working directory, if present
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.keep_alive", true)?
            .set_default("http.server_name", "demo-server/0.1")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .build()?;

        settings.try_deserialize()
    }
}
