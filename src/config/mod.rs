// Configuration module entry point
// Loads settings and holds the read-only state shared by request handlers

mod state;
mod types;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub use state::AppState;
pub use types::Config;

/// Config file looked up in the working directory (extension optional)
pub const DEFAULT_CONFIG_FILE: &str = "devserver";

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional. `DEVSERVER_SERVER__PORT=9000` style environment
    /// variables override it.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("DEVSERVER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.root", default_root().to_string_lossy().into_owned())?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Fail early when the served root is not a directory
    pub fn check_root(&self) -> Result<PathBuf, String> {
        let root = &self.server.root;
        if !root.is_dir() {
            return Err(format!("Root is not a directory: {}", root.display()));
        }
        root.canonicalize()
            .map_err(|e| format!("Cannot resolve root '{}': {e}", root.display()))
    }
}

/// Directory containing the running executable, so serving does not depend
/// on where the server was launched from
fn default_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
