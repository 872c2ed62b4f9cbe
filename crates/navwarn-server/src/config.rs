//! Server configuration.
//!
//! Wraps the deployment [`S124Config`] with the listen port and the
//! location of the message file served by the in-memory repository.

use std::path::PathBuf;

use navwarn_s124::S124Config;

/// Configuration shared by the HTTP layer.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Mapping and schema settings.
    pub s124: S124Config,
    /// Port to listen on (default `8080`).
    pub listen_port: u16,
    /// JSON file holding the messages to serve.
    pub messages_file: PathBuf,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable        | Default         | Description                      |
    /// |-----------------|-----------------|----------------------------------|
    /// | `S124_PORT`     | `8080`          | HTTP listen port                 |
    /// | `S124_MESSAGES` | `messages.json` | JSON array of messages to serve  |
    ///
    /// The mapping settings are read by [`S124Config::from_env`].
    pub fn from_env() -> Self {
        let listen_port: u16 = std::env::var("S124_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        let messages_file = std::env::var("S124_MESSAGES")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("messages.json"));

        Self {
            s124: S124Config::from_env(),
            listen_port,
            messages_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listen_port() {
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.listen_port, 8080);
    }

    #[test]
    fn default_messages_file() {
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.messages_file, PathBuf::from("messages.json"));
    }
}
