use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use super::{
    ConfigError, DatabaseConfig, DnsConfig, LoggingConfig, ServerConfig, WhoisConfig,
};

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub whois: WhoisConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line; each one wins over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub database_path: Option<String>,
    pub dns_server: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from an optional TOML file, then apply CLI overrides.
    ///
    /// Without a path, `./domain-insight.toml` is used when present and the
    /// built-in defaults otherwise.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new("domain-insight.toml").exists() => {
                Self::from_file("domain-insight.toml")?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(server) = overrides.dns_server {
            self.dns.server = server;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation(
                "server.web_port cannot be 0".to_string(),
            ));
        }

        if self.database.path.is_empty() {
            return Err(ConfigError::Validation(
                "database.path cannot be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        if self.dns.server.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "dns.server must be an ip:port pair, got '{}'",
                self.dns.server
            )));
        }

        if self.dns.query_types.is_empty() {
            return Err(ConfigError::Validation(
                "dns.query_types cannot be empty".to_string(),
            ));
        }

        if self.dns.timeout_ms == 0 || self.whois.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "dns.timeout_ms and whois.timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.whois.server.is_empty() {
            return Err(ConfigError::Validation(
                "whois.server cannot be empty".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got '{}'",
                VALID_LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}
