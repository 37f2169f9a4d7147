//! Configuration module for Domain Insight
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding
//! - `database`: SQLite store
//! - `dns`: Upstream DNS lookups
//! - `whois`: WHOIS lookups
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod database;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod whois;

pub use database::DatabaseConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use whois::WhoisConfig;
