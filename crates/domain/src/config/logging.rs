use serde::{Deserialize, Serialize};

/// `[logging]` section.
///
/// `level` seeds the tracing filter at startup; a `RUST_LOG` directive in the
/// environment takes precedence over it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error` (default: `info`)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
