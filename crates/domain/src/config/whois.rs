use serde::{Deserialize, Serialize};

/// WHOIS lookup configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhoisConfig {
    /// First server asked for every name (default: "whois.iana.org")
    #[serde(default = "default_server")]
    pub server: String,

    /// TCP port (default: 43)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Connect + read timeout per server in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Follow a `refer:` line to the registry's server (default: true)
    #[serde(default = "default_true")]
    pub follow_referral: bool,
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            timeout_ms: default_timeout_ms(),
            follow_referral: true,
        }
    }
}

fn default_server() -> String {
    "whois.iana.org".to_string()
}

fn default_port() -> u16 {
    43
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}
