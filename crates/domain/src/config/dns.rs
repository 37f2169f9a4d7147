use serde::{Deserialize, Serialize};

use crate::RecordType;

/// Upstream DNS lookup configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream resolver address (default: "8.8.8.8:53")
    #[serde(default = "default_server")]
    pub server: String,

    /// Per-query timeout in milliseconds (default: 3000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Query types sent for each lookup, in order (default: ["ANY"])
    ///
    /// Answers are scanned in this order; the first address and the first
    /// name server found win. Resolvers that answer ANY minimally
    /// (RFC 8482) can be handled with e.g. `["A", "NS"]`.
    #[serde(default = "default_query_types")]
    pub query_types: Vec<RecordType>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            timeout_ms: default_timeout_ms(),
            query_types: default_query_types(),
        }
    }
}

fn default_server() -> String {
    "8.8.8.8:53".to_string()
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_query_types() -> Vec<RecordType> {
    vec![RecordType::ANY]
}
