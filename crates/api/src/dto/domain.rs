use domain_insight_domain::DomainRecord;
use serde::{Deserialize, Serialize};

/// Response DTO for a domain lookup.
///
/// Field names follow the public JSON contract; absent values serialize as
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResponse {
    pub name: String,
    pub ip: Option<String>,
    pub hosted_at: Option<String>,
    pub ttl: Option<u32>,
    pub who_is: Option<String>,
}

impl DomainResponse {
    pub fn from_record(record: &DomainRecord) -> Self {
        Self {
            name: record.name().to_string(),
            ip: record.ip.as_ref().map(|s| s.to_string()),
            hosted_at: record.hosted_at.as_ref().map(|s| s.to_string()),
            ttl: record.ttl,
            who_is: record.whois.as_ref().map(|s| s.to_string()),
        }
    }
}
