use async_trait::async_trait;
use domain_insight_domain::{DnsAnswer, DomainError};

/// Resolves a domain name into the single address / name server / TTL triple
/// stored on a record.
///
/// Implementations pick that triple from heterogeneous answers with a fixed,
/// documented rule so the same upstream answer always yields the same triple.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// * `Ok(Some(answer))` - Usable data was found
    /// * `Ok(None)` - The upstream answered but nothing usable was in it
    /// * `Err(DomainError)` - Transport, timeout or parse failure
    async fn query(&self, name: &str) -> Result<Option<DnsAnswer>, DomainError>;
}
