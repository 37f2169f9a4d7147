use async_trait::async_trait;
use domain_insight_domain::DomainError;

/// Fetches the free-text WHOIS registration data for a domain.
///
/// The text is returned verbatim; callers do not parse it.
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    async fn query(&self, name: &str) -> Result<Option<String>, DomainError>;
}
