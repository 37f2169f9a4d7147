use domain_insight_domain::{DnsAnswer, DomainError, DomainRecord};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::{DnsLookup, DomainRecordRepository, WhoisLookup};

/// Same layout as SQLite's `CURRENT_TIMESTAMP`, which fills the column when a
/// record is stored without a stamp.
const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Answers "what do we know about this domain?".
///
/// A stored record is returned as-is, however old. On a miss the DNS and WHOIS
/// lookups run concurrently; a failure in either only leaves its fields empty.
/// The merged record is upserted once both have settled.
///
/// Only `DomainError::InvalidDomainName` (raised before any I/O) and store
/// errors reach the caller.
pub struct ResolveDomainUseCase {
    repository: Arc<dyn DomainRecordRepository>,
    dns: Arc<dyn DnsLookup>,
    whois: Arc<dyn WhoisLookup>,
}

impl ResolveDomainUseCase {
    pub fn new(
        repository: Arc<dyn DomainRecordRepository>,
        dns: Arc<dyn DnsLookup>,
        whois: Arc<dyn WhoisLookup>,
    ) -> Self {
        Self {
            repository,
            dns,
            whois,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, name: &str) -> Result<DomainRecord, DomainError> {
        let mut record = DomainRecord::new(name)?;

        if let Some(cached) = self.repository.get_by_name(name).await? {
            debug!(domain = %name, "Domain record served from store");
            return Ok(cached);
        }

        let (dns_answer, whois_text) =
            tokio::join!(self.lookup_dns(name), self.lookup_whois(name));

        if let Some(answer) = dns_answer {
            record.apply_dns(answer);
        }
        if let Some(text) = whois_text {
            record.apply_whois(text);
        }

        record.updated_at = Some(chrono::Utc::now().format(UPDATED_AT_FORMAT).to_string());
        self.repository.upsert(&record).await?;

        info!(
            domain = %name,
            ip = record.ip.as_deref().unwrap_or("-"),
            hosted_at = record.hosted_at.as_deref().unwrap_or("-"),
            has_whois = record.has_whois_data(),
            "Domain resolved and stored"
        );

        Ok(record)
    }

    async fn lookup_dns(&self, name: &str) -> Option<DnsAnswer> {
        match self.dns.query(name).await {
            Ok(Some(answer)) => Some(answer),
            Ok(None) => {
                debug!(domain = %name, "DNS lookup returned no usable data");
                None
            }
            Err(e) => {
                warn!(domain = %name, error = %e, "DNS lookup failed, storing without DNS data");
                None
            }
        }
    }

    async fn lookup_whois(&self, name: &str) -> Option<String> {
        match self.whois.query(name).await {
            Ok(Some(text)) => Some(text),
            Ok(None) => {
                debug!(domain = %name, "WHOIS lookup returned no data");
                None
            }
            Err(e) => {
                warn!(domain = %name, error = %e, "WHOIS lookup failed, storing without WHOIS data");
                None
            }
        }
    }
}
