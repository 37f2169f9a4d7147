use crate::errors::DomainError;
use crate::validators::validate_domain_name;
use std::sync::Arc;

/// The single address / name server / TTL triple extracted from a DNS answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsAnswer {
    pub ip: Option<Arc<str>>,
    pub name_server: Option<Arc<str>>,
    pub ttl: Option<u32>,
}

impl DnsAnswer {
    pub fn new(ip: impl Into<Arc<str>>, name_server: impl Into<Arc<str>>, ttl: u32) -> Self {
        Self {
            ip: Some(ip.into()),
            name_server: Some(name_server.into()),
            ttl: Some(ttl),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ip.is_none() && self.name_server.is_none()
    }
}

/// Everything known about one domain.
///
/// `name` is validated on construction and cannot change afterwards. The DNS
/// fields and `whois` have independent lifecycles: either may be empty while
/// the other is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    name: Arc<str>,
    pub ip: Option<Arc<str>>,
    pub hosted_at: Option<Arc<str>>,
    pub ttl: Option<u32>,
    pub whois: Option<Arc<str>>,
    /// When the lookup result was stored, `YYYY-MM-DD HH:MM:SS` UTC. Stamped
    /// by the resolve use case; the store falls back to its own clock when
    /// a record arrives without one.
    pub updated_at: Option<String>,
}

impl DomainRecord {
    pub fn new(name: impl Into<Arc<str>>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_domain_name(&name).map_err(DomainError::InvalidDomainName)?;

        Ok(Self {
            name,
            ip: None,
            hosted_at: None,
            ttl: None,
            whois: None,
            updated_at: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets every resolved field at once.
    pub fn with_details(
        mut self,
        ip: impl Into<Arc<str>>,
        hosted_at: impl Into<Arc<str>>,
        ttl: u32,
        whois: impl Into<Arc<str>>,
    ) -> Self {
        self.ip = Some(ip.into());
        self.hosted_at = Some(hosted_at.into());
        self.ttl = Some(ttl);
        self.whois = Some(whois.into());
        self
    }

    pub fn apply_dns(&mut self, answer: DnsAnswer) {
        self.ip = answer.ip;
        self.hosted_at = answer.name_server;
        self.ttl = answer.ttl;
    }

    pub fn apply_whois(&mut self, text: impl Into<Arc<str>>) {
        let text = text.into();
        self.whois = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
    }

    pub fn has_dns_data(&self) -> bool {
        self.ip.is_some() || self.hosted_at.is_some()
    }

    pub fn has_whois_data(&self) -> bool {
        self.whois.is_some()
    }
}
