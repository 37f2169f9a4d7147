use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("DNS lookup failed: {0}")]
    DnsLookupFailed(String),

    #[error("WHOIS lookup failed: {0}")]
    WhoisLookupFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout")]
    QueryTimeout,
}

impl DomainError {
    /// True for errors caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::InvalidDomainName(_))
    }
}
