//! WHOIS over TCP port 43 (RFC 3912).
//!
//! The query is the domain followed by CRLF; the server writes its answer and
//! closes the connection. The configured root server (IANA by default) is
//! asked first; when its answer names the registry's server in a `refer:` or
//! `whois:` line, that server is asked once and its answer is the result.

use async_trait::async_trait;
use domain_insight_application::ports::WhoisLookup;
use domain_insight_domain::config::WhoisConfig;
use domain_insight_domain::DomainError;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, instrument};

/// Upper bound on a single WHOIS answer.
const MAX_RESPONSE_SIZE: u64 = 1024 * 1024;

const REFERRAL_KEYS: [&str; 2] = ["refer:", "whois:"];

pub struct TcpWhoisLookup {
    server: String,
    port: u16,
    timeout: Duration,
    follow_referral: bool,
}

impl TcpWhoisLookup {
    pub fn new(server: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            server: server.into(),
            port,
            timeout,
            follow_referral: true,
        }
    }

    pub fn with_follow_referral(mut self, follow: bool) -> Self {
        self.follow_referral = follow;
        self
    }

    pub fn from_config(cfg: &WhoisConfig) -> Self {
        Self::new(
            cfg.server.clone(),
            cfg.port,
            Duration::from_millis(cfg.timeout_ms),
        )
        .with_follow_referral(cfg.follow_referral)
    }

    /// Extracts the server named by the first `refer:` / `whois:` line.
    pub fn referral_server(response: &str) -> Option<String> {
        response.lines().find_map(|line| {
            let trimmed = line.trim();
            let lower = trimmed.to_ascii_lowercase();

            REFERRAL_KEYS.iter().find_map(|key| {
                if lower.starts_with(key) {
                    let value = trimmed[key.len()..].trim();
                    (!value.is_empty()).then(|| value.to_string())
                } else {
                    None
                }
            })
        })
    }

    async fn ask(&self, server: &str, name: &str) -> Result<String, DomainError> {
        tokio::time::timeout(self.timeout, self.exchange(server, name))
            .await
            .map_err(|_| {
                DomainError::WhoisLookupFailed(format!("Timeout waiting for {}", server))
            })?
    }

    async fn exchange(&self, server: &str, name: &str) -> Result<String, DomainError> {
        let mut stream = TcpStream::connect((server, self.port)).await.map_err(|e| {
            DomainError::WhoisLookupFailed(format!(
                "Failed to connect to {}:{}: {}",
                server, self.port, e
            ))
        })?;

        stream
            .write_all(format!("{}\r\n", name).as_bytes())
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to send WHOIS query: {}", e)))?;

        let mut buf = Vec::new();
        stream
            .take(MAX_RESPONSE_SIZE)
            .read_to_end(&mut buf)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to read WHOIS answer: {}", e)))?;

        debug!(server, bytes = buf.len(), "WHOIS answer received");

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[async_trait]
impl WhoisLookup for TcpWhoisLookup {
    #[instrument(skip(self), fields(root = %self.server))]
    async fn query(&self, name: &str) -> Result<Option<String>, DomainError> {
        let root_answer = self.ask(&self.server, name).await?;

        let answer = match Self::referral_server(&root_answer) {
            Some(referral)
                if self.follow_referral && !referral.eq_ignore_ascii_case(&self.server) =>
            {
                debug!(referral = %referral, "Following WHOIS referral");
                self.ask(&referral, name).await?
            }
            _ => root_answer,
        };

        let trimmed = answer.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }
}
