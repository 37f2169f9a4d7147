use async_trait::async_trait;
use domain_insight_application::ports::DnsLookup;
use domain_insight_domain::config::DnsConfig;
use domain_insight_domain::{DnsAnswer, DomainError, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::forwarding::{AnswerSelector, DnsResponse, MessageBuilder, ResponseParser};
use super::transport::{tcp::TcpTransport, udp::UdpTransport, Transport};

/// `DnsLookup` backed by a single upstream recursive resolver.
///
/// One query is sent per configured record type, in order, over UDP. A
/// truncated UDP answer is re-asked over TCP. The triple stored on the record
/// is chosen by [`AnswerSelector`].
pub struct UpstreamDnsLookup {
    server: SocketAddr,
    udp: Transport,
    tcp: Transport,
    timeout: Duration,
    query_types: Vec<RecordType>,
}

impl UpstreamDnsLookup {
    pub fn new(server: SocketAddr, timeout: Duration, query_types: Vec<RecordType>) -> Self {
        Self {
            server,
            udp: Transport::Udp(UdpTransport::new(server)),
            tcp: Transport::Tcp(TcpTransport::new(server)),
            timeout,
            query_types,
        }
    }

    pub fn from_config(cfg: &DnsConfig) -> Result<Self, DomainError> {
        let server: SocketAddr = cfg.server.parse().map_err(|e| {
            DomainError::DnsLookupFailed(format!("Invalid DNS server '{}': {}", cfg.server, e))
        })?;

        Ok(Self::new(
            server,
            Duration::from_millis(cfg.timeout_ms),
            cfg.query_types.clone(),
        ))
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }

    async fn exchange(
        &self,
        name: &str,
        record_type: &RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let (id, bytes) = MessageBuilder::build_query_with_id(name, record_type)?;

        let response = self.send_and_parse(&self.udp, id, &bytes).await?;
        if !response.truncated {
            return Ok(response);
        }

        debug!(domain = %name, record_type = %record_type, "UDP response truncated, retrying over TCP");
        self.send_and_parse(&self.tcp, id, &bytes).await
    }

    async fn send_and_parse(
        &self,
        transport: &Transport,
        id: u16,
        bytes: &[u8],
    ) -> Result<DnsResponse, DomainError> {
        let raw = transport.send(bytes, self.timeout).await?;
        let response = ResponseParser::parse(&raw.bytes)?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} response ID {} does not match query ID {}",
                transport.protocol_name(),
                response.id,
                id
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl DnsLookup for UpstreamDnsLookup {
    #[instrument(skip(self), fields(server = %self.server))]
    async fn query(&self, name: &str) -> Result<Option<DnsAnswer>, DomainError> {
        let mut usable = Vec::with_capacity(self.query_types.len());
        let mut last_status = None;

        for record_type in &self.query_types {
            let response = self.exchange(name, record_type).await?;
            let status = ResponseParser::rcode_to_status(response.rcode);

            if response.is_nxdomain() {
                debug!(domain = %name, "Upstream answered NXDOMAIN");
                return Ok(None);
            }

            if response.is_server_error() {
                warn!(domain = %name, record_type = %record_type, status, "Upstream refused query type");
                last_status = Some(status);
                continue;
            }

            usable.push(response.message);
        }

        if usable.is_empty() {
            if let Some(status) = last_status {
                return Err(DomainError::DnsLookupFailed(format!(
                    "Upstream {} answered {} for {}",
                    self.server, status, name
                )));
            }
        }

        Ok(AnswerSelector::select(&usable))
    }
}
