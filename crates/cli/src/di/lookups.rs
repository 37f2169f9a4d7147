use domain_insight_domain::Config;
use domain_insight_infrastructure::dns::UpstreamDnsLookup;
use domain_insight_infrastructure::whois::TcpWhoisLookup;
use std::sync::Arc;
use tracing::info;

pub struct LookupServices {
    pub dns: Arc<UpstreamDnsLookup>,
    pub whois: Arc<TcpWhoisLookup>,
}

impl LookupServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let dns = UpstreamDnsLookup::from_config(&config.dns)?;
        let whois = TcpWhoisLookup::from_config(&config.whois);

        info!(
            dns_server = %dns.server(),
            query_types = ?config.dns.query_types,
            whois_server = %config.whois.server,
            follow_referral = config.whois.follow_referral,
            "Lookup services ready"
        );

        Ok(Self {
            dns: Arc::new(dns),
            whois: Arc::new(whois),
        })
    }
}
