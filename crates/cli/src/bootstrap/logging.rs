use domain_insight_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(true)
        .init();

    info!(
        level = %config.logging.level,
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        dns_server = %config.dns.server,
        whois_server = %config.whois.server,
        "Configuration loaded"
    );
}
