//! # Domain Insight
//!
//! HTTP service answering DNS and WHOIS facts about a domain, backed by a
//! SQLite record store.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use domain_insight_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "domain-insight")]
#[command(version)]
#[command(about = "Domain lookup service with DNS and WHOIS caching")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// SQLite database path
    #[arg(long)]
    database: Option<String>,

    /// Upstream DNS resolver (ip:port)
    #[arg(long)]
    dns_server: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        web_port: cli.web_port,
        database_path: cli.database,
        dns_server: cli.dns_server,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Domain Insight starting");

    let pool = bootstrap::init_database(&config.database.url(), &config.database).await?;
    let repositories = di::Repositories::new(pool);
    let lookups = di::LookupServices::new(&config)?;
    let use_cases = di::UseCases::new(&repositories, &lookups);

    server::start_web_server(&config, use_cases).await?;

    repositories.close().await;
    info!("Domain Insight stopped");

    Ok(())
}
