use axum::{http::HeaderValue, Router};
use domain_insight_api::{create_api_routes, AppState};
use domain_insight_domain::Config;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::di::UseCases;

pub async fn start_web_server(config: &Config, use_cases: UseCases) -> anyhow::Result<()> {
    let addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    let state = AppState {
        resolve_domain: use_cases.resolve_domain,
    };

    let app = create_app(state, &config.server.cors_allowed_origins);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(bind_address = %addr, "Web server listening");
    info!("API: http://{}/api/domain/{{name}}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn create_app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any).allow_methods(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(allowed).allow_methods(Any)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
