use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use chrono::Utc;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sftpwatch_common::{Config, Instance};

mod registry;
mod rest;

use registry::InstanceRegistry;

pub struct AppState {
    pub registry: InstanceRegistry,
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Management API
        .route("/api/test", get(rest::api_test))
        .route("/api/instances", get(rest::api_instances))
        .with_state(state)
        // Status responses must never be cached by intermediaries
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

/// Where the management interface binds, or None when the http management
/// port is not set (the interface stays down).
fn management_bind(config: &Config) -> Option<(String, u16)> {
    let port = config.web_port?;
    Some((format!("{}:{}", config.web_host, port), port))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sftpwatch=info".parse()?))
        .init();

    let config = Config::server_from_env();

    let Some((addr, port)) = management_bind(&config) else {
        info!("Management interface NOT starting as http management port not set");
        return Ok(());
    };

    let registry = InstanceRegistry::new();
    registry
        .register(Instance {
            instance_name: config.instance_name.clone(),
            hostname: config.hostname.clone(),
            http_management_port: Some(port),
            last_poll_date: Some(Utc::now()),
        })
        .await;

    let state = Arc::new(AppState { registry });
    let app = app(state);

    info!("Starting http management interface on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
