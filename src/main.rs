use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use dip_mcp_server::config::load_config;
use dip_mcp_server::core::error::AppError;
use dip_mcp_server::features::dip::DipClient;
use dip_mcp_server::features::mcp::{McpService, handle_healthcheck, handle_mcp};
use dip_mcp_server::server::{AppState, require_api_key};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = Arc::new(load_config()?);
    let dip_client = Arc::new(DipClient::new(config.clone())?);
    let mcp_service = Arc::new(McpService::new(dip_client)?);
    let app_state = AppState::new(mcp_service, config.api_key.clone());

    let app = Router::new()
        .route("/api/health", get(handle_healthcheck))
        .route(
            "/api/mcp",
            post(handle_mcp).layer(middleware::from_fn_with_state(
                app_state.clone(),
                require_api_key,
            )),
        )
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_target(false)
        .init();
}
