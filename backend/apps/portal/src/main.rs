//! Portal Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors use
//! `kernel::error::AppError`.

mod app;
mod config;
mod fragments;
mod images;
mod pages;

use billing::{BillingContext, HttpBillingProvider};
use guard::HttpSessionVerifier;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::images::{ImageAllowlist, ImageProxyState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal=info,guard=info,billing=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_config = AppConfig::from_env();

    // Session verifier backed by the identity provider
    let verifier =
        HttpSessionVerifier::new(&app_config.guard.provider, app_config.guard.verify_timeout)
            .map_err(|e| anyhow::anyhow!("Failed to build session verifier: {e}"))?;

    // Billing context: one fire-and-forget summary fetch, nothing waits on it
    let billing_provider = HttpBillingProvider::new(&app_config.billing)
        .map_err(|e| anyhow::anyhow!("Failed to build billing provider: {e}"))?;
    let billing_context = BillingContext::new(Arc::new(billing_provider));
    billing_context.clone().spawn_load();

    // Image proxy state with the static host allowlist
    let allowlist = ImageAllowlist::new(app_config.image_hosts.clone());
    tracing::info!(hosts = allowlist.len(), "Image host allowlist loaded");

    let image_state = ImageProxyState::new(allowlist, app_config.image_max_bytes)
        .map_err(|e| anyhow::anyhow!("Failed to build image proxy client: {e}"))?;

    // Build router
    let app = app::build_router(
        verifier,
        app_config.guard.clone(),
        billing_context,
        image_state,
        &app_config.frontend_origins,
    );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], app_config.listen_port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
