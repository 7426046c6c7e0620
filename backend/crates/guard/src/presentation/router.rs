//! Guard Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::GuardConfig;
use crate::domain::verifier::SessionVerifier;
use crate::infra::http::HttpSessionVerifier;
use crate::presentation::handlers::{self, GuardAppState};

/// Create the guard router with the identity-provider-backed verifier
pub fn guard_router(verifier: HttpSessionVerifier, config: GuardConfig) -> Router {
    guard_router_generic(verifier, config)
}

/// Create a generic guard router for any verifier implementation
pub fn guard_router_generic<V>(verifier: V, config: GuardConfig) -> Router
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    let state = GuardAppState {
        verifier: Arc::new(verifier),
        config: Arc::new(config),
    };

    Router::new()
        .route("/status", get(handlers::session_status::<V>))
        .route("/providers", get(handlers::auth_providers::<V>))
        .with_state(state)
}
