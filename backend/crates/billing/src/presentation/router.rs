//! Billing Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::context::BillingContext;
use crate::domain::provider::BillingProvider;
use crate::infra::http::HttpBillingProvider;
use crate::presentation::handlers::{self, BillingAppState};

/// Create the billing router around an already-initialized context
///
/// The context is built (and its one fetch spawned) by the application
/// entry point, so the router only reads.
pub fn billing_router(context: Arc<BillingContext<HttpBillingProvider>>) -> Router {
    billing_router_generic(context)
}

/// Create a generic billing router for any provider implementation
pub fn billing_router_generic<P>(context: Arc<BillingContext<P>>) -> Router
where
    P: BillingProvider + Clone + Send + Sync + 'static,
{
    let state = BillingAppState { context };

    Router::new()
        .route("/summary", get(handlers::billing_summary::<P>))
        .with_state(state)
}
