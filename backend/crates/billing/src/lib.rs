//! Billing Context Backend Module
//!
//! Fronts the external billing service with a read-only summary context:
//! - `domain/` - Billing summary entity and provider port
//! - `application/` - The fetch-once context and configuration
//! - `infra/` - Billing service HTTP client
//! - `presentation/` - Summary endpoint
//!
//! The billing engine itself (metering, invoicing, plan changes) lives
//! elsewhere; this crate performs at most one summary fetch per process
//! and serves whatever it cached.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BillingConfig;
pub use application::context::BillingContext;
pub use error::{BillingError, BillingResult};
pub use infra::http::HttpBillingProvider;
pub use presentation::router::billing_router;

pub mod models {
    pub use crate::domain::summary::*;
    pub use crate::presentation::dto::*;
}
