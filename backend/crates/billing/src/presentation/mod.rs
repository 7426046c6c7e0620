//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::BillingAppState;
pub use router::{billing_router, billing_router_generic};
