//! Infrastructure Layer
//!
//! Billing service HTTP client.

pub mod http;

pub use http::HttpBillingProvider;
