//! Guard (Route Guard) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, value objects, verifier port
//! - `application/` - Use cases and configuration
//! - `infra/` - Identity-provider-backed and in-memory verifiers
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Redirect-on-unauthenticated gating of the protected area
//! - Single session verification per navigation (no retries)
//! - Session status and provider-directory endpoints
//!
//! ## Trust Model
//! - Sessions are issued, extended, and revoked by the external identity
//!   provider; this crate only verifies and mirrors them
//! - Verifications carry the client fingerprint so hijacked tokens fail
//! - Provider transport failures are treated as unauthenticated (fail closed)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GuardConfig;
pub use error::{GuardError, GuardResult};
pub use infra::http::HttpSessionVerifier;
pub use presentation::router::guard_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod verifier {
    pub use crate::domain::verifier::SessionVerifier;
    pub use crate::infra::http::HttpSessionVerifier;
    pub use crate::infra::memory::InMemorySessionVerifier;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
