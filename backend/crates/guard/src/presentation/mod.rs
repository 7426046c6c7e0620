//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::GuardAppState;
pub use middleware::{AuthStatus, CurrentSession, RouteGuardState, check_session, require_session};
pub use router::{guard_router, guard_router_generic};
