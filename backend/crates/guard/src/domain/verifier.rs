//! Verifier Port
//!
//! Interface to the external session-check capability. The identity
//! provider is the only authority on session validity; implementations
//! live in the infrastructure layer.

use crate::domain::entity::session::Session;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::GuardResult;

/// Session verifier trait
#[trait_variant::make(SessionVerifier: Send)]
pub trait LocalSessionVerifier {
    /// Verify a session token against the provider
    ///
    /// `Ok(None)` means the provider does not recognize the token (or the
    /// fingerprint does not match); `Err` is reserved for transport and
    /// protocol failures. Callers perform exactly one verification per
    /// navigation.
    async fn verify(
        &self,
        token: &SessionToken,
        fingerprint_hash: &[u8],
    ) -> GuardResult<Option<Session>>;
}
