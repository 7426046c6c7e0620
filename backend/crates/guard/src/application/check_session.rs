//! Check Session Use Case
//!
//! Verifies a session token against the external identity provider.

use std::sync::Arc;

use crate::domain::entity::session::Session;
use crate::domain::value_object::session_token::SessionToken;
use crate::domain::verifier::SessionVerifier;
use crate::error::{GuardError, GuardResult};

/// Session info output
pub struct SessionInfoOutput {
    pub subject: String,
    pub expires_at_ms: i64,
}

/// Check session use case
///
/// One verifier call per navigation. There is no retry and no backoff;
/// a failed check is simply an unauthenticated navigation.
pub struct CheckSessionUseCase<V>
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    verifier: Arc<V>,
}

impl<V> CheckSessionUseCase<V>
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    pub fn new(verifier: Arc<V>) -> Self {
        Self { verifier }
    }

    /// Check if the session is valid and return session info
    pub async fn execute(
        &self,
        token: &SessionToken,
        fingerprint_hash: &[u8],
    ) -> GuardResult<SessionInfoOutput> {
        let session = self.get_session(token, fingerprint_hash).await?;

        Ok(SessionInfoOutput {
            subject: session.subject.to_string(),
            expires_at_ms: session.expires_at_ms,
        })
    }

    /// Just check if the session is valid (returns bool)
    pub async fn is_valid(&self, token: &SessionToken, fingerprint_hash: &[u8]) -> bool {
        self.get_session(token, fingerprint_hash).await.is_ok()
    }

    /// Perform the single verification and validate the reported expiry
    pub async fn get_session(
        &self,
        token: &SessionToken,
        fingerprint_hash: &[u8],
    ) -> GuardResult<Session> {
        let session = self
            .verifier
            .verify(token, fingerprint_hash)
            .await?
            .ok_or(GuardError::SessionInvalid)?;

        // Providers may report an already-lapsed expiry around revocation
        if session.is_expired() {
            return Err(GuardError::SessionInvalid);
        }

        Ok(session)
    }
}
