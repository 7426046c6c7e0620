//! In-Memory Verifier
//!
//! Process-local stand-in for the identity provider, used by tests and
//! local development. Honors fingerprint binding and expiry the way the
//! real provider does.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use platform::crypto::constant_time_eq;

use crate::domain::entity::session::Session;
use crate::domain::value_object::session_token::SessionToken;
use crate::domain::verifier::SessionVerifier;
use crate::error::{GuardError, GuardResult};

struct StoredSession {
    session: Session,
    fingerprint_hash: Vec<u8>,
}

/// In-memory session verifier
#[derive(Clone, Default)]
pub struct InMemorySessionVerifier {
    sessions: Arc<RwLock<HashMap<String, StoredSession>>>,
}

impl InMemorySessionVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session under a token, bound to a fingerprint
    pub fn insert(&self, token: &str, session: Session, fingerprint_hash: Vec<u8>) {
        let mut sessions = self.sessions.write().expect("verifier lock poisoned");
        sessions.insert(
            token.to_string(),
            StoredSession {
                session,
                fingerprint_hash,
            },
        );
    }

    /// Forget a token (simulates provider-side revocation)
    pub fn remove(&self, token: &str) {
        let mut sessions = self.sessions.write().expect("verifier lock poisoned");
        sessions.remove(token);
    }
}

impl SessionVerifier for InMemorySessionVerifier {
    async fn verify(
        &self,
        token: &SessionToken,
        fingerprint_hash: &[u8],
    ) -> GuardResult<Option<Session>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| GuardError::Internal("verifier lock poisoned".to_string()))?;

        let Some(stored) = sessions.get(token.as_str()) else {
            return Ok(None);
        };

        if !constant_time_eq(&stored.fingerprint_hash, fingerprint_hash) {
            return Ok(None);
        }

        if stored.session.is_expired() {
            return Ok(None);
        }

        Ok(Some(stored.session.clone()))
    }
}
