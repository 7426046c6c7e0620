//! Session Entity
//!
//! A verified snapshot of a session held by the external identity
//! provider. The provider owns creation, extension, and revocation;
//! this entity only mirrors what a verification reported.

use chrono::{DateTime, Utc};
use kernel::id::SessionId;

use crate::domain::value_object::subject_ref::SubjectRef;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Provider-side session ID
    pub session_id: SessionId,
    /// Opaque public reference to the authenticated identity
    pub subject: SubjectRef,
    /// Session expiration as reported by the provider (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// When this snapshot was taken
    pub verified_at: DateTime<Utc>,
}

impl Session {
    /// Create a snapshot from a provider verification result
    pub fn new(session_id: SessionId, subject: SubjectRef, expires_at_ms: i64) -> Self {
        Self {
            session_id,
            subject,
            expires_at_ms,
            verified_at: Utc::now(),
        }
    }

    /// Check if the reported expiry has passed
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Whether this snapshot still counts as an authenticated session
    pub fn is_authenticated(&self) -> bool {
        !self.is_expired()
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    fn snapshot(expires_at_ms: i64) -> Session {
        Session::new(Id::new(), SubjectRef::new(), expires_at_ms)
    }

    #[test]
    fn test_future_expiry_is_authenticated() {
        let session = snapshot(Utc::now().timestamp_millis() + 60_000);
        assert!(!session.is_expired());
        assert!(session.is_authenticated());
        assert!(session.remaining_ms() > 0);
    }

    #[test]
    fn test_past_expiry_is_not_authenticated() {
        let session = snapshot(Utc::now().timestamp_millis() - 1_000);
        assert!(session.is_expired());
        assert!(!session.is_authenticated());
        assert_eq!(session.remaining_ms(), 0);
    }
}
