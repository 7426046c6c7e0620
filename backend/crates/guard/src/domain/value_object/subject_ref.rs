//! SubjectRef Value Object
//!
//! Opaque public reference to an authenticated identity, exactly as the
//! identity provider reports it. Nanoid-shaped (compact, URL-safe) and
//! never an internal database key; this service only carries and
//! displays it.

use std::fmt;
use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};
use nid::Nanoid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectRef(Nanoid);

impl SubjectRef {
    /// Mint a fresh reference (tests and local development)
    #[inline]
    pub fn new() -> Self {
        Self(Nanoid::new())
    }

    /// Parse a provider-reported subject string
    #[inline]
    pub fn parse_str(s: &str) -> AppResult<Self> {
        Nanoid::from_str(s)
            .map(SubjectRef)
            .map_err(|e| AppError::bad_request(format!("Invalid subject reference: {}", e)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for SubjectRef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
