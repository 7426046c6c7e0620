//! SessionToken Value Object
//!
//! Opaque bearer of the session cookie value. The identity provider
//! issues and interprets tokens; this service only carries them.
//! Debug output is redacted so tokens never reach logs.

use std::fmt;

use crate::error::{GuardError, GuardResult};

#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw cookie value
    ///
    /// Rejects empty or whitespace-only values and control characters;
    /// everything else is the provider's business.
    pub fn parse(raw: &str) -> GuardResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GuardError::TokenMalformed);
        }
        if trimmed.chars().any(|c| c.is_control()) {
            return Err(GuardError::TokenMalformed);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_opaque_value() {
        let token = SessionToken::parse("c29tZS1vcGFxdWUtdG9rZW4").unwrap();
        assert_eq!(token.as_str(), "c29tZS1vcGFxdWUtdG9rZW4");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let token = SessionToken::parse("  tok  ").unwrap();
        assert_eq!(token.as_str(), "tok");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(SessionToken::parse("").is_err());
        assert!(SessionToken::parse("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_control_characters() {
        assert!(SessionToken::parse("tok\r\nSet-Cookie: x").is_err());
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = SessionToken::parse("super-secret").unwrap();
        let debug = format!("{:?}", token);
        assert!(!debug.contains("super-secret"));
    }
}
