//! Application Configuration
//!
//! Configuration for the Guard application layer.

use std::fmt;
use std::time::Duration;

use derive_more::Display;

/// Account-selection prompt requested from the social login provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum AccountPrompt {
    /// Always show the account chooser
    #[default]
    #[display("select_account")]
    SelectAccount,
    /// Force a fresh consent screen
    #[display("consent")]
    Consent,
    /// No prompt; fail if interaction would be needed
    #[display("none")]
    None,
}

impl AccountPrompt {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SelectAccount => "select_account",
            Self::Consent => "consent",
            Self::None => "none",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "select_account" => Some(Self::SelectAccount),
            "consent" => Some(Self::Consent),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Social login (identity provider) client configuration
///
/// The client secret is held for the Basic-auth introspection call and
/// must never serialize or appear in logs.
#[derive(Clone)]
pub struct IdentityProviderConfig {
    /// Provider base URL (introspection lives under it)
    pub issuer_url: String,
    /// OAuth client identifier
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Requested account-selection behavior
    pub prompt: AccountPrompt,
}

impl fmt::Debug for IdentityProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityProviderConfig")
            .field("issuer_url", &self.issuer_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("prompt", &self.prompt)
            .finish()
    }
}

impl Default for IdentityProviderConfig {
    fn default() -> Self {
        Self {
            issuer_url: "http://localhost:9811".to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            prompt: AccountPrompt::default(),
        }
    }
}

/// Guard application configuration
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Fixed sign-in destination for unauthenticated navigations
    pub sign_in_path: String,
    /// Social login provider settings
    pub provider: IdentityProviderConfig,
    /// Whether email/password authentication is offered at all
    pub email_password_enabled: bool,
    /// Timeout for a single verification call
    pub verify_timeout: Duration,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "portal_session".to_string(),
            sign_in_path: "/signin".to_string(),
            provider: IdentityProviderConfig::default(),
            email_password_enabled: false,
            verify_timeout: Duration::from_secs(5),
        }
    }
}

impl GuardConfig {
    /// Create config for development (local provider, short timeout)
    pub fn development() -> Self {
        Self {
            verify_timeout: Duration::from_secs(2),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt_is_select_account() {
        let config = IdentityProviderConfig::default();
        assert_eq!(config.prompt, AccountPrompt::SelectAccount);
        assert_eq!(config.prompt.code(), "select_account");
    }

    #[test]
    fn test_prompt_codes_roundtrip() {
        for prompt in [
            AccountPrompt::SelectAccount,
            AccountPrompt::Consent,
            AccountPrompt::None,
        ] {
            assert_eq!(AccountPrompt::from_code(prompt.code()), Some(prompt));
        }
        assert_eq!(AccountPrompt::from_code("login"), None);
    }

    #[test]
    fn test_prompt_display_matches_code() {
        assert_eq!(AccountPrompt::SelectAccount.to_string(), "select_account");
        assert_eq!(AccountPrompt::Consent.to_string(), "consent");
    }

    #[test]
    fn test_debug_redacts_client_secret() {
        let config = IdentityProviderConfig {
            client_secret: "very-secret".to_string(),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_default_sign_in_path() {
        let config = GuardConfig::default();
        assert_eq!(config.sign_in_path, "/signin");
        assert!(!config.email_password_enabled);
    }
}
