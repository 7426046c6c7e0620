//! Application Configuration
//!
//! Environment-driven configuration for the portal server.

use std::env;
use std::time::Duration;

use billing::BillingConfig;
use guard::config::{AccountPrompt, GuardConfig, IdentityProviderConfig};

const DEFAULT_PORT: u16 = 31180;
const DEFAULT_IMAGE_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Portal application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_port: u16,
    pub frontend_origins: Vec<String>,
    pub image_hosts: Vec<String>,
    pub image_max_bytes: usize,
    pub guard: GuardConfig,
    pub billing: BillingConfig,
}

impl AppConfig {
    /// Read configuration from the environment
    ///
    /// Provider client credentials are required; everything else has a
    /// development default.
    pub fn from_env() -> Self {
        let provider = IdentityProviderConfig {
            issuer_url: env::var("IDP_ISSUER_URL")
                .unwrap_or_else(|_| "http://localhost:9811".to_string()),
            client_id: env::var("IDP_CLIENT_ID").expect("IDP_CLIENT_ID must be set in environment"),
            client_secret: env::var("IDP_CLIENT_SECRET")
                .expect("IDP_CLIENT_SECRET must be set in environment"),
            prompt: env::var("IDP_PROMPT")
                .ok()
                .and_then(|code| AccountPrompt::from_code(&code))
                .unwrap_or_default(),
        };

        let guard = GuardConfig {
            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "portal_session".to_string()),
            sign_in_path: env::var("SIGN_IN_PATH").unwrap_or_else(|_| "/signin".to_string()),
            provider,
            email_password_enabled: env_flag("AUTH_EMAIL_PASSWORD_ENABLED"),
            verify_timeout: Duration::from_secs(5),
        };

        let billing = BillingConfig {
            api_url: env::var("BILLING_API_URL")
                .unwrap_or_else(|_| "http://localhost:9812".to_string()),
            api_token: env::var("BILLING_API_TOKEN").unwrap_or_default(),
            ..Default::default()
        };

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

        // Hosts images may be proxied from; empty means deny all
        let image_hosts = env::var("IMAGE_ALLOWED_HOSTS").unwrap_or_default();

        Self {
            listen_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            frontend_origins: parse_csv(&frontend_origins),
            image_hosts: parse_csv(&image_hosts),
            image_max_bytes: DEFAULT_IMAGE_MAX_BYTES,
            guard,
            billing,
        }
    }
}

/// Split a comma-separated environment value into trimmed entries
fn parse_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a boolean flag ("1", "true", "yes", case-insensitive)
fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
