//! Application Configuration

use std::fmt;
use std::time::Duration;

/// Billing application configuration
#[derive(Clone)]
pub struct BillingConfig {
    /// Billing service base URL
    pub api_url: String,
    /// Service token for the summary endpoint
    pub api_token: String,
    /// Timeout for the single summary fetch
    pub fetch_timeout: Duration,
}

impl fmt::Debug for BillingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BillingConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"***")
            .field("fetch_timeout", &self.fetch_timeout)
            .finish()
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:9812".to_string(),
            api_token: String::new(),
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

impl BillingConfig {
    /// Create config for development (local billing stub, short timeout)
    pub fn development() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(3),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let config = BillingConfig {
            api_token: "svc-token".to_string(),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("svc-token"));
    }
}
