//! API DTOs (Data Transfer Objects)

use serde::Serialize;

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub subject: Option<String>,
    pub expires_at_ms: Option<i64>,
}

// ============================================================================
// Provider Directory
// ============================================================================

/// Social login provider info (public fields only; the secret stays server-side)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProviderInfo {
    pub client_id: String,
    /// Requested account-selection prompt behavior
    pub prompt: String,
}

/// Authentication provider directory response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvidersResponse {
    pub social: SocialProviderInfo,
    pub email_password_enabled: bool,
}
