//! Client identification utilities
//!
//! Derives a stable per-client fingerprint from request headers. The
//! identity provider binds sessions to the client that created them, so
//! every verification call forwards this hash; a stolen token presented
//! from a different client fails the check.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

use crate::crypto::sha256;

/// Client fingerprint derived from request headers
#[derive(Debug, Clone)]
pub struct ClientFingerprint {
    /// SHA-256 hash of the User-Agent header
    pub hash: [u8; 32],
    /// Originating client IP, when determinable
    pub ip: Option<IpAddr>,
}

/// Error when extracting client fingerprint
#[derive(Debug, Clone, thiserror::Error)]
pub enum FingerprintError {
    #[error("Missing required header: {0}")]
    MissingHeader(String),
}

/// Extract the client fingerprint from request headers
///
/// A request without a User-Agent cannot be fingerprinted and therefore
/// cannot carry a bound session.
pub fn extract_fingerprint(
    headers: &HeaderMap,
    client_ip: Option<IpAddr>,
) -> Result<ClientFingerprint, FingerprintError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| FingerprintError::MissingHeader("User-Agent".to_string()))?;

    Ok(ClientFingerprint {
        hash: sha256(user_agent.as_bytes()),
        ip: client_ip,
    })
}

/// Resolve the originating client IP
///
/// Behind a reverse proxy the first X-Forwarded-For entry is the
/// client; without the header (or with an unparsable first entry) the
/// direct connection IP stands.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|entry| entry.trim().parse::<IpAddr>().ok())
        .or(direct_ip)
}
