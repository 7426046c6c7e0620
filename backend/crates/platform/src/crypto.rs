//! Cryptographic Utilities
//!
//! The small set of primitives this service actually needs: hashing for
//! client fingerprints, Base64 for HTTP Basic credentials and wire
//! fields, and a timing-safe comparison for token lookups.

use base64::{Engine, engine::general_purpose};
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Encode bytes as standard Base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Compare two byte slices without short-circuiting on the first
/// difference. Length mismatch returns false immediately; lengths are
/// not secret here.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
