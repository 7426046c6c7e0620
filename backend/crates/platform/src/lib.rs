//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie management (session cookie parsing and Set-Cookie building)
//! - Client identification (User-Agent fingerprint, forwarded IP)
//! - Small cryptographic utilities (SHA-256, Base64)

pub mod client;
pub mod cookie;
pub mod crypto;
