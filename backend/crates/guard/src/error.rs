//! Guard Error Types
//!
//! This module provides guard-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Guard-specific result type alias
pub type GuardResult<T> = Result<T, GuardError>;

/// Guard-specific error variants
#[derive(Debug, Error)]
pub enum GuardError {
    /// Session not found, inactive, or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Session token malformed (empty or non-printable)
    #[error("Session token malformed")]
    TokenMalformed,

    /// Missing required header
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// Identity provider transport failure
    #[error("Identity provider request failed: {0}")]
    Provider(#[from] reqwest::Error),

    /// Identity provider returned an unusable response
    #[error("Identity provider response malformed: {0}")]
    ProviderResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GuardError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GuardError::SessionInvalid | GuardError::TokenMalformed => StatusCode::UNAUTHORIZED,
            GuardError::MissingHeader(_) => StatusCode::BAD_REQUEST,
            GuardError::Provider(_) | GuardError::ProviderResponse(_) => StatusCode::BAD_GATEWAY,
            GuardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GuardError::SessionInvalid | GuardError::TokenMalformed => ErrorKind::Unauthorized,
            GuardError::MissingHeader(_) => ErrorKind::BadRequest,
            GuardError::Provider(_) | GuardError::ProviderResponse(_) => ErrorKind::BadGateway,
            GuardError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GuardError::Provider(e) => {
                tracing::error!(error = %e, "Identity provider unreachable");
            }
            GuardError::ProviderResponse(msg) => {
                tracing::error!(message = %msg, "Identity provider response rejected");
            }
            GuardError::Internal(msg) => {
                tracing::error!(message = %msg, "Guard internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Guard error");
            }
        }
    }
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for GuardError {
    fn from(err: AppError) -> Self {
        GuardError::Internal(err.to_string())
    }
}

impl From<platform::client::FingerprintError> for GuardError {
    fn from(err: platform::client::FingerprintError) -> Self {
        match err {
            platform::client::FingerprintError::MissingHeader(header) => {
                GuardError::MissingHeader(header)
            }
        }
    }
}
