//! Billing Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Billing-specific result type alias
pub type BillingResult<T> = Result<T, BillingError>;

/// Billing-specific error variants
#[derive(Debug, Error)]
pub enum BillingError {
    /// Billing service transport failure
    #[error("Billing service request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Billing service returned an unusable response
    #[error("Billing service response malformed: {0}")]
    UpstreamResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BillingError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BillingError::Upstream(_) | BillingError::UpstreamResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            BillingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BillingError::Upstream(_) | BillingError::UpstreamResponse(_) => ErrorKind::BadGateway,
            BillingError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BillingError::Upstream(e) => {
                tracing::warn!(error = %e, "Billing service unreachable");
            }
            BillingError::UpstreamResponse(msg) => {
                tracing::error!(message = %msg, "Billing service response rejected");
            }
            BillingError::Internal(msg) => {
                tracing::error!(message = %msg, "Billing internal error");
            }
        }
    }
}

impl IntoResponse for BillingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
