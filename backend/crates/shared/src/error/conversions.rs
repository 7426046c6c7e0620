//! Error conversions - From implementations for common error types
//!
//! Lets call sites use `?` on std / serde_json / reqwest errors inside
//! functions that return [`AppResult`](super::app_error::AppResult).

use super::app_error::AppError;
use super::kind::ErrorKind;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Forbidden,
            std::io::ErrorKind::TimedOut => ErrorKind::RequestTimeout,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// Every upstream dependency of this service (identity provider, billing
// API, remote image hosts) speaks HTTP, so reqwest transport errors are
// classified here once instead of per call site.
#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let app_err = if err.is_timeout() {
            AppError::request_timeout("Upstream request timed out")
        } else if err.is_connect() {
            AppError::service_unavailable("Upstream service unreachable")
        } else if let Some(status) = err.status() {
            if status.is_server_error() {
                AppError::bad_gateway("Upstream service failed")
            } else {
                AppError::bad_gateway(format!("Upstream rejected request ({})", status))
            }
        } else if err.is_decode() {
            AppError::bad_gateway("Upstream response malformed")
        } else {
            AppError::internal("Upstream request failed")
        };
        app_err.with_source(err)
    }
}

/// RFC 7807 Problem Details レスポンス
///
/// ドメインクレートのエラーは最終的にこの形で HTTP 境界を出ます。
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
        });

        (status, Json(body)).into_response()
    }
}
