//! Image Proxy
//!
//! Fetches remote images on behalf of the frontend, restricted to a
//! static allowlist of external hostnames.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use url::Url;

use kernel::error::app_error::{AppError, AppResult, OptionExt, ResultExt};
use kernel::error::kind::ErrorKind;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Static allowlist of permitted image hosts
///
/// Matching is exact and case-insensitive; subdomains are not implied.
#[derive(Debug, Clone)]
pub struct ImageAllowlist {
    hosts: Vec<String>,
}

impl ImageAllowlist {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hosts = hosts
            .into_iter()
            .map(|h| h.into().trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
        Self { hosts }
    }

    /// Whether the given hostname is on the allowlist
    pub fn allows_host(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        self.hosts.iter().any(|allowed| *allowed == host)
    }

    /// Whether the URL points at an allowed host
    pub fn allows(&self, url: &Url) -> bool {
        url.host_str().is_some_and(|host| self.allows_host(host))
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// Shared state for the image proxy
#[derive(Clone)]
pub struct ImageProxyState {
    pub allowlist: Arc<ImageAllowlist>,
    pub client: reqwest::Client,
    pub max_bytes: usize,
}

impl ImageProxyState {
    pub fn new(allowlist: ImageAllowlist, max_bytes: usize) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            allowlist: Arc::new(allowlist),
            client,
            max_bytes,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub src: String,
}

/// GET /img?src=<url>
///
/// A host missing from the allowlist is a 403; upstream failures map to
/// gateway-class errors via the shared error conversions.
pub async fn fetch_image(
    State(state): State<ImageProxyState>,
    Query(query): Query<ImageQuery>,
) -> AppResult<Response> {
    let url = Url::parse(&query.src).map_app_err(ErrorKind::BadRequest, "Invalid image URL")?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::bad_request("Image URL must be http or https"));
    }

    let host = url
        .host_str()
        .ok_or_app_err(ErrorKind::BadRequest, "Image URL has no host")?;

    if !state.allowlist.allows_host(host) {
        tracing::debug!(host = %host, "Image host rejected");
        return Err(AppError::forbidden(format!(
            "Image host not allowed: {host}"
        )));
    }

    let response = state
        .client
        .get(url)
        .send()
        .await?
        .error_for_status()?;

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| header::HeaderValue::from_static("application/octet-stream"));

    let bytes = response.bytes().await?;

    if bytes.len() > state.max_bytes {
        return Err(AppError::unprocessable("Image exceeds size limit"));
    }

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type)],
        bytes,
    )
        .into_response())
}
