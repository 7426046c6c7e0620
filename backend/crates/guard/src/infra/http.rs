//! Identity Provider Verifier
//!
//! Delegates session checks to the external identity provider via an
//! introspection call authenticated with the configured client
//! credentials.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kernel::id::SessionId;
use platform::crypto::to_base64;

use crate::application::config::IdentityProviderConfig;
use crate::domain::entity::session::Session;
use crate::domain::value_object::{session_token::SessionToken, subject_ref::SubjectRef};
use crate::domain::verifier::SessionVerifier;
use crate::error::{GuardError, GuardResult};

/// HTTP-backed session verifier
#[derive(Clone)]
pub struct HttpSessionVerifier {
    client: reqwest::Client,
    introspect_url: String,
    authorization: String,
}

impl HttpSessionVerifier {
    /// Build a verifier for the given provider
    ///
    /// The timeout bounds the single verification call; the middleware
    /// never retries, so a slow provider costs at most one timeout.
    pub fn new(provider: &IdentityProviderConfig, timeout: Duration) -> GuardResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GuardError::Internal(format!("Failed to build HTTP client: {e}")))?;

        let credentials = format!("{}:{}", provider.client_id, provider.client_secret);

        Ok(Self {
            client,
            introspect_url: format!(
                "{}/v1/sessions/introspect",
                provider.issuer_url.trim_end_matches('/')
            ),
            authorization: format!("Basic {}", to_base64(credentials.as_bytes())),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectRequest<'a> {
    token: &'a str,
    fingerprint: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectResponse {
    active: bool,
    subject: Option<String>,
    session_id: Option<Uuid>,
    expires_at_ms: Option<i64>,
}

impl SessionVerifier for HttpSessionVerifier {
    async fn verify(
        &self,
        token: &SessionToken,
        fingerprint_hash: &[u8],
    ) -> GuardResult<Option<Session>> {
        let response = self
            .client
            .post(&self.introspect_url)
            .header(http::header::AUTHORIZATION, &self.authorization)
            .json(&IntrospectRequest {
                token: token.as_str(),
                fingerprint: to_base64(fingerprint_hash),
            })
            .send()
            .await?
            .error_for_status()?;

        let body: IntrospectResponse = response.json().await?;

        if !body.active {
            return Ok(None);
        }

        let subject = body
            .subject
            .as_deref()
            .ok_or_else(|| GuardError::ProviderResponse("active session without subject".into()))
            .and_then(|s| {
                SubjectRef::parse_str(s)
                    .map_err(|e| GuardError::ProviderResponse(e.to_string()))
            })?;

        let session_id = body
            .session_id
            .map(SessionId::from_uuid)
            .ok_or_else(|| GuardError::ProviderResponse("active session without id".into()))?;

        let expires_at_ms = body.expires_at_ms.ok_or_else(|| {
            GuardError::ProviderResponse("active session without expiry".into())
        })?;

        Ok(Some(Session::new(session_id, subject, expires_at_ms)))
    }
}
