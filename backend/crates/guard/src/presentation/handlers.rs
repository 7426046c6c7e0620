//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use std::sync::Arc;

use platform::client::extract_fingerprint;

use crate::application::CheckSessionUseCase;
use crate::application::config::GuardConfig;
use crate::domain::value_object::session_token::SessionToken;
use crate::domain::verifier::SessionVerifier;
use crate::error::GuardResult;

use crate::presentation::dto::{ProvidersResponse, SessionStatusResponse, SocialProviderInfo};

/// Shared state for guard handlers
#[derive(Clone)]
pub struct GuardAppState<V>
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    pub verifier: Arc<V>,
    pub config: Arc<GuardConfig>,
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
///
/// Reports whether the caller currently holds a valid session. Unlike the
/// route guard, an unauthenticated caller gets a 200 with
/// `authenticated: false`; this endpoint exists so frontends can ask
/// without triggering a redirect.
pub async fn session_status<V>(
    State(state): State<GuardAppState<V>>,
    headers: HeaderMap,
) -> GuardResult<Json<SessionStatusResponse>>
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    let fingerprint = extract_fingerprint(&headers, None)?;

    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name)
        .and_then(|raw| SessionToken::parse(&raw).ok());

    let use_case = CheckSessionUseCase::new(state.verifier.clone());

    let session_info = if let Some(token) = token {
        use_case.execute(&token, &fingerprint.hash).await.ok()
    } else {
        None
    };

    match session_info {
        Some(info) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            subject: Some(info.subject),
            expires_at_ms: Some(info.expires_at_ms),
        })),
        None => Ok(Json(SessionStatusResponse {
            authenticated: false,
            subject: None,
            expires_at_ms: None,
        })),
    }
}

// ============================================================================
// Provider Directory
// ============================================================================

/// GET /api/auth/providers
///
/// Lists the authentication options the frontend may offer: the social
/// login client (id + prompt behavior) and the email/password flag.
pub async fn auth_providers<V>(
    State(state): State<GuardAppState<V>>,
) -> Json<ProvidersResponse>
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    Json(ProvidersResponse {
        social: SocialProviderInfo {
            client_id: state.config.provider.client_id.clone(),
            prompt: state.config.provider.prompt.code().to_string(),
        },
        email_password_enabled: state.config.email_password_enabled,
    })
}
