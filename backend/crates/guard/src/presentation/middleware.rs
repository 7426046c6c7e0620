//! Guard Middleware
//!
//! The route guard for the protected area: a single session check per
//! navigation, with a redirect to the sign-in page when it fails.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use platform::client::{ClientFingerprint, extract_client_ip, extract_fingerprint};
use platform::cookie::CookieConfig;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::GuardConfig;
use crate::domain::entity::session::Session;
use crate::domain::value_object::session_token::SessionToken;
use crate::domain::verifier::SessionVerifier;

/// Middleware state
#[derive(Clone)]
pub struct RouteGuardState<V>
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    pub verifier: Arc<V>,
    pub config: Arc<GuardConfig>,
}

/// Verified session stored in request extensions by [`require_session`]
#[derive(Clone)]
pub struct CurrentSession(pub Session);

/// Authentication status stored in request extensions by [`check_session`]
#[derive(Clone, Copy)]
pub struct AuthStatus {
    pub is_authenticated: bool,
}

/// Middleware that gates the protected area
///
/// An absent, invalid, or expired session answers the navigation with a
/// redirect to the fixed sign-in destination; the wrapped handler never
/// runs and no protected content is produced. A valid session passes the
/// request through unchanged, with [`CurrentSession`] attached.
pub async fn require_session<V>(
    State(state): State<RouteGuardState<V>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    let (token, fingerprint) = extract_credentials(&req, &state.config);
    let had_cookie = token.is_some();

    let session = verify_once(&state, token, fingerprint).await;

    let Some(session) = session else {
        return Err(sign_in_redirect(&state.config, had_cookie));
    };

    req.extensions_mut().insert(CurrentSession(session));
    Ok(next.run(req).await)
}

/// Middleware that checks the session but doesn't require it
///
/// Sets [`AuthStatus`] for downstream handlers that render differently
/// for signed-in visitors.
pub async fn check_session<V>(
    State(state): State<RouteGuardState<V>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    let (token, fingerprint) = extract_credentials(&req, &state.config);

    let is_authenticated = verify_once(&state, token, fingerprint).await.is_some();

    req.extensions_mut().insert(AuthStatus { is_authenticated });

    next.run(req).await
}

/// Pull the session token and client fingerprint off the request
fn extract_credentials(
    req: &Request<Body>,
    config: &GuardConfig,
) -> (Option<SessionToken>, Option<ClientFingerprint>) {
    let headers = req.headers();

    let client_ip = req
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|info| info.0.ip());

    let client_ip = extract_client_ip(headers, client_ip);

    let fingerprint = extract_fingerprint(headers, client_ip).ok();

    let token = platform::cookie::extract_cookie(headers, &config.session_cookie_name)
        .and_then(|raw| SessionToken::parse(&raw).ok());

    (token, fingerprint)
}

/// The single verification per navigation; anything that goes wrong is
/// an unauthenticated navigation (fail closed)
async fn verify_once<V>(
    state: &RouteGuardState<V>,
    token: Option<SessionToken>,
    fingerprint: Option<ClientFingerprint>,
) -> Option<Session>
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    let (token, fingerprint) = match (token, fingerprint) {
        (Some(token), Some(fingerprint)) => (token, fingerprint),
        _ => return None,
    };

    let use_case = CheckSessionUseCase::new(state.verifier.clone());

    match use_case.get_session(&token, &fingerprint.hash).await {
        Ok(session) => Some(session),
        Err(e) => {
            if e.kind().is_server_error() {
                tracing::error!(
                    error = %e,
                    client_ip = ?fingerprint.ip,
                    "Session verification failed, treating as unauthenticated"
                );
            } else {
                tracing::debug!(error = %e, client_ip = ?fingerprint.ip, "Session rejected");
            }
            None
        }
    }
}

/// Build the redirect answer for an unauthenticated navigation
///
/// When a (stale) cookie was presented, it is cleared alongside the
/// redirect so the next navigation skips the doomed verification.
fn sign_in_redirect(config: &GuardConfig, had_cookie: bool) -> Response {
    let redirect = Redirect::to(&config.sign_in_path);

    if had_cookie {
        let cookie = CookieConfig::session(config.session_cookie_name.as_str());
        return (
            [(header::SET_COOKIE, cookie.build_delete_cookie())],
            redirect,
        )
            .into_response();
    }

    redirect.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::subject_ref::SubjectRef;
    use crate::infra::memory::InMemorySessionVerifier;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use chrono::Utc;
    use kernel::id::Id;
    use tower::util::ServiceExt;

    const UA: &str = "Mozilla/5.0 Guard Tests";
    const PROTECTED_BODY: &str = "member area";

    fn fingerprint() -> Vec<u8> {
        platform::crypto::sha256(UA.as_bytes()).to_vec()
    }

    fn live_session() -> Session {
        Session::new(
            Id::new(),
            SubjectRef::new(),
            Utc::now().timestamp_millis() + 60_000,
        )
    }

    fn protected_app(verifier: InMemorySessionVerifier) -> Router {
        let state = RouteGuardState {
            verifier: Arc::new(verifier),
            config: Arc::new(GuardConfig::development()),
        };

        Router::new()
            .route("/dashboard", get(|| async { PROTECTED_BODY }))
            .route_layer(axum::middleware::from_fn_with_state(
                state,
                require_session::<InMemorySessionVerifier>,
            ))
    }

    fn request(cookie: Option<&str>, user_agent: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/dashboard");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        if let Some(ua) = user_agent {
            builder = builder.header(header::USER_AGENT, ua);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_no_cookie_redirects_to_sign_in() {
        let app = protected_app(InMemorySessionVerifier::new());

        let response = app.oneshot(request(None, Some(UA))).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/signin");
        assert!(!body_string(response).await.contains(PROTECTED_BODY));
    }

    #[tokio::test]
    async fn test_unknown_token_redirects_and_clears_cookie() {
        let app = protected_app(InMemorySessionVerifier::new());

        let response = app
            .oneshot(request(Some("portal_session=bogus"), Some(UA)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/signin");
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("portal_session=;"));
        assert!(!body_string(response).await.contains(PROTECTED_BODY));
    }

    #[tokio::test]
    async fn test_valid_session_passes_through_unchanged() {
        let verifier = InMemorySessionVerifier::new();
        verifier.insert("tok-1", live_session(), fingerprint());

        let app = protected_app(verifier);
        let response = app
            .oneshot(request(Some("portal_session=tok-1"), Some(UA)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, PROTECTED_BODY);
    }

    #[tokio::test]
    async fn test_fingerprint_mismatch_redirects() {
        let verifier = InMemorySessionVerifier::new();
        verifier.insert("tok-1", live_session(), fingerprint());

        let app = protected_app(verifier);
        let response = app
            .oneshot(request(Some("portal_session=tok-1"), Some("Other Agent")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/signin");
    }

    #[tokio::test]
    async fn test_expired_session_redirects() {
        let verifier = InMemorySessionVerifier::new();
        let expired = Session::new(
            Id::new(),
            SubjectRef::new(),
            Utc::now().timestamp_millis() - 1,
        );
        verifier.insert("tok-1", expired, fingerprint());

        let app = protected_app(verifier);
        let response = app
            .oneshot(request(Some("portal_session=tok-1"), Some(UA)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[derive(Clone)]
    struct FailingVerifier;

    impl SessionVerifier for FailingVerifier {
        async fn verify(
            &self,
            _token: &SessionToken,
            _fingerprint_hash: &[u8],
        ) -> crate::error::GuardResult<Option<Session>> {
            Err(crate::error::GuardError::Internal(
                "provider offline".to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_provider_failure_fails_closed() {
        let state = RouteGuardState {
            verifier: Arc::new(FailingVerifier),
            config: Arc::new(GuardConfig::development()),
        };

        let app = Router::new()
            .route("/dashboard", get(|| async { PROTECTED_BODY }))
            .route_layer(axum::middleware::from_fn_with_state(
                state,
                require_session::<FailingVerifier>,
            ));

        let response = app
            .oneshot(request(Some("portal_session=tok-1"), Some(UA)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/signin");
    }

    #[tokio::test]
    async fn test_missing_user_agent_redirects() {
        let verifier = InMemorySessionVerifier::new();
        verifier.insert("tok-1", live_session(), fingerprint());

        let app = protected_app(verifier);
        let response = app
            .oneshot(request(Some("portal_session=tok-1"), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_check_session_sets_auth_status() {
        let verifier = InMemorySessionVerifier::new();
        verifier.insert("tok-1", live_session(), fingerprint());

        let state = RouteGuardState {
            verifier: Arc::new(verifier),
            config: Arc::new(GuardConfig::development()),
        };

        let app = Router::new()
            .route(
                "/",
                get(|req: Request<Body>| async move {
                    let status = req
                        .extensions()
                        .get::<AuthStatus>()
                        .expect("AuthStatus extension");
                    if status.is_authenticated { "in" } else { "out" }
                }),
            )
            .layer(axum::middleware::from_fn_with_state(
                state,
                check_session::<InMemorySessionVerifier>,
            ));

        let signed_in = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, "portal_session=tok-1")
                    .header(header::USER_AGENT, UA)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_string(signed_in).await, "in");

        let anonymous = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::USER_AGENT, UA)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_string(anonymous).await, "out");
    }
}
