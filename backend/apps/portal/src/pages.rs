//! Pages
//!
//! Public pages, the protected member area, and the legacy redirect.

use axum::Extension;
use axum::extract::State;
use axum::response::{Html, Redirect};
use std::sync::Arc;

use billing::BillingContext;
use billing::domain::BillingProvider;
use guard::GuardConfig;
use guard::middleware::{AuthStatus, CurrentSession};
use kernel::error::app_error::AppResult;

use crate::fragments::{PlanBadge, StatusBadge};

/// Shared state for the protected pages
#[derive(Clone)]
pub struct PagesState<P>
where
    P: BillingProvider + Clone + Send + Sync + 'static,
{
    pub billing: Arc<BillingContext<P>>,
}

// ============================================================================
// Public pages
// ============================================================================

/// GET / - public landing page
///
/// Sits behind the non-enforcing session check: signed-in visitors get
/// a link into the member area, everyone else is pointed at sign-in.
pub async fn home(auth: Option<Extension<AuthStatus>>) -> AppResult<Html<String>> {
    let status = StatusBadge::new("beta")?;

    let nav = if auth.is_some_and(|Extension(status)| status.is_authenticated) {
        r#"<a href="/dashboard">Dashboard</a>"#
    } else {
        r#"<a href="/signin">Sign in</a>"#
    };

    Ok(Html(format!(
        "<!doctype html><html><head><title>Portal</title></head><body>\
         <header><h1>Portal</h1>{}</header>\
         <nav>{}</nav>\
         </body></html>",
        status.render(),
        nav
    )))
}

/// GET /signin - the fixed sign-in destination
///
/// Renders the authentication options; the actual sign-in flows run at
/// the identity provider.
pub async fn sign_in(State(config): State<Arc<GuardConfig>>) -> Html<String> {
    let provider = &config.provider;
    let authorize_url = format!(
        "{}/v1/authorize?client_id={}&prompt={}",
        provider.issuer_url.trim_end_matches('/'),
        provider.client_id,
        provider.prompt.code()
    );

    let email_block = if config.email_password_enabled {
        format!(
            "<form class=\"signin-email\" method=\"post\" action=\"{}/v1/signin\">\
             <input type=\"email\" name=\"email\" placeholder=\"Email\">\
             <input type=\"password\" name=\"password\" placeholder=\"Password\">\
             <button type=\"submit\">Sign in</button>\
             </form>",
            provider.issuer_url.trim_end_matches('/')
        )
    } else {
        String::new()
    };

    Html(format!(
        "<!doctype html><html><head><title>Sign in</title></head><body>\
         <h1>Sign in</h1>\
         <a class=\"signin-social\" data-prompt=\"{}\" href=\"{}\">Continue with SSO</a>\
         {}\
         </body></html>",
        provider.prompt.code(),
        authorize_url,
        email_block
    ))
}

/// GET /home - legacy path
///
/// The canonical member entry point is /dashboard; this answer is the
/// same regardless of any query string.
pub async fn legacy_home_redirect() -> Redirect {
    Redirect::permanent("/dashboard")
}

// ============================================================================
// Protected area
// ============================================================================

/// GET /dashboard - protected member dashboard
pub async fn dashboard<P>(
    State(state): State<PagesState<P>>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
) -> AppResult<Html<String>>
where
    P: BillingProvider + Clone + Send + Sync + 'static,
{
    let summary = state.billing.summary().await;

    // The plan badge only appears once the billing context has loaded
    let plan_badge = match &summary {
        Some(summary) => PlanBadge::new(summary.plan.code())?.render(),
        None => String::new(),
    };
    let status_badge = StatusBadge::new("beta")?;

    Ok(Html(format!(
        "<!doctype html><html><head><title>Dashboard</title></head><body>\
         <header><h1>Dashboard</h1>{}{}</header>\
         <p>Signed in as <code>{}</code></p>\
         </body></html>",
        status_badge.render(),
        plan_badge,
        session.subject
    )))
}

/// GET /account - protected account page
pub async fn account(
    Extension(CurrentSession(session)): Extension<CurrentSession>,
) -> Html<String> {
    let remaining_min = session.remaining_ms() / 60_000;

    Html(format!(
        "<!doctype html><html><head><title>Account</title></head><body>\
         <h1>Account</h1>\
         <p>Identity: <code>{}</code></p>\
         <p>Session managed by the identity provider; expires in about {} min.</p>\
         </body></html>",
        session.subject, remaining_min
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use guard::config::IdentityProviderConfig;
    use tower::util::ServiceExt;

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 16384).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn public_app(config: GuardConfig) -> Router {
        Router::new()
            .route("/", get(home))
            .route("/home", get(legacy_home_redirect))
            .route("/signin", get(sign_in))
            .with_state(Arc::new(config))
    }

    #[tokio::test]
    async fn test_legacy_home_redirects_to_dashboard() {
        let response = public_app(GuardConfig::development())
            .oneshot(Request::builder().uri("/home").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/dashboard");
    }

    #[tokio::test]
    async fn test_legacy_home_redirect_ignores_query() {
        let response = public_app(GuardConfig::development())
            .oneshot(
                Request::builder()
                    .uri("/home?ref=newsletter&utm_source=mail")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/dashboard");
    }

    #[tokio::test]
    async fn test_home_renders_status_badge() {
        let response = public_app(GuardConfig::development())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(r#"<span class="badge badge-status">beta</span>"#));
    }

    #[tokio::test]
    async fn test_sign_in_lists_social_provider() {
        let config = GuardConfig {
            provider: IdentityProviderConfig {
                issuer_url: "https://id.example.com".to_string(),
                client_id: "portal-web".to_string(),
                ..Default::default()
            },
            ..GuardConfig::development()
        };

        let response = public_app(config)
            .oneshot(Request::builder().uri("/signin").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = body_string(response).await;
        assert!(body.contains("client_id=portal-web"));
        assert!(body.contains("prompt=select_account"));
        assert!(!body.contains("signin-email"));
    }

    #[tokio::test]
    async fn test_sign_in_shows_email_form_when_enabled() {
        let config = GuardConfig {
            email_password_enabled: true,
            ..GuardConfig::development()
        };

        let response = public_app(config)
            .oneshot(Request::builder().uri("/signin").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = body_string(response).await;
        assert!(body.contains("signin-email"));
    }
}
