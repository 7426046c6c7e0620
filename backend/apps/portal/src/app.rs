//! Router Assembly
//!
//! Wires the public pages, the guarded member area, the API routers, and
//! the HTTP layers into one application router.

use axum::http::{Method, header};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use billing::BillingContext;
use billing::domain::BillingProvider;
use billing::presentation::billing_router_generic;
use guard::GuardConfig;
use guard::domain::SessionVerifier;
use guard::middleware::{RouteGuardState, check_session, require_session};
use guard::router::guard_router_generic;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::images::{ImageProxyState, fetch_image};
use crate::pages::{self, PagesState};

/// Build the application router
pub fn build_router<V, P>(
    verifier: V,
    guard_config: GuardConfig,
    billing_context: Arc<BillingContext<P>>,
    image_state: ImageProxyState,
    frontend_origins: &[String],
) -> Router
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
    P: BillingProvider + Clone + Send + Sync + 'static,
{
    let guard_state = RouteGuardState {
        verifier: Arc::new(verifier.clone()),
        config: Arc::new(guard_config.clone()),
    };

    // Public pages; the landing page gets the non-enforcing session check
    let public = Router::new()
        .route("/", get(pages::home))
        .route_layer(middleware::from_fn_with_state(
            guard_state.clone(),
            check_session::<V>,
        ))
        .route("/home", get(pages::legacy_home_redirect))
        .route("/signin", get(pages::sign_in))
        .with_state(Arc::new(guard_config.clone()));

    // Member area; every route here sits behind the route guard
    let protected = Router::new()
        .route("/dashboard", get(pages::dashboard::<P>))
        .route("/account", get(pages::account))
        .route_layer(middleware::from_fn_with_state(
            guard_state,
            require_session::<V>,
        ))
        .with_state(PagesState {
            billing: billing_context.clone(),
        });

    // Image proxy
    let images = Router::new()
        .route("/img", get(fetch_image))
        .with_state(image_state);

    let cors = cors_layer(frontend_origins);

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(images)
        .nest("/api/auth", guard_router_generic(verifier, guard_config))
        .nest("/api/billing", billing_router_generic(billing_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS configuration for the configured frontend origins
fn cors_layer(frontend_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<axum::http::HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([Method::GET, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::ImageAllowlist;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use billing::domain::{BillingSummary, PlanTier};
    use billing::error::BillingResult;
    use chrono::Utc;
    use guard::config::GuardConfig;
    use guard::models::{Session, SubjectRef};
    use guard::verifier::InMemorySessionVerifier;
    use kernel::id::Id;
    use tower::util::ServiceExt;

    const UA: &str = "Mozilla/5.0 App Tests";

    #[derive(Clone)]
    struct StaticProvider;

    impl BillingProvider for StaticProvider {
        async fn fetch_summary(&self) -> BillingResult<BillingSummary> {
            Ok(BillingSummary::new(
                Id::new(),
                PlanTier::Pro,
                2,
                Utc::now().timestamp_millis() + 86_400_000,
            ))
        }
    }

    fn test_app(verifier: InMemorySessionVerifier) -> (Router, Arc<BillingContext<StaticProvider>>) {
        let context = BillingContext::new(Arc::new(StaticProvider));
        let image_state =
            ImageProxyState::new(ImageAllowlist::new(Vec::<String>::new()), 1024).unwrap();
        let router = build_router(
            verifier,
            GuardConfig::development(),
            context.clone(),
            image_state,
            &["http://localhost:5173".to_string()],
        );
        (router, context)
    }

    fn signed_in_verifier(token: &str) -> InMemorySessionVerifier {
        let verifier = InMemorySessionVerifier::new();
        verifier.insert(
            token,
            Session::new(
                Id::new(),
                SubjectRef::new(),
                Utc::now().timestamp_millis() + 60_000,
            ),
            platform::crypto::sha256(UA.as_bytes()).to_vec(),
        );
        verifier
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 16384).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_anonymous_dashboard_navigation_redirects() {
        let (app, _) = test_app(InMemorySessionVerifier::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dashboard")
                    .header(axum::http::header::USER_AGENT, UA)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[axum::http::header::LOCATION], "/signin");
        assert!(!body_string(response).await.contains("Dashboard"));
    }

    #[tokio::test]
    async fn test_signed_in_dashboard_renders_plan_badge() {
        let (app, context) = test_app(signed_in_verifier("tok-1"));
        context.load().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dashboard")
                    .header(axum::http::header::USER_AGENT, UA)
                    .header(axum::http::header::COOKIE, "portal_session=tok-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("<h1>Dashboard</h1>"));
        assert!(body.contains(r#"<span class="badge badge-plan">pro</span>"#));
    }

    #[tokio::test]
    async fn test_signed_in_account_page_passes_through() {
        let (app, _) = test_app(signed_in_verifier("tok-1"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/account")
                    .header(axum::http::header::USER_AGENT, UA)
                    .header(axum::http::header::COOKIE, "portal_session=tok-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("<h1>Account</h1>"));
    }

    #[tokio::test]
    async fn test_home_nav_follows_session_state() {
        let (app, _) = test_app(signed_in_verifier("tok-1"));

        let anonymous = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(axum::http::header::USER_AGENT, UA)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(body_string(anonymous).await.contains(r#"<a href="/signin">"#));

        let signed_in = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(axum::http::header::USER_AGENT, UA)
                    .header(axum::http::header::COOKIE, "portal_session=tok-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(body_string(signed_in).await.contains(r#"<a href="/dashboard">"#));
    }

    #[tokio::test]
    async fn test_legacy_home_redirect_through_full_router() {
        let (app, _) = test_app(InMemorySessionVerifier::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/home?campaign=spring")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers()[axum::http::header::LOCATION],
            "/dashboard"
        );
    }

    #[tokio::test]
    async fn test_billing_summary_endpoint_reports_unloaded_context() {
        let (app, _) = test_app(InMemorySessionVerifier::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/billing/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["available"], false);
    }

    #[tokio::test]
    async fn test_session_status_endpoint_through_full_router() {
        let (app, _) = test_app(signed_in_verifier("tok-1"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/status")
                    .header(axum::http::header::USER_AGENT, UA)
                    .header(axum::http::header::COOKIE, "portal_session=tok-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["authenticated"], true);
    }
}
