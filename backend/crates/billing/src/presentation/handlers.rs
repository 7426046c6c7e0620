//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::context::BillingContext;
use crate::domain::provider::BillingProvider;
use crate::presentation::dto::BillingSummaryResponse;

/// Shared state for billing handlers
#[derive(Clone)]
pub struct BillingAppState<P>
where
    P: BillingProvider + Clone + Send + Sync + 'static,
{
    pub context: Arc<BillingContext<P>>,
}

/// GET /api/billing/summary
pub async fn billing_summary<P>(
    State(state): State<BillingAppState<P>>,
) -> Json<BillingSummaryResponse>
where
    P: BillingProvider + Clone + Send + Sync + 'static,
{
    match state.context.summary().await {
        Some(summary) => Json(BillingSummaryResponse {
            available: true,
            plan: Some(summary.plan.code().to_string()),
            seats_in_use: Some(summary.seats_in_use),
            period_end_ms: Some(summary.period_end_ms),
        }),
        None => Json(BillingSummaryResponse {
            available: false,
            plan: None,
            seats_in_use: None,
            period_end_ms: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary::{BillingSummary, PlanTier};
    use crate::error::BillingResult;
    use crate::presentation::router::billing_router_generic;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use kernel::id::Id;
    use tower::util::ServiceExt;

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

    async fn get_summary(context: Arc<BillingContext<StaticProvider>>) -> serde_json::Value {
        let app = billing_router_generic(context);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_summary_before_load() {
        let context = BillingContext::new(Arc::new(StaticProvider));

        let body = get_summary(context).await;
        assert_eq!(body["available"], false);
        assert!(body["plan"].is_null());
    }

    #[tokio::test]
    async fn test_summary_after_load() {
        let context = BillingContext::new(Arc::new(StaticProvider));
        context.load().await;

        let body = get_summary(context).await;
        assert_eq!(body["available"], true);
        assert_eq!(body["plan"], "pro");
        assert_eq!(body["seatsInUse"], 2);
    }
}
