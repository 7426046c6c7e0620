//! Billing Service Client
//!
//! Fetches the account billing summary from the external billing service.

use serde::Deserialize;
use uuid::Uuid;

use kernel::id::AccountId;

use crate::application::config::BillingConfig;
use crate::domain::provider::BillingProvider;
use crate::domain::summary::{BillingSummary, PlanTier};
use crate::error::{BillingError, BillingResult};

/// HTTP-backed billing provider
#[derive(Clone)]
pub struct HttpBillingProvider {
    client: reqwest::Client,
    summary_url: String,
    bearer: String,
}

impl HttpBillingProvider {
    pub fn new(config: &BillingConfig) -> BillingResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .map_err(|e| BillingError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            summary_url: format!(
                "{}/v1/billing/summary",
                config.api_url.trim_end_matches('/')
            ),
            bearer: format!("Bearer {}", config.api_token),
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryDto {
    account_id: Uuid,
    plan: String,
    seats_in_use: u32,
    period_end_ms: i64,
}

impl SummaryDto {
    fn into_summary(self) -> BillingResult<BillingSummary> {
        let plan = PlanTier::from_code(&self.plan).ok_or_else(|| {
            BillingError::UpstreamResponse(format!("unknown plan code: {}", self.plan))
        })?;

        Ok(BillingSummary::new(
            AccountId::from_uuid(self.account_id),
            plan,
            self.seats_in_use,
            self.period_end_ms,
        ))
    }
}

impl BillingProvider for HttpBillingProvider {
    async fn fetch_summary(&self) -> BillingResult<BillingSummary> {
        let response = self
            .client
            .get(&self.summary_url)
            .header(http::header::AUTHORIZATION, &self.bearer)
            .send()
            .await?
            .error_for_status()?;

        let dto: SummaryDto = response.json().await?;
        dto.into_summary()
    }
}
