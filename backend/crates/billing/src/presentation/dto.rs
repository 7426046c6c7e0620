//! API DTOs (Data Transfer Objects)

use serde::Serialize;

/// Billing summary response
///
/// `available: false` means the one fetch has not completed (or failed);
/// the remaining fields are absent in that case.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSummaryResponse {
    pub available: bool,
    pub plan: Option<String>,
    pub seats_in_use: Option<u32>,
    pub period_end_ms: Option<i64>,
}
