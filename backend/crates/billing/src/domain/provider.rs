//! Provider Port
//!
//! Interface to the external billing service. Implementation is in the
//! infrastructure layer.

use crate::domain::summary::BillingSummary;
use crate::error::BillingResult;

/// Billing provider trait
#[trait_variant::make(BillingProvider: Send)]
pub trait LocalBillingProvider {
    /// Fetch the account billing summary
    async fn fetch_summary(&self) -> BillingResult<BillingSummary>;
}
