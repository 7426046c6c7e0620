//! Billing Summary Entity
//!
//! Read model of an account's billing state, as reported by the billing
//! service. Nothing here mutates billing; the engine that does lives
//! behind the provider port.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl PlanTier {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use PlanTier::*;
        match self {
            Free => "free",
            Pro => "pro",
            Enterprise => "enterprise",
        }
    }

    /// Parse a wire code; unknown codes come from a newer billing service
    /// and are rejected rather than guessed at
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use PlanTier::*;
        match code {
            "free" => Some(Free),
            "pro" => Some(Pro),
            "enterprise" => Some(Enterprise),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_paid(&self) -> bool {
        !matches!(self, PlanTier::Free)
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Billing summary entity
#[derive(Debug, Clone)]
pub struct BillingSummary {
    /// Account at the billing service
    pub account_id: AccountId,
    /// Current plan tier
    pub plan: PlanTier,
    /// Seats currently occupied on the plan
    pub seats_in_use: u32,
    /// Current billing period end (Unix timestamp ms)
    pub period_end_ms: i64,
    /// When this summary was fetched
    pub fetched_at: DateTime<Utc>,
}

impl BillingSummary {
    pub fn new(account_id: AccountId, plan: PlanTier, seats_in_use: u32, period_end_ms: i64) -> Self {
        Self {
            account_id,
            plan,
            seats_in_use,
            period_end_ms,
            fetched_at: Utc::now(),
        }
    }

    /// Whether the reported billing period is still running
    pub fn period_active(&self) -> bool {
        Utc::now().timestamp_millis() <= self.period_end_ms
    }
}
