//! Billing Context
//!
//! Holds the lazily fetched billing summary for the process. The fetch
//! happens at most once for the lifetime of the context; callers that
//! read before it completes simply see nothing yet.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::domain::provider::BillingProvider;
use crate::domain::summary::BillingSummary;

/// Fetch-once billing summary context
pub struct BillingContext<P>
where
    P: BillingProvider + Clone + Send + Sync + 'static,
{
    provider: Arc<P>,
    started: AtomicBool,
    slot: RwLock<Option<BillingSummary>>,
}

impl<P> BillingContext<P>
where
    P: BillingProvider + Clone + Send + Sync + 'static,
{
    pub fn new(provider: Arc<P>) -> Arc<Self> {
        Arc::new(Self {
            provider,
            started: AtomicBool::new(false),
            slot: RwLock::new(None),
        })
    }

    /// Perform the one summary fetch; later calls are no-ops
    ///
    /// A failed fetch is logged and leaves the context empty. There is no
    /// retry: the summary is a convenience read model, not a dependency.
    pub async fn load(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }

        match self.provider.fetch_summary().await {
            Ok(summary) => {
                tracing::info!(
                    account_id = %summary.account_id,
                    plan = %summary.plan,
                    "Billing summary loaded"
                );
                *self.slot.write().await = Some(summary);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Billing summary fetch failed, context stays empty");
            }
        }
    }

    /// Fire-and-forget initialization
    ///
    /// Spawns the fetch and returns immediately; nothing in the process
    /// orders itself after it.
    pub fn spawn_load(self: Arc<Self>) {
        tokio::spawn(async move {
            self.load().await;
        });
    }

    /// The cached summary, if the fetch has completed successfully
    pub async fn summary(&self) -> Option<BillingSummary> {
        self.slot.read().await.clone()
    }
}
