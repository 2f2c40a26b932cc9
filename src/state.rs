//! Shared collection state.
//!
//! One instance lives for the lifetime of its
//! [`IdentityCollector`](crate::IdentityCollector); the collector's
//! background task is the sole writer, everything else holds read access. Each identity field is a
//! write-once cell owned by exactly one probe, so probes never contend with
//! each other. The completion flag uses release/acquire ordering: a reader
//! that observes `complete == true` also observes every field written before
//! it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use tokio::sync::Notify;

#[derive(Debug, Default)]
pub(crate) struct CollectionState {
    started: AtomicBool,
    complete: AtomicBool,
    notify: Notify,
    gaid: OnceLock<String>,
    limit_ad_tracking: OnceLock<bool>,
    app_set_id: OnceLock<String>,
    device_id: OnceLock<String>,
}

impl CollectionState {
    /// Claim the start guard. Returns `true` for exactly one caller over the
    /// state's lifetime; every later call returns `false`.
    pub(crate) fn try_start(&self) -> bool {
        !self.started.swap(true, Ordering::AcqRel)
    }

    /// Mark collection complete and wake any waiters. Called once, after all
    /// probes have settled.
    pub(crate) fn mark_complete(&self) {
        self.complete.store(true, Ordering::Release);
        self.notify.notify_waiters();
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }

    /// Wait until `mark_complete` has been called. Pends forever if
    /// collection never starts.
    pub(crate) async fn wait_complete(&self) {
        loop {
            // Register for notification before re-checking the flag, so a
            // completion between check and await is not missed.
            let notified = self.notify.notified();
            if self.is_complete() {
                return;
            }
            notified.await;
        }
    }

    // Single writer per field: the owning probe runs at most once, so a
    // second `set` cannot happen and the result is ignored.

    pub(crate) fn set_gaid(&self, id: String) {
        let _ = self.gaid.set(id);
    }

    pub(crate) fn set_limit_ad_tracking(&self, limited: bool) {
        let _ = self.limit_ad_tracking.set(limited);
    }

    pub(crate) fn set_app_set_id(&self, id: String) {
        let _ = self.app_set_id.set(id);
    }

    pub(crate) fn set_device_id(&self, id: String) {
        let _ = self.device_id.set(id);
    }

    pub(crate) fn gaid(&self) -> Option<String> {
        self.gaid.get().cloned()
    }

    pub(crate) fn limit_ad_tracking(&self) -> Option<bool> {
        self.limit_ad_tracking.get().copied()
    }

    pub(crate) fn app_set_id(&self) -> Option<String> {
        self.app_set_id.get().cloned()
    }

    pub(crate) fn device_id(&self) -> Option<String> {
        self.device_id.get().cloned()
    }
}
