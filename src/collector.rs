//! One-shot identity collection orchestration.
//!
//! [`IdentityCollector`] owns the shared [`CollectionState`] and is its sole
//! writer. `start_collecting` claims the start guard synchronously, then
//! spawns a single background task that runs the three probes concurrently
//! and flips the completion flag once all of them have settled. Accessors
//! are lock-free and safe from any calling context, before, during, or after
//! collection.

use std::sync::Arc;
use std::time::Instant;

use crate::config::IdentityConfig;
use crate::context::PlatformContext;
use crate::probe::{AdvertisingIdProbe, AppSetIdProbe, DeviceIdProbe, Probe};
use crate::state::CollectionState;

/// Collects device-identity signals exactly once per instance lifetime.
///
/// State machine: `NotStarted → Collecting → Complete`, with no reverse
/// transitions. Repeat calls to [`start_collecting`](Self::start_collecting)
/// are no-ops, as are calls without a platform context or outside a tokio
/// runtime.
#[derive(Debug, Default)]
pub struct IdentityCollector {
    state: Arc<CollectionState>,
    config: IdentityConfig,
}

impl IdentityCollector {
    /// Create a collector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collector with an explicit configuration.
    pub fn with_config(config: IdentityConfig) -> Self {
        Self {
            state: Arc::new(CollectionState::default()),
            config,
        }
    }

    /// Trigger identity collection.
    ///
    /// No-op when `context` is `None`, when called outside a tokio runtime,
    /// or when collection was already triggered; none of these report an error.
    /// The start guard is claimed synchronously, so concurrent duplicate
    /// calls observe it immediately and exactly one background task is
    /// spawned.
    ///
    /// When `allow_advertising_id` is false the advertising probe is skipped
    /// entirely; its fields stay absent, indistinguishable from an
    /// unavailable capability.
    pub fn start_collecting(
        &self,
        context: Option<Arc<PlatformContext>>,
        allow_advertising_id: bool,
    ) {
        let Some(context) = context else {
            tracing::debug!("Identity collection skipped: no platform context");
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("Identity collection skipped: no current async runtime");
            return;
        };
        if !self.state.try_start() {
            tracing::debug!("Identity collection already started");
            return;
        }

        let state = Arc::clone(&self.state);
        let app_set_id_timeout = self.config.app_set_id_timeout;
        runtime.spawn(async move {
            run_collection(state, context, allow_advertising_id, app_set_id_timeout).await;
        });
    }

    /// Whether all probes have settled. Lock-free; once this returns `true`
    /// every collected field is visible.
    pub fn is_collection_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Advertising identifier (GAID), if collected.
    pub fn gaid(&self) -> Option<String> {
        self.state.gaid()
    }

    /// Limit-ad-tracking flag, if collected.
    pub fn limit_ad_tracking(&self) -> Option<bool> {
        self.state.limit_ad_tracking()
    }

    /// App set identifier, if collected.
    pub fn app_set_id(&self) -> Option<String> {
        self.state.app_set_id()
    }

    /// Secure device identifier, if collected.
    pub fn device_id(&self) -> Option<String> {
        self.state.device_id()
    }

    /// Wait until collection completes. Pends forever if collection never
    /// starts (for example after a `start_collecting(None, _)` no-op).
    pub async fn wait_until_complete(&self) {
        self.state.wait_complete().await;
    }
}

/// The one background unit of work: run all probes, then flip completion.
async fn run_collection(
    state: Arc<CollectionState>,
    context: Arc<PlatformContext>,
    allow_advertising_id: bool,
    app_set_id_timeout: std::time::Duration,
) {
    let start = Instant::now();
    tracing::debug!(allow_advertising_id, "Identity collection starting");

    let advertising = AdvertisingIdProbe::new(Arc::clone(&state));
    let app_set = AppSetIdProbe::new(Arc::clone(&state), app_set_id_timeout);
    let device = DeviceIdProbe::new(Arc::clone(&state));

    tokio::join!(
        async {
            if allow_advertising_id {
                run_probe(&advertising, &context).await;
            } else {
                tracing::debug!(probe = advertising.name(), "Probe skipped by policy");
            }
        },
        run_probe(&app_set, &context),
        run_probe(&device, &context),
    );

    state.mark_complete();
    tracing::info!(
        duration_ms = start.elapsed().as_millis() as u64,
        gaid = state.gaid().is_some(),
        limit_ad_tracking = state.limit_ad_tracking().is_some(),
        app_set_id = state.app_set_id().is_some(),
        device_id = state.device_id().is_some(),
        "Identity collection complete"
    );
}

/// Execute a single probe and record the outcome. Probe failures are logged
/// and swallowed here; they only ever mean absence of that probe's fields.
async fn run_probe(probe: &dyn Probe, context: &PlatformContext) {
    let start = Instant::now();
    match probe.probe(context).await {
        Ok(()) => {
            tracing::debug!(
                probe = probe.name(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Probe completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                probe = probe.name(),
                category = e.category(),
                error = %e,
                source = ?std::error::Error::source(&e),
                "Probe contributed no result"
            );
        }
    }
}
