//! App set identifier probe.
//!
//! Resolves the app-set-id capability under a fixed wait budget. A sluggish
//! or unresponsive capability contributes absence at the budget boundary and
//! leaves the in-flight future behind; nothing else waits on it.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::capability::names;
use crate::probe::{Probe, ProbeError};
use crate::state::CollectionState;
use crate::PlatformContext;

pub(crate) struct AppSetIdProbe {
    state: Arc<CollectionState>,
    wait_budget: Duration,
}

impl AppSetIdProbe {
    pub(crate) fn new(state: Arc<CollectionState>, wait_budget: Duration) -> Self {
        Self { state, wait_budget }
    }
}

#[async_trait::async_trait]
impl Probe for AppSetIdProbe {
    fn name(&self) -> &'static str {
        "app-set-id"
    }

    async fn probe(&self, context: &PlatformContext) -> Result<(), ProbeError> {
        let client = context
            .app_set_id_client()
            .ok_or(ProbeError::CapabilityUnavailable(names::APP_SET_ID))?;

        let id = timeout(self.wait_budget, client.app_set_id())
            .await
            .map_err(|_| ProbeError::Timeout(self.wait_budget))??;

        self.state.set_app_set_id(id);
        Ok(())
    }
}
