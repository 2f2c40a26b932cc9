//! Advertising identifier probe.
//!
//! Resolves the advertising-id capability and records the GAID together with
//! the limit-ad-tracking flag. The collector skips this probe entirely when
//! advertising-id collection is disallowed by the caller; readers cannot
//! distinguish that skip from an unavailable capability.

use std::sync::Arc;

use crate::capability::names;
use crate::probe::{Probe, ProbeError};
use crate::state::CollectionState;
use crate::PlatformContext;

pub(crate) struct AdvertisingIdProbe {
    state: Arc<CollectionState>,
}

impl AdvertisingIdProbe {
    pub(crate) fn new(state: Arc<CollectionState>) -> Self {
        Self { state }
    }
}

#[async_trait::async_trait]
impl Probe for AdvertisingIdProbe {
    fn name(&self) -> &'static str {
        "advertising-id"
    }

    async fn probe(&self, context: &PlatformContext) -> Result<(), ProbeError> {
        let client = context
            .advertising_id_client()
            .ok_or(ProbeError::CapabilityUnavailable(names::ADVERTISING_ID))?;

        let info = client.advertising_id_info().await?;

        self.state.set_gaid(info.id);
        self.state.set_limit_ad_tracking(info.limit_ad_tracking);
        Ok(())
    }
}
