//! Device identifier probe.
//!
//! Reads the platform-provided secure device id straight from the settings
//! store. No optional capability is involved, so the failure surface is just
//! the read itself: any error or empty value leaves the field absent.

use std::sync::Arc;

use crate::probe::{Probe, ProbeError};
use crate::state::CollectionState;
use crate::PlatformContext;

/// Settings key for the secure device identifier.
pub(crate) const DEVICE_ID_SETTING: &str = "android_id";

pub(crate) struct DeviceIdProbe {
    state: Arc<CollectionState>,
}

impl DeviceIdProbe {
    pub(crate) fn new(state: Arc<CollectionState>) -> Self {
        Self { state }
    }
}

#[async_trait::async_trait]
impl Probe for DeviceIdProbe {
    fn name(&self) -> &'static str {
        "device-id"
    }

    async fn probe(&self, context: &PlatformContext) -> Result<(), ProbeError> {
        let value = context.settings().read(DEVICE_ID_SETTING)?;

        match value {
            Some(id) if !id.is_empty() => {
                self.state.set_device_id(id);
            }
            _ => {
                tracing::debug!(key = DEVICE_ID_SETTING, "Device id setting not present");
            }
        }
        Ok(())
    }
}
