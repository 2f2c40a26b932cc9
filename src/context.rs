//! Platform context handle passed to the collector.

use std::sync::Arc;

use crate::capability::{
    names, AdvertisingIdClient, AppSetIdClient, CapabilityHandle, CapabilityProvider,
    SettingsReader,
};

/// Bundle of platform collaborators the probes need: the capability provider
/// and the settings store.
///
/// The collector takes this as an explicit handle rather than reaching for
/// ambient process globals; passing `None` to
/// [`IdentityCollector::start_collecting`](crate::IdentityCollector::start_collecting)
/// models a missing platform context and turns the call into a no-op.
pub struct PlatformContext {
    provider: Arc<dyn CapabilityProvider>,
    settings: Arc<dyn SettingsReader>,
}

impl PlatformContext {
    /// Create a context from a capability provider and a settings reader.
    pub fn new(provider: Arc<dyn CapabilityProvider>, settings: Arc<dyn SettingsReader>) -> Self {
        Self { provider, settings }
    }

    /// Resolve the advertising-id client, if the capability is present.
    pub fn advertising_id_client(&self) -> Option<Arc<dyn AdvertisingIdClient>> {
        match self.provider.resolve(names::ADVERTISING_ID) {
            Some(CapabilityHandle::AdvertisingId(client)) => Some(client),
            Some(other) => {
                tracing::warn!(
                    capability = names::ADVERTISING_ID,
                    kind = other.kind(),
                    "Capability resolved to unexpected handle kind"
                );
                None
            }
            None => None,
        }
    }

    /// Resolve the app-set-id client, if the capability is present.
    pub fn app_set_id_client(&self) -> Option<Arc<dyn AppSetIdClient>> {
        match self.provider.resolve(names::APP_SET_ID) {
            Some(CapabilityHandle::AppSetId(client)) => Some(client),
            Some(other) => {
                tracing::warn!(
                    capability = names::APP_SET_ID,
                    kind = other.kind(),
                    "Capability resolved to unexpected handle kind"
                );
                None
            }
            None => None,
        }
    }

    /// The platform settings store.
    pub fn settings(&self) -> &dyn SettingsReader {
        self.settings.as_ref()
    }
}

impl std::fmt::Debug for PlatformContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformContext").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{CapabilityError, CapabilityRegistry};

    struct StubAppSetClient;

    #[async_trait::async_trait]
    impl AppSetIdClient for StubAppSetClient {
        async fn app_set_id(&self) -> Result<String, CapabilityError> {
            Ok("stub".to_string())
        }
    }

    struct NoSettings;

    impl SettingsReader for NoSettings {
        fn read(&self, _key: &str) -> Result<Option<String>, CapabilityError> {
            Ok(None)
        }
    }

    #[test]
    fn test_absent_capability_resolves_to_none() {
        let context =
            PlatformContext::new(Arc::new(CapabilityRegistry::new()), Arc::new(NoSettings));

        assert!(context.advertising_id_client().is_none());
        assert!(context.app_set_id_client().is_none());
    }

    #[test]
    fn test_wrong_handle_kind_resolves_to_none() {
        // A handle registered under the wrong name is treated as absent.
        let mut registry = CapabilityRegistry::new();
        registry.register(
            names::ADVERTISING_ID,
            CapabilityHandle::AppSetId(Arc::new(StubAppSetClient)),
        );

        let context = PlatformContext::new(Arc::new(registry), Arc::new(NoSettings));
        assert!(context.advertising_id_client().is_none());
    }
}
