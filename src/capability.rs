//! Capability provider collaborator interface.
//!
//! A capability is an optional, environment-dependent platform feature (for
//! example the advertising-id service) that may or may not be present at
//! runtime. The collection core never links against a concrete platform
//! library; it resolves capabilities by name through [`CapabilityProvider`]
//! and degrades to absence when a capability is missing.
//!
//! [`CapabilityRegistry`] is the default provider: the embedding application
//! registers whatever clients its platform actually has, and probes for
//! unregistered capabilities simply contribute nothing.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

/// Well-known capability names.
pub mod names {
    /// Advertising identifier service.
    pub const ADVERTISING_ID: &str = "advertising-id";

    /// App set identifier service.
    pub const APP_SET_ID: &str = "app-set-id";
}

/// Error raised by a capability client invocation.
///
/// Carries a message and an optional wrapped cause for diagnostics logging.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CapabilityError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CapabilityError {
    /// Create an error with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Advertising identity values reported by the platform.
#[derive(Debug, Clone)]
pub struct AdvertisingIdInfo {
    /// Resettable advertising identifier (GAID).
    pub id: String,
    /// Whether the user has limited ad tracking.
    pub limit_ad_tracking: bool,
}

/// Client for the advertising-id capability.
#[async_trait::async_trait]
pub trait AdvertisingIdClient: Send + Sync {
    /// Fetch the advertising identifier and the limit-ad-tracking flag.
    async fn advertising_id_info(&self) -> Result<AdvertisingIdInfo, CapabilityError>;
}

/// Client for the app-set-id capability.
#[async_trait::async_trait]
pub trait AppSetIdClient: Send + Sync {
    /// Fetch the app set identifier.
    async fn app_set_id(&self) -> Result<String, CapabilityError>;
}

/// Read-only platform settings store, used for the device identifier.
pub trait SettingsReader: Send + Sync {
    /// Look up a settings value by key. Returns `Ok(None)` when the key has
    /// no value.
    fn read(&self, key: &str) -> Result<Option<String>, CapabilityError>;
}

/// A resolved capability: a typed client behind a shared handle.
#[derive(Clone)]
pub enum CapabilityHandle {
    /// Advertising identifier service client.
    AdvertisingId(Arc<dyn AdvertisingIdClient>),
    /// App set identifier service client.
    AppSetId(Arc<dyn AppSetIdClient>),
}

impl CapabilityHandle {
    /// Short label for the handle kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AdvertisingId(_) => "advertising-id",
            Self::AppSetId(_) => "app-set-id",
        }
    }
}

impl std::fmt::Debug for CapabilityHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CapabilityHandle").field(&self.kind()).finish()
    }
}

/// Resolves named optional capabilities to callable clients.
///
/// Returning `None` means the capability is absent from the runtime
/// environment; the corresponding probe contributes absence and the rest of
/// the collection proceeds unaffected.
pub trait CapabilityProvider: Send + Sync {
    /// Resolve a capability by name, or report it absent.
    fn resolve(&self, name: &str) -> Option<CapabilityHandle>;
}

/// Default [`CapabilityProvider`] backed by runtime registration.
#[derive(Default)]
pub struct CapabilityRegistry {
    entries: HashMap<String, CapabilityHandle>,
}

impl CapabilityRegistry {
    /// Create an empty registry. Every capability resolves as absent until
    /// registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability handle under an arbitrary name.
    pub fn register(&mut self, name: impl Into<String>, handle: CapabilityHandle) {
        let name = name.into();
        tracing::debug!(capability = %name, kind = handle.kind(), "Capability registered");
        self.entries.insert(name, handle);
    }

    /// Register an advertising-id client under its well-known name.
    pub fn register_advertising_id(&mut self, client: Arc<dyn AdvertisingIdClient>) {
        self.register(names::ADVERTISING_ID, CapabilityHandle::AdvertisingId(client));
    }

    /// Register an app-set-id client under its well-known name.
    pub fn register_app_set_id(&mut self, client: Arc<dyn AppSetIdClient>) {
        self.register(names::APP_SET_ID, CapabilityHandle::AppSetId(client));
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no capability has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl CapabilityProvider for CapabilityRegistry {
    fn resolve(&self, name: &str) -> Option<CapabilityHandle> {
        self.entries.get(name).cloned()
    }
}
