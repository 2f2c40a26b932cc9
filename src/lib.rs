//! Device Identity Collection
//!
//! One-shot asynchronous collection of device-identity signals (advertising
//! identifier, app set identifier, secure device identifier) with per-source
//! isolation: the failure or absence of any one source never blocks the
//! others, and readers may poll at any time without locks.
//!
//! # Architecture
//!
//! - **Collector**: [`IdentityCollector`] triggers collection exactly once,
//!   spawns one background task, and exposes the readiness flag and field
//!   accessors.
//! - **Probes**: independent units of work, one per identity source, each
//!   converting every failure (absent capability, invocation error, timeout)
//!   to absence at its own boundary.
//! - **Capability provider**: [`CapabilityProvider`] resolves named optional
//!   platform features at runtime; nothing optional is required at compile
//!   or link time.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use device_identity::{
//!     CapabilityError, CapabilityRegistry, IdentityCollector, PlatformContext, SettingsReader,
//! };
//!
//! struct Settings;
//!
//! impl SettingsReader for Settings {
//!     fn read(&self, _key: &str) -> Result<Option<String>, CapabilityError> {
//!         Ok(Some("9774d56d682e549c".to_string()))
//!     }
//! }
//!
//! # async fn run() {
//! let registry = CapabilityRegistry::new();
//! // registry.register_advertising_id(...) for platforms that have it.
//! let context = Arc::new(PlatformContext::new(Arc::new(registry), Arc::new(Settings)));
//!
//! let collector = IdentityCollector::new();
//! collector.start_collecting(Some(context), true);
//!
//! collector.wait_until_complete().await;
//! let device_id = collector.device_id();
//! # let _ = device_id;
//! # }
//! ```

pub mod capability;
pub mod collector;
pub mod config;
pub mod context;

mod probe;
mod state;

pub use capability::{
    AdvertisingIdClient, AdvertisingIdInfo, AppSetIdClient, CapabilityError, CapabilityHandle,
    CapabilityProvider, CapabilityRegistry, SettingsReader,
};
pub use collector::IdentityCollector;
pub use config::{IdentityConfig, DEFAULT_APP_SET_ID_TIMEOUT};
pub use context::PlatformContext;
