//! Core probe trait and error type.

use std::time::Duration;

use thiserror::Error;

use crate::PlatformContext;

/// Reasons a probe contributed no result.
///
/// From the collector's perspective all variants are handled identically:
/// the probe's fields stay absent and collection proceeds. The variants
/// exist for diagnostics logging only.
#[derive(Debug, Error)]
pub(crate) enum ProbeError {
    /// The named optional capability is not present in the runtime.
    #[error("capability '{0}' is not available")]
    CapabilityUnavailable(&'static str),

    /// The capability was present but the invocation failed.
    #[error("capability invocation failed: {0}")]
    Invocation(#[from] crate::capability::CapabilityError),

    /// The capability did not respond within the wait budget.
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl ProbeError {
    /// Error category label for structured logging.
    pub(crate) fn category(&self) -> &'static str {
        match self {
            Self::CapabilityUnavailable(_) => "unavailable",
            Self::Invocation(_) => "invocation",
            Self::Timeout(_) => "timeout",
        }
    }
}

/// A single unit of identity collection work.
///
/// A probe either fully succeeds (writes its fields and returns `Ok`) or
/// contributes nothing; partial values are never surfaced. Implementations
/// hold a handle to the shared state and write only their own fields.
#[async_trait::async_trait]
pub(crate) trait Probe: Send + Sync {
    /// Probe name for logging.
    fn name(&self) -> &'static str;

    /// Attempt to resolve the backing capability and record its value(s).
    async fn probe(&self, context: &PlatformContext) -> Result<(), ProbeError>;
}
