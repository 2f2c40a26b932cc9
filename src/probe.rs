//! Identity probes.
//!
//! Each probe queries one capability (or settings value) and writes its own
//! fields of the shared [`CollectionState`](crate::state::CollectionState).
//! Probes are independent: any failure is converted to a [`ProbeError`] at
//! the probe boundary and never propagates past it, so one missing or broken
//! capability cannot block the others.

mod advertising;
mod app_set;
mod device;
mod traits;

pub(crate) use advertising::AdvertisingIdProbe;
pub(crate) use app_set::AppSetIdProbe;
pub(crate) use device::DeviceIdProbe;
pub(crate) use traits::{Probe, ProbeError};
