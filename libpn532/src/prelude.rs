// libpn532/src/prelude.rs

//! Convenience re-exports: `use libpn532::prelude::*;`

pub use crate::device::{Device, DeviceBuilder, DeviceConfig};
pub use crate::protocol::{Command, Response};
pub use crate::transport::{MockTransport, Transaction, Transport};
#[cfg(feature = "embedded-hal")]
pub use crate::transport::HalTransport;
pub use crate::{BaudRate, Error, FirmwareVersion, Result, SamMode, Uid, WakeStatus};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
