// libpn532/src/device/config.rs

//! Driver timing and diagnostics configuration

use crate::utils::timeout::{CONTROL_TIMEOUT_MS, DEFAULT_TIMEOUT_MS};

/// Status poll interval while waiting for the ready bit (ms)
pub const POLL_INTERVAL_MS: u32 = 5;

/// Chip-select low time used to wake the PN532 from power down (ms)
pub const WAKE_DELAY_MS: u32 = 2;

/// Settle time after a successful PowerDown (ms)
pub const POWERDOWN_DELAY_MS: u32 = 1;

/// Timing and debug settings for a [`Device`](crate::device::Device).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    /// Sleep between status polls
    pub poll_interval_ms: u32,
    /// Chip-select low time of the wake pulse
    pub wake_delay_ms: u32,
    /// Wait after a successful PowerDown
    pub powerdown_delay_ms: u32,
    /// Timeout for [`Device::read_passive_target`](crate::device::Device::read_passive_target)
    pub default_timeout_ms: u32,
    /// Timeout for GetFirmwareVersion, SAMConfiguration and PowerDown
    pub control_timeout_ms: u32,
    /// Log every frame written and read as hex at debug level
    pub debug: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: POLL_INTERVAL_MS,
            wake_delay_ms: WAKE_DELAY_MS,
            powerdown_delay_ms: POWERDOWN_DELAY_MS,
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
            control_timeout_ms: CONTROL_TIMEOUT_MS,
            debug: false,
        }
    }
}
