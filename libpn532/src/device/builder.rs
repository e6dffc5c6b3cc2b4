// libpn532/src/device/builder.rs

//! Builder that wires a transport and configuration into a [`Device`].

use crate::device::config::DeviceConfig;
use crate::device::handle::Device;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: DeviceConfig,
}

impl DeviceBuilder {
    /// Builder with default settings and no transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the bus (e.g. `HalTransport` or `MockTransport`)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace all settings at once.
    pub fn with_config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// Sleep between status polls
    pub fn poll_interval_ms(mut self, ms: u32) -> Self {
        self.config.poll_interval_ms = ms;
        self
    }

    /// Chip-select low time of the wake pulse
    pub fn wake_delay_ms(mut self, ms: u32) -> Self {
        self.config.wake_delay_ms = ms;
        self
    }

    /// Wait after a successful PowerDown
    pub fn powerdown_delay_ms(mut self, ms: u32) -> Self {
        self.config.powerdown_delay_ms = ms;
        self
    }

    /// Timeout for [`Device::read_passive_target`]
    pub fn default_timeout_ms(mut self, ms: u32) -> Self {
        self.config.default_timeout_ms = ms;
        self
    }

    /// Timeout for GetFirmwareVersion, SAMConfiguration and PowerDown
    pub fn control_timeout_ms(mut self, ms: u32) -> Self {
        self.config.control_timeout_ms = ms;
        self
    }

    /// Dump every frame as hex at debug level
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Consume the builder, wake the chip and read its firmware version.
    ///
    /// Only a missing transport is an error (`DeviceNotFound`). A chip that
    /// does not answer still yields a `Device`; check
    /// [`Device::is_awake`] before using it.
    pub fn build(self) -> Result<Device> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        Ok(Device::open(transport, self.config))
    }
}
