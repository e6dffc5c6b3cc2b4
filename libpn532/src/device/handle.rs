// libpn532/src/device/handle.rs

//! The [`Device`] handle and its high-level operations.

use std::convert::TryFrom;

use crate::device::config::DeviceConfig;
use crate::device::exchange::Exchange;
use crate::protocol::{Command, Response};
use crate::transport::{Transaction, Transport};
use crate::types::{BaudRate, FirmwareVersion, SamMode, Uid, WakeStatus};
use crate::{Error, Result};

/// Handle to one PN532. Owns the transport; every operation runs a full
/// command exchange and keeps nothing between calls.
pub struct Device {
    transport: Box<dyn Transport>,
    config: DeviceConfig,
    wake_status: WakeStatus,
}

impl Device {
    /// Wake the chip and read its firmware version. Never fails: an unreachable chip is
    /// recorded in [`Device::wake_status`].
    pub fn open(transport: Box<dyn Transport>, config: DeviceConfig) -> Self {
        let mut device = Self {
            transport,
            config,
            wake_status: WakeStatus::Unreachable(Error::DeviceNotFound),
        };
        device.wake();
        device
    }

    /// Run the startup sequence again: hold chip select for the wake delay,
    /// then ask for the firmware version, retrying once. Also brings the
    /// chip back after [`Device::power_down`].
    pub fn wake(&mut self) -> &WakeStatus {
        if let Err(e) = self.wake_pulse() {
            log::debug!("pn532: wake pulse failed: {e}");
        }
        // the first command after power-up often fails
        let status = match self.get_firmware_version() {
            Ok(fw) => WakeStatus::Awake(fw),
            Err(first) => {
                log::debug!("pn532: firmware check failed ({first}), retrying");
                match self.get_firmware_version() {
                    Ok(fw) => WakeStatus::Awake(fw),
                    Err(e) => {
                        log::warn!("pn532: could not wake device: {e}");
                        WakeStatus::Unreachable(e)
                    }
                }
            }
        };
        if let WakeStatus::Awake(fw) = &status {
            log::info!("pn532: found {fw}");
        }
        self.wake_status = status;
        &self.wake_status
    }

    fn wake_pulse(&mut self) -> Result<()> {
        let mut tx = Transaction::begin(&mut *self.transport)?;
        tx.delay_ms(self.config.wake_delay_ms);
        Ok(())
    }

    /// Outcome of the last wake sequence.
    pub fn wake_status(&self) -> &WakeStatus {
        &self.wake_status
    }

    /// True when the last wake sequence got a firmware version back.
    pub fn is_awake(&self) -> bool {
        self.wake_status.is_awake()
    }

    /// Settings in use.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Toggle frame hex dumps at debug level.
    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    /// Execute a command and return the parsed Response.
    pub fn execute(&mut self, cmd: &Command, timeout_ms: u32) -> Result<Response> {
        let data = Exchange::new(&mut *self.transport, &self.config).call(cmd, timeout_ms)?;
        Response::decode(cmd, &data)
    }

    /// Send any command and return up to `capacity` result bytes, response
    /// code stripped.
    pub fn call_function(
        &mut self,
        opcode: u8,
        params: &[u8],
        capacity: usize,
        timeout_ms: u32,
    ) -> Result<Vec<u8>> {
        let cmd = Command::Raw {
            opcode,
            params: params.to_vec(),
            capacity,
        };
        Exchange::new(&mut *self.transport, &self.config).call(&cmd, timeout_ms)
    }

    /// GetFirmwareVersion with the control timeout.
    pub fn get_firmware_version(&mut self) -> Result<FirmwareVersion> {
        let timeout = self.config.control_timeout_ms;
        match self.execute(&Command::GetFirmwareVersion, timeout) {
            Ok(Response::FirmwareVersion(fw)) => Ok(fw),
            Ok(_) => Err(Error::WrongCommandResponse),
            Err(e) => {
                log::debug!("pn532: GetFirmwareVersion failed: {e}");
                Err(e)
            }
        }
    }

    /// SAMConfiguration in normal mode: SAM unused, no timeout, no IRQ.
    pub fn sam_disable(&mut self) -> Result<()> {
        self.sam_configure(SamMode::Normal, 0x00, false)
    }

    /// SAMConfiguration with an explicit mode. `timeout` is in 50 ms units
    /// and only matters in virtual card mode.
    pub fn sam_configure(&mut self, mode: SamMode, timeout: u8, use_irq: bool) -> Result<()> {
        let cmd = Command::SamConfiguration {
            mode,
            timeout,
            use_irq,
        };
        let control_timeout = self.config.control_timeout_ms;
        self.execute(&cmd, control_timeout)
            .map(|_| ())
            .inspect_err(|e| log::debug!("pn532: SAMConfiguration ({mode}) failed: {e}"))
    }

    /// Look for one passive target and return its UID.
    ///
    /// `Ok(None)` means no card answered, or the answer did not hold a UID
    /// of at most `uid_capacity` bytes. Exchange failures are errors; use
    /// `.ok().flatten()` to treat them as "no card".
    pub fn read_passive_target_id(
        &mut self,
        baud: BaudRate,
        uid_capacity: usize,
        timeout_ms: u32,
    ) -> Result<Option<Uid>> {
        let resp = self.execute(&Command::list_one_target(baud), timeout_ms)?;
        let uid = resp.uid(uid_capacity);
        if let Some(uid) = &uid {
            log::debug!("pn532: {baud} target uid {}", uid.to_hex());
        }
        Ok(uid)
    }

    /// [`Device::read_passive_target_id`] with the configured
    /// `default_timeout_ms`.
    pub fn read_passive_target(
        &mut self,
        baud: BaudRate,
        uid_capacity: usize,
    ) -> Result<Option<Uid>> {
        let timeout = self.config.default_timeout_ms;
        self.read_passive_target_id(baud, uid_capacity, timeout)
    }

    /// Like [`Device::read_passive_target_id`] with the raw baud-rate byte.
    /// Unknown values give `Ok(None)` without touching the bus.
    pub fn read_passive_target_id_raw(
        &mut self,
        baud: u8,
        uid_capacity: usize,
        timeout_ms: u32,
    ) -> Result<Option<Uid>> {
        match BaudRate::try_from(baud) {
            Ok(baud) => self.read_passive_target_id(baud, uid_capacity, timeout_ms),
            Err(e) => {
                log::debug!("pn532: {e}");
                Ok(None)
            }
        }
    }

    /// Put the chip into power down, waking on SPI activity. On success
    /// waits the configured settle time.
    pub fn power_down(&mut self) -> Result<()> {
        let timeout = self.config.control_timeout_ms;
        match self.execute(&Command::power_down_spi(), timeout) {
            Ok(_) => {
                self.transport.delay_ms(self.config.powerdown_delay_ms);
                Ok(())
            }
            Err(e) => {
                log::debug!("pn532: PowerDown failed: {e}");
                Err(e)
            }
        }
    }

    /// Give the transport back.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }
}
