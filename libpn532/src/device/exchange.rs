// libpn532/src/device/exchange.rs

//! Command / ACK / response exchange with the PN532 over SPI.
//!
//! One [`Exchange`] drives a single command through
//! `Idle -> FrameSent -> WaitAck -> AckReceived -> WaitResponse ->
//! ResponseReceived -> Done`. Any failure moves it to `Aborting`, where the
//! ACK pattern is written to cancel whatever the chip is doing, and the
//! error is returned.

use crate::constants::{ACK_FRAME, SPI_DATA_READ, SPI_DATA_WRITE, SPI_READY, SPI_STATUS_READ};
use crate::device::config::DeviceConfig;
use crate::protocol::{codec, Command, Frame};
use crate::transport::{Transaction, Transport};
use crate::utils::{bytes_to_hex_spaced, poll_budget};
use crate::{Error, Result};

/// Where an [`Exchange`] is in the command sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ExchangeState {
    /// Nothing in flight
    #[display(fmt = "idle")]
    Idle,
    /// Command frame written
    #[display(fmt = "frame sent")]
    FrameSent,
    /// Polling for the ACK
    #[display(fmt = "waiting for ack")]
    WaitAck,
    /// ACK read and verified
    #[display(fmt = "ack received")]
    AckReceived,
    /// Polling for the response frame
    #[display(fmt = "waiting for response")]
    WaitResponse,
    /// Response frame read, not yet decoded
    #[display(fmt = "response received")]
    ResponseReceived,
    /// Result handed back
    #[display(fmt = "done")]
    Done,
    /// Writing the ACK pattern to cancel the command
    #[display(fmt = "aborting")]
    Aborting,
}

/// One command exchange over a borrowed transport.
pub struct Exchange<'a> {
    transport: &'a mut dyn Transport,
    config: &'a DeviceConfig,
    state: ExchangeState,
}

impl<'a> Exchange<'a> {
    /// Start in [`ExchangeState::Idle`].
    pub fn new(transport: &'a mut dyn Transport, config: &'a DeviceConfig) -> Self {
        Self {
            transport,
            config,
            state: ExchangeState::Idle,
        }
    }

    /// Current state; `Done` or `Idle` once `call` returns.
    pub fn state(&self) -> ExchangeState {
        self.state
    }

    fn advance(&mut self, next: ExchangeState) {
        log::trace!("pn532: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Send `cmd` and return its result bytes (response code stripped, at
    /// most `cmd.response_capacity()` long).
    ///
    /// Every failure after the frame is encoded sends the abort frame
    /// before the error is returned.
    pub fn call(&mut self, cmd: &Command, timeout_ms: u32) -> Result<Vec<u8>> {
        let frame = codec::encode_command_frame(cmd)?;
        match self.run(cmd, &frame, timeout_ms) {
            Ok(data) => {
                self.advance(ExchangeState::Done);
                Ok(data)
            }
            Err(e) => {
                log::debug!(
                    "pn532: command {:#04x} failed in state '{}': {}",
                    cmd.command_code(),
                    self.state,
                    e
                );
                self.advance(ExchangeState::Aborting);
                self.abort();
                self.advance(ExchangeState::Idle);
                Err(e)
            }
        }
    }

    fn run(&mut self, cmd: &Command, frame: &[u8], timeout_ms: u32) -> Result<Vec<u8>> {
        self.write_data(frame)?;
        self.advance(ExchangeState::FrameSent);

        self.advance(ExchangeState::WaitAck);
        if !self.wait_ready(timeout_ms)? {
            return Err(Error::AckTimeout);
        }
        let ack = self.read_data(ACK_FRAME.len())?;
        if !Frame::is_ack(&ack) {
            return Err(Error::NoCommandAck);
        }
        self.advance(ExchangeState::AckReceived);

        self.advance(ExchangeState::WaitResponse);
        if !self.wait_ready(timeout_ms)? {
            return Err(Error::ResponseTimeout);
        }
        // +1 for the response code
        let raw = self.read_data(Frame::read_len(cmd.response_capacity() + 1))?;
        self.advance(ExchangeState::ResponseReceived);

        codec::decode_response_data(cmd, &raw)
    }

    /// Write the ACK pattern to cancel the current command. Failures are
    /// logged and dropped so the first error reaches the caller.
    fn abort(&mut self) {
        if let Err(e) = self.write_data(&ACK_FRAME) {
            log::warn!("pn532: failed to send abort frame: {e}");
        }
    }

    /// Poll the status register until the ready bit is set. Returns
    /// `Ok(false)` once the timeout is used up.
    fn wait_ready(&mut self, timeout_ms: u32) -> Result<bool> {
        let interval = self.config.poll_interval_ms;
        let mut tx = Transaction::begin(&mut *self.transport)?;
        for _ in 0..poll_budget(timeout_ms, interval) {
            let status = tx.transfer_byte(SPI_STATUS_READ)?;
            if status & SPI_READY != 0 {
                return Ok(true);
            }
            tx.delay_ms(interval);
        }
        Ok(false)
    }

    fn read_data(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        {
            let mut tx = Transaction::begin(&mut *self.transport)?;
            tx.transfer_byte(SPI_DATA_READ)?;
            tx.transfer(&mut buf)?;
        }
        if self.config.debug {
            log::debug!("pn532: read frame: {}", bytes_to_hex_spaced(&buf));
        }
        Ok(buf)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<()> {
        if self.config.debug {
            log::debug!("pn532: write frame: {}", bytes_to_hex_spaced(data));
        }
        let mut tx = Transaction::begin(&mut *self.transport)?;
        tx.transfer_byte(SPI_DATA_WRITE)?;
        tx.write(data)
    }
}
