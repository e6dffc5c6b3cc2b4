// libpn532/src/transport/traits.rs

//! The [`Transport`] trait and the [`Transaction`] guard.

use crate::Result;

/// Transport trait abstracts the chip-select bus away from protocol/device logic.
///
/// Implementations know nothing about PN532 frames. Callers should not
/// use `begin_transaction`/`end_transaction` directly; open a
/// [`Transaction`] instead so the bus is always released.
pub trait Transport {
    /// Assert chip select and claim the bus (speed, bit order, mode)
    fn begin_transaction(&mut self) -> Result<()>;

    /// De-assert chip select and release the bus
    fn end_transaction(&mut self) -> Result<()>;

    /// Full-duplex single byte exchange
    fn transfer_byte(&mut self, byte: u8) -> Result<u8>;

    /// Full-duplex exchange in place: `buf` is sent and overwritten with
    /// the bytes clocked in.
    fn transfer(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Blocking sleep
    fn delay_ms(&mut self, ms: u32);

    /// Send bytes and discard what comes back. Default implementation
    /// copies into a scratch buffer and uses `transfer`.
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let mut scratch = data.to_vec();
        self.transfer(&mut scratch)
    }
}

/// Scoped bus transaction. The transaction is ended when the guard is
/// dropped, on every return path.
pub struct Transaction<'a> {
    transport: &'a mut dyn Transport,
}

impl<'a> Transaction<'a> {
    /// Begin a transaction on `transport`.
    pub fn begin(transport: &'a mut dyn Transport) -> Result<Self> {
        transport.begin_transaction()?;
        Ok(Self { transport })
    }

    /// See [`Transport::transfer_byte`].
    pub fn transfer_byte(&mut self, byte: u8) -> Result<u8> {
        self.transport.transfer_byte(byte)
    }

    /// See [`Transport::transfer`].
    pub fn transfer(&mut self, buf: &mut [u8]) -> Result<()> {
        self.transport.transfer(buf)
    }

    /// See [`Transport::write`].
    pub fn write(&mut self, data: &[u8]) -> Result<()> {
        self.transport.write(data)
    }

    /// Sleep with chip select still held.
    pub fn delay_ms(&mut self, ms: u32) {
        self.transport.delay_ms(ms)
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.transport.end_transaction() {
            log::warn!("pn532: failed to end bus transaction: {e}");
        }
    }
}
