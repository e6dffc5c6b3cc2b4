// libpn532/src/transport/hal.rs
//! embedded-hal 1.0 transport: an `SpiBus` with a manually driven
//! chip-select pin and a blocking delay.
//!
//! The PN532 expects 1 MHz, LSB first, SPI mode 0. Configure the bus that
//! way before handing it over. Many MCU SPI peripherals cannot shift LSB
//! first; for those enable [`HalTransport::with_bit_reversal`] and the
//! adapter mirrors every byte in software.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, OutputPin};
use embedded_hal::spi::{Error as _, Mode, SpiBus, MODE_0};

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// SPI mode the PN532 speaks
pub const SPI_MODE: Mode = MODE_0;

/// Maximum SCK frequency used with the PN532
pub const SPI_FREQUENCY_HZ: u32 = 1_000_000;

/// [`Transport`] over embedded-hal parts. The bus must already run in
/// [`SPI_MODE`] at no more than [`SPI_FREQUENCY_HZ`].
pub struct HalTransport<SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
    reverse_bits: bool,
    open: bool,
}

fn spi_error<E: embedded_hal::spi::Error>(e: E) -> Error {
    Error::Bus(format!("spi: {:?}", e.kind()))
}

fn pin_error<E: embedded_hal::digital::Error>(e: E) -> Error {
    Error::Bus(format!("chip select: {:?}", e.kind()))
}

impl<SPI, CS, D> HalTransport<SPI, CS, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    D: DelayNs,
{
    /// Wrap the bus parts. Chip select is driven high (idle) right away.
    ///
    /// `spi` is not reconfigured here; set it up for [`SPI_MODE`] and
    /// [`SPI_FREQUENCY_HZ`] with your HAL first.
    pub fn new(spi: SPI, mut cs: CS, delay: D) -> Result<Self> {
        cs.set_high().map_err(pin_error)?;
        Ok(Self {
            spi,
            cs,
            delay,
            reverse_bits: false,
            open: false,
        })
    }

    /// Send and receive LSB first on an MSB-first peripheral.
    pub fn with_bit_reversal(mut self, enabled: bool) -> Self {
        self.reverse_bits = enabled;
        self
    }

    /// Give the bus parts back.
    pub fn release(self) -> (SPI, CS, D) {
        (self.spi, self.cs, self.delay)
    }

    fn map_byte(&self, b: u8) -> u8 {
        if self.reverse_bits { b.reverse_bits() } else { b }
    }
}

impl<SPI, CS, D> Transport for HalTransport<SPI, CS, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    D: DelayNs,
{
    fn begin_transaction(&mut self) -> Result<()> {
        if self.open {
            return Err(Error::Bus("nested transaction".into()));
        }
        self.cs.set_low().map_err(pin_error)?;
        self.open = true;
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<()> {
        // Release chip select even when the flush fails
        let flushed = self.spi.flush().map_err(spi_error);
        self.open = false;
        self.cs.set_high().map_err(pin_error)?;
        flushed
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<u8> {
        let mut buf = [self.map_byte(byte)];
        self.spi.transfer_in_place(&mut buf).map_err(spi_error)?;
        Ok(self.map_byte(buf[0]))
    }

    fn transfer(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.reverse_bits {
            buf.iter_mut().for_each(|b| *b = b.reverse_bits());
        }
        self.spi.transfer_in_place(buf).map_err(spi_error)?;
        if self.reverse_bits {
            buf.iter_mut().for_each(|b| *b = b.reverse_bits());
        }
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        if self.reverse_bits {
            let mirrored: Vec<u8> = data.iter().map(|b| b.reverse_bits()).collect();
            self.spi.write(&mirrored).map_err(spi_error)
        } else {
            self.spi.write(data).map_err(spi_error)
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
