// libpn532/src/error.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

/// 共通エラー型
///
/// The first thirteen variants are the terminal outcomes of a single
/// command exchange; the rest cover transport failures and result
/// validation done by the high-level operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // frame decode
    /// Reply was all zero bytes
    #[error("bad preamble: response buffer held only zero bytes")]
    BadPreamble,
    /// No 0x00 0xFF start code
    #[error("bad packet start: expected start code 0xff")]
    BadPacketStart,
    /// Buffer ended right after the start code
    #[error("empty packet: nothing after the start code")]
    EmptyPacket,
    /// LEN byte was zero
    #[error("empty response: frame length is zero")]
    EmptyResponse,
    /// LEN + LCS did not sum to zero
    #[error("bad length checksum")]
    BadLengthChecksum,
    /// Frame claims more data than was read or the command allows
    #[error("response longer than expected")]
    LongResponse,
    /// DCS mismatch
    #[error("bad data checksum")]
    BadDataChecksum,
    /// TFI was not 0xD5
    #[error("bad frame identifier: frame did not come from the PN532")]
    BadTfi,
    /// Missing 0x00 after DCS
    #[error("bad postamble")]
    BadPostamble,

    // command exchange
    /// Chip never became ready after the command frame
    #[error("timed out waiting for command ACK")]
    AckTimeout,
    /// Ready, but the frame read back was not an ACK
    #[error("no ACK after command")]
    NoCommandAck,
    /// Chip never became ready after the ACK
    #[error("timed out waiting for command response")]
    ResponseTimeout,
    /// Response code was not the command code + 1
    #[error("response does not match the issued command")]
    WrongCommandResponse,

    /// SPI or chip-select failure, or transport misuse
    #[error("bus error: {0}")]
    Bus(String),

    /// Result payload had the wrong size
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Size the caller needed
        expected: usize,
        /// Size received
        actual: usize,
    },

    /// Non-zero status byte in a result
    #[error("pn532 reported error status {0:#04x}")]
    Status(u8),

    /// Baud-rate byte outside 0x00..=0x04
    #[error("unsupported baud rate {0:#04x}")]
    UnsupportedBaudRate(u8),

    /// No transport to talk to
    #[error("device not found")]
    DeviceNotFound,
}

impl Error {
    /// Numeric diagnostic code of a protocol error (0x01..=0x0D), in the
    /// order the exchange can fail. Other variants have no code.
    pub fn code(&self) -> Option<u8> {
        let code = match self {
            Error::BadPreamble => 0x01,
            Error::BadPacketStart => 0x02,
            Error::EmptyPacket => 0x03,
            Error::EmptyResponse => 0x04,
            Error::BadLengthChecksum => 0x05,
            Error::LongResponse => 0x06,
            Error::BadDataChecksum => 0x07,
            Error::BadTfi => 0x08,
            Error::BadPostamble => 0x09,
            Error::AckTimeout => 0x0A,
            Error::NoCommandAck => 0x0B,
            Error::ResponseTimeout => 0x0C,
            Error::WrongCommandResponse => 0x0D,
            _ => return None,
        };
        Some(code)
    }

    /// True for failures raised while validating a response frame.
    pub fn is_frame_error(&self) -> bool {
        matches!(self.code(), Some(0x01..=0x09))
    }
}

/// `Result` with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
