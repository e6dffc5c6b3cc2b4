// libpn532/src/types.rs

//! Typed command results and parameters.

use crate::Error;
use std::convert::TryFrom;

/// Firmware version reported by GetFirmwareVersion (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    /// IC version (0x32 for a PN532)
    pub ic: u8,
    /// Firmware major version
    pub version: u8,
    /// Firmware minor version
    pub revision: u8,
    /// Bit field of supported card families
    pub support: u8,
}

impl FirmwareVersion {
    /// IC, Ver, Rev, Support in wire order.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            ic: bytes[0],
            version: bytes[1],
            revision: bytes[2],
            support: bytes[3],
        }
    }

    /// Inverse of [`FirmwareVersion::from_bytes`].
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.ic, self.version, self.revision, self.support]
    }

    /// Packed big-endian form: IC in the top byte.
    pub fn as_u32(&self) -> u32 {
        u32::from_be_bytes(self.to_bytes())
    }

    /// Support bit 0
    pub fn supports_iso14443a(&self) -> bool {
        self.support & 0x01 != 0
    }

    /// Support bit 1
    pub fn supports_iso14443b(&self) -> bool {
        self.support & 0x02 != 0
    }

    /// Support bit 2
    pub fn supports_iso18092(&self) -> bool {
        self.support & 0x04 != 0
    }
}

impl TryFrom<&[u8]> for FirmwareVersion {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(bytes);
        Ok(Self::from_bytes(arr))
    }
}

impl std::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PN5{:02x} v{}.{} (support {:#04x})",
            self.ic, self.version, self.revision, self.support
        )
    }
}

/// UID of a discovered card. Length depends on the card family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Wrap UID bytes as received.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw UID bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// UID length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length UID
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex without separators, e.g. `04a23b5c`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl From<&[u8]> for Uid {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Baud rate / modulation passed to InListPassiveTarget
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaudRate {
    /// ISO/IEC 14443 Type A (MIFARE, NTAG), 106 kbps
    #[display(fmt = "ISO14443A")]
    Iso14443A = 0x00,
    /// FeliCa, 212 kbps
    #[display(fmt = "FeliCa 212")]
    Felica212 = 0x01,
    /// FeliCa, 424 kbps
    #[display(fmt = "FeliCa 424")]
    Felica424 = 0x02,
    /// ISO/IEC 14443-3 Type B, 106 kbps
    #[display(fmt = "ISO14443B")]
    Iso14443B = 0x03,
    /// Innovision Jewel tag, 106 kbps
    #[display(fmt = "Innovision Jewel")]
    InnovisionJewel = 0x04,
}

impl BaudRate {
    /// BrTy byte sent on the wire.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Default for BaudRate {
    fn default() -> Self {
        BaudRate::Iso14443A
    }
}

impl TryFrom<u8> for BaudRate {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::Iso14443A),
            0x01 => Ok(Self::Felica212),
            0x02 => Ok(Self::Felica424),
            0x03 => Ok(Self::Iso14443B),
            0x04 => Ok(Self::InnovisionJewel),
            other => Err(Error::UnsupportedBaudRate(other)),
        }
    }
}

/// SAMConfiguration mode
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SamMode {
    /// SAM unused
    #[display(fmt = "normal")]
    Normal = 0x01,
    /// PN532 and SAM act as one card
    #[display(fmt = "virtual card")]
    VirtualCard = 0x02,
    /// Host talks to the SAM through the PN532
    #[display(fmt = "wired card")]
    WiredCard = 0x03,
    /// PN532 and SAM both visible to an external reader
    #[display(fmt = "dual card")]
    DualCard = 0x04,
}

/// Outcome of the wake sequence run when a `Device` is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WakeStatus {
    /// Chip answered with this firmware version
    Awake(FirmwareVersion),
    /// Both firmware requests failed; holds the error of the second attempt.
    Unreachable(Error),
}

impl WakeStatus {
    /// True for [`WakeStatus::Awake`].
    pub fn is_awake(&self) -> bool {
        matches!(self, WakeStatus::Awake(_))
    }
}
