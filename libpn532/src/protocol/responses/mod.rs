// libpn532/src/protocol/responses/mod.rs

//! PN532 -> host results, decoded per command.

/// GetFirmwareVersion decoder
pub mod firmware;
/// InListPassiveTarget decoder
pub mod passive_target;
/// PowerDown decoder
pub mod power_down;

pub use firmware::decode_firmware_version;
pub use passive_target::decode_passive_target_uid;
pub use power_down::decode_power_down;

use crate::protocol::Command;
use crate::types::{BaudRate, FirmwareVersion, Uid};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Decoded GetFirmwareVersion result
    FirmwareVersion(FirmwareVersion),
    /// SAMConfiguration succeeded (empty result)
    SamConfigured,
    /// Raw InListPassiveTarget result: NbTg followed by target data
    PassiveTargets {
        /// Modulation the scan used
        baud: BaudRate,
        /// NbTg and target data as received
        data: Vec<u8>,
    },
    /// PowerDown status was success
    PoweredDown,
    /// Result bytes of a [`Command::Raw`]
    Raw(Vec<u8>),
}

impl Response {
    /// Decode the result bytes (response code already stripped) of `cmd`.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            Command::GetFirmwareVersion => Ok(Self::FirmwareVersion(decode_firmware_version(data)?)),
            Command::SamConfiguration { .. } => Ok(Self::SamConfigured),
            Command::InListPassiveTarget { baud, .. } => Ok(Self::PassiveTargets {
                baud: *baud,
                data: data.to_vec(),
            }),
            Command::PowerDown { .. } => {
                decode_power_down(data)?;
                Ok(Self::PoweredDown)
            }
            Command::Raw { .. } => Ok(Self::Raw(data.to_vec())),
        }
    }

    /// UID of the first passive target, if this response carries one that
    /// fits in `uid_capacity` bytes.
    pub fn uid(&self, uid_capacity: usize) -> Option<Uid> {
        match self {
            Self::PassiveTargets { baud, data } => {
                decode_passive_target_uid(data, *baud, uid_capacity)
            }
            _ => None,
        }
    }
}
