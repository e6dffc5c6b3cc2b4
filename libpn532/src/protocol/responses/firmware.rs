// libpn532/src/protocol/responses/firmware.rs

//! GetFirmwareVersion result.

use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode a GetFirmwareVersion result: IC(1) + Ver(1) + Rev(1) + Support(1)
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    parser::exact_len(data, crate::constants::FIRMWARE_VERSION_LEN)?;
    FirmwareVersion::try_from(data)
}
