// libpn532/src/protocol/responses/power_down.rs

//! PowerDown status byte.

use crate::constants::STATUS_SUCCESS;
use crate::protocol::parser;
use crate::{Error, Result};

/// Decode a PowerDown result: a single status byte that must be 0x00.
pub fn decode_power_down(data: &[u8]) -> Result<()> {
    parser::exact_len(data, 1)?;
    match data[0] {
        STATUS_SUCCESS => Ok(()),
        status => Err(Error::Status(status)),
    }
}
