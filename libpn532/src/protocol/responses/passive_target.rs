// libpn532/src/protocol/responses/passive_target.rs

//! InListPassiveTarget result: UID of the first target.

use crate::protocol::parser;
use crate::types::{BaudRate, Uid};

/// Where the UID sits in an InListPassiveTarget result for one target.
///
/// Layout after NbTg(1) Tg(1):
/// - ISO14443A: SENS_RES(2) SEL_RES(1) NFCIDLength(1) NFCID1
/// - FeliCa: POL_RES length(1) response code(1) NFCID2(8) ...
/// - ISO14443B: ATQB(12) ATTRIB_RES length(1) ATTRIB_RES
/// - Jewel: SENS_RES(2) JEWELID(4)
fn uid_location(data: &[u8], baud: BaudRate) -> Option<(usize, usize)> {
    match baud {
        BaudRate::Iso14443A => {
            let len = parser::byte_at(data, 5).ok()?;
            Some((6, len as usize))
        }
        BaudRate::Felica212 | BaudRate::Felica424 => Some((4, 8)),
        // ISO14443B flavours differ; the most common carries the UID in
        // the attribute response.
        BaudRate::Iso14443B => {
            let len = parser::byte_at(data, 14).ok()?;
            Some((15, len as usize))
        }
        BaudRate::InnovisionJewel => Some((4, 4)),
    }
}

/// Extract the UID of the first target from an InListPassiveTarget result
/// (response code stripped). Returns None when no target was found or the
/// reported layout does not fit the data or `uid_capacity`.
pub fn decode_passive_target_uid(data: &[u8], baud: BaudRate, uid_capacity: usize) -> Option<Uid> {
    // NbTg == 0, or nothing beyond it
    if data.len() <= 1 || data[0] == 0 {
        return None;
    }
    let (offset, len) = uid_location(data, baud)?;
    if len > uid_capacity {
        return None;
    }
    parser::slice_at(data, offset, len).ok().map(Uid::from)
}
