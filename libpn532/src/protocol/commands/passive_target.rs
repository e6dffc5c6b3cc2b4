// libpn532/src/protocol/commands/passive_target.rs

//! InListPassiveTarget parameters.

use crate::types::BaudRate;

/// Encode InListPassiveTarget params: MaxTg, BrTy
pub fn encode_in_list_passive_target(max_targets: u8, baud: BaudRate) -> Vec<u8> {
    vec![max_targets, baud.as_u8()]
}
