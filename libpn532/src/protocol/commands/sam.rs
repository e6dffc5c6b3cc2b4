// libpn532/src/protocol/commands/sam.rs

//! SAMConfiguration parameters.

use crate::types::SamMode;

/// Encode SAMConfiguration params: mode, timeout, IRQ use
pub fn encode_sam_configuration(mode: SamMode, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![mode as u8, timeout, use_irq as u8]
}
