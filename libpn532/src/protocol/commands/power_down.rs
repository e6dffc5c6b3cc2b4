// libpn532/src/protocol/commands/power_down.rs

//! PowerDown parameters.

/// Encode PowerDown params: WakeUpEnable, GenerateIRQ
pub fn encode_power_down(wakeup_enable: u8, generate_irq: bool) -> Vec<u8> {
    vec![wakeup_enable, generate_irq as u8]
}
