// libpn532/src/protocol/commands/mod.rs

//! Host -> PN532 commands.

/// InListPassiveTarget encoder
pub mod passive_target;
/// PowerDown encoder
pub mod power_down;
/// SAMConfiguration encoder
pub mod sam;

pub use passive_target::encode_in_list_passive_target;
pub use power_down::encode_power_down;
pub use sam::encode_sam_configuration;

use crate::constants;
use crate::types::{BaudRate, SamMode};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// GetFirmwareVersion (0x02), no parameters
    GetFirmwareVersion,
    /// SAMConfiguration (0x14)
    SamConfiguration {
        /// How the SAM is used
        mode: SamMode,
        /// Virtual card timeout in 50 ms units, 0 = none
        timeout: u8,
        /// Drive the IRQ pin
        use_irq: bool,
    },
    /// InListPassiveTarget (0x4A)
    InListPassiveTarget {
        /// MaxTg: 1 or 2
        max_targets: u8,
        /// Modulation to scan with
        baud: BaudRate,
    },
    /// PowerDown (0x16)
    PowerDown {
        /// Bit mask of wake-up sources
        wakeup_enable: u8,
        /// Raise IRQ on wake-up
        generate_irq: bool,
    },
    /// Any other command, with the caller choosing the response capacity.
    Raw {
        /// Command code
        opcode: u8,
        /// Parameter bytes after the command code
        params: Vec<u8>,
        /// Largest result accepted, response code excluded
        capacity: usize,
    },
}

impl Command {
    /// SAMConfiguration in normal mode: no timeout (ACK is used to abort)
    /// and no IRQ.
    pub fn sam_disable() -> Self {
        Self::SamConfiguration {
            mode: SamMode::Normal,
            timeout: 0x00,
            use_irq: false,
        }
    }

    /// InListPassiveTarget for a single target.
    pub fn list_one_target(baud: BaudRate) -> Self {
        Self::InListPassiveTarget {
            max_targets: 1,
            baud,
        }
    }

    /// PowerDown that wakes on SPI activity without raising IRQ.
    pub fn power_down_spi() -> Self {
        Self::PowerDown {
            wakeup_enable: constants::POWERDOWN_WAKE_FROM_SPI,
            generate_irq: false,
        }
    }

    /// Return the PN532 command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => constants::CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => constants::CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => constants::CMD_IN_LIST_PASSIVE_TARGET,
            Self::PowerDown { .. } => constants::CMD_POWER_DOWN,
            Self::Raw { opcode, .. } => *opcode,
        }
    }

    /// Response code the PN532 answers with (command code + 1).
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Parameter bytes following the command code.
    pub fn params(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => Vec::new(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget { max_targets, baud } => {
                encode_in_list_passive_target(*max_targets, *baud)
            }
            Self::PowerDown {
                wakeup_enable,
                generate_irq,
            } => encode_power_down(*wakeup_enable, *generate_irq),
            Self::Raw { params, .. } => params.clone(),
        }
    }

    /// Encode the command into the frame data (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        let params = self.params();
        let mut buf = Vec::with_capacity(1 + params.len());
        buf.push(self.command_code());
        buf.extend_from_slice(&params);
        buf
    }

    /// Largest result the command may return, response code excluded.
    pub fn response_capacity(&self) -> usize {
        match self {
            Self::GetFirmwareVersion => constants::FIRMWARE_VERSION_LEN,
            Self::SamConfiguration { .. } => 0,
            Self::InListPassiveTarget { .. } => constants::MAX_PASSIVE_TARGET_RESPONSE,
            Self::PowerDown { .. } => 1,
            Self::Raw { capacity, .. } => *capacity,
        }
    }
}
