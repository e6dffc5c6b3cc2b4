// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Frame preamble byte
pub const PREAMBLE: u8 = 0x00;

/// Frame start code: 0x00 0xFF
pub const START_CODE: [u8; 2] = [0x00, 0xFF];

/// Frame postamble byte
pub const POSTAMBLE: u8 = 0x00;

/// Bytes a frame carries around its data: preamble(1) + start code(2) +
/// len(1) + lcs(1) + tfi(1) + dcs(1) + postamble(1)
pub const FRAME_OVERHEAD: usize = 8;

/// Largest LEN value (TFI + data) a normal information frame can carry
pub const MAX_FRAME_LEN: usize = 255;

/// Frame identifier (TFI) for host -> PN532 frames
pub const TFI_HOST_TO_PN532: u8 = 0xD4;

/// Frame identifier (TFI) for PN532 -> host frames
pub const TFI_PN532_TO_HOST: u8 = 0xD5;

/// ACK frame. The host sends the same bytes to abort a pending command.
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// NACK frame (asks the PN532 to resend its last response)
pub const NACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// Application-level error frame sent by the PN532 on a syntax error
pub const ERROR_FRAME: [u8; 8] = [0x00, 0x00, 0xFF, 0x01, 0xFF, 0x7F, 0x81, 0x00];

/// SPI operation byte: read the status register
pub const SPI_STATUS_READ: u8 = 0x02;
/// SPI operation byte: write a frame
pub const SPI_DATA_WRITE: u8 = 0x01;
/// SPI operation byte: read a frame
pub const SPI_DATA_READ: u8 = 0x03;
/// Status register bit set when the PN532 has data ready
pub const SPI_READY: u8 = 0x01;

/// Command code: GetFirmwareVersion
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
/// Command code: SAMConfiguration
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
/// Command code: PowerDown
pub const CMD_POWER_DOWN: u8 = 0x16;
/// Command code: InListPassiveTarget
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// PowerDown wake-up source: SPI
pub const POWERDOWN_WAKE_FROM_SPI: u8 = 0x20;
/// PowerDown: do not raise IRQ on wake
pub const POWERDOWN_NO_IRQ: u8 = 0x00;

/// Status byte the PN532 returns for a successful operation
pub const STATUS_SUCCESS: u8 = 0x00;

/// Response capacity used for InListPassiveTarget; large enough for a
/// single ISO14443B target with an 8-byte attribute response.
pub const MAX_PASSIVE_TARGET_RESPONSE: usize = 23;

/// Firmware version response length: IC, Ver, Rev, Support
pub const FIRMWARE_VERSION_LEN: usize = 4;
