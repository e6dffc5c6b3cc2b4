//! Timeout defaults and the poll budget derived from them.

/// Timeout for exchanges when a caller doesn't provide one (ms).
pub const DEFAULT_TIMEOUT_MS: u32 = 1000;

/// Timeout for the short control commands: GetFirmwareVersion and
/// SAMConfiguration (ms).
pub const CONTROL_TIMEOUT_MS: u32 = 500;

/// Number of status polls made within `timeout_ms` when sleeping
/// `interval_ms` after each miss. Always at least one so a zero timeout
/// still checks readiness once.
pub fn poll_budget(timeout_ms: u32, interval_ms: u32) -> u32 {
    match interval_ms {
        0 => timeout_ms.max(1),
        i => timeout_ms.div_ceil(i).max(1),
    }
}
