//! Small helpers shared across the crate: hex formatting for logs and
//! timeout arithmetic.

/// Hex formatting for frame dumps
pub mod hex;
/// Timeout defaults and poll budgets
pub mod timeout;

pub use hex::*;
pub use timeout::*;
