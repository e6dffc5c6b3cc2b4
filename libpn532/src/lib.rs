// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for the NXP PN532 contactless reader over SPI: frame
//! codec, the command / ACK / response exchange, and typed results for
//! firmware version, passive target UIDs and power down.
//!
//! ```no_run
//! use libpn532::prelude::*;
//!
//! # fn bus() -> Box<dyn Transport> { Box::new(MockTransport::new()) }
//! let mut dev = DeviceBuilder::new().with_transport(bus()).build()?;
//! if dev.is_awake() {
//!     dev.sam_disable()?;
//!     if let Some(uid) = dev.read_passive_target_id(BaudRate::Iso14443A, 10, 1000)? {
//!         println!("card {}", uid.to_hex());
//!     }
//! }
//! # Ok::<(), libpn532::Error>(())
//! ```
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
