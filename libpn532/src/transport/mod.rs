// libpn532/src/transport/mod.rs

//! Bus transports: the [`Transport`] trait and its implementations.

#[cfg(feature = "embedded-hal")]
pub mod hal;
pub mod mock;
pub mod traits;

#[cfg(feature = "embedded-hal")]
pub use hal::HalTransport;
pub use mock::MockTransport;
pub use traits::{Transaction, Transport};
