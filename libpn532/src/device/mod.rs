// libpn532/src/device/mod.rs

//! Device handle, builder, configuration and the command exchange.

pub mod builder;
pub mod config;
pub mod exchange;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::DeviceConfig;
pub use exchange::{Exchange, ExchangeState};
pub use handle::Device;
