// libpn532/src/protocol/mod.rs

//! PN532 frame format, commands and responses. No bus access happens here.

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::*;
pub use frame::Frame;
pub use responses::*;
