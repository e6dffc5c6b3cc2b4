//! Scan for a card against a scripted PN532.
//!
//! Swap `MockTransport` for `HalTransport` (feature `embedded-hal`) to talk
//! to real hardware. Run with `RUST_LOG=debug` to see the frame dumps.

use anyhow::{bail, Result};
use libpn532::constants::{CMD_IN_LIST_PASSIVE_TARGET, CMD_SAM_CONFIGURATION};
use libpn532::prelude::*;
use libpn532::test_support::{push_firmware_reply, push_reply};

fn main() -> Result<()> {
    env_logger::init();

    let mut bus = MockTransport::new();
    push_firmware_reply(&mut bus, [0x32, 0x01, 0x06, 0x07])?;
    push_reply(&mut bus, CMD_SAM_CONFIGURATION, &[])?;
    push_reply(
        &mut bus,
        CMD_IN_LIST_PASSIVE_TARGET,
        &[0x01, 0x01, 0x00, 0x44, 0x00, 0x07, 0x04, 0x51, 0x6C, 0x8A, 0x2B, 0x4D, 0x80],
    )?;

    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(bus))
        .debug(true)
        .build()?;

    let fw = match dev.wake_status() {
        WakeStatus::Awake(fw) => *fw,
        WakeStatus::Unreachable(e) => bail!("PN532 not responding: {e}"),
    };
    println!("found {fw}");

    dev.sam_disable()?;
    match dev.read_passive_target(BaudRate::Iso14443A, 10)? {
        Some(uid) => println!("{} card, uid {}", BaudRate::Iso14443A, uid.to_hex()),
        None => println!("no card"),
    }
    Ok(())
}
