// helpers.rs: thin wrappers over libpn532::test_support

use libpn532::device::{Device, DeviceConfig};
use libpn532::test_support;
use libpn532::transport::MockTransport;

use super::fixtures::FIRMWARE;

/// Device that passed its wake sequence, plus a handle on its mock bus.
pub fn awake_device() -> (Device, MockTransport) {
    super::init_logger();
    test_support::awake_mock_device(FIRMWARE).unwrap()
}

pub fn awake_device_with(config: DeviceConfig) -> (Device, MockTransport) {
    super::init_logger();
    test_support::awake_mock_device_with_config(FIRMWARE, config).unwrap()
}

/// Queue ACK + response for `opcode`.
pub fn reply(mock: &mut MockTransport, opcode: u8, data: &[u8]) {
    test_support::push_reply(mock, opcode, data).unwrap();
}
