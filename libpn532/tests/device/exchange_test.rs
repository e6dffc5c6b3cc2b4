#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::{ACK_FRAME, CMD_GET_FIRMWARE_VERSION, CMD_SAM_CONFIGURATION};
use libpn532::device::DeviceConfig;
use libpn532::Error;

#[test]
fn ack_mismatch_sends_abort() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    mock.push_read(vec![0x00, 0x00, 0xFF, 0x00, 0xFF, 0x01]);

    assert_eq!(dev.get_firmware_version(), Err(Error::NoCommandAck));
    let written = mock.written();
    assert_eq!(written.len(), 2);
    assert_eq!(written[0], common::fixtures::get_firmware_version_frame());
    assert_eq!(written[1], ACK_FRAME.to_vec());
}

#[test]
fn wrong_response_code_sends_abort() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    // SAMConfiguration answer while waiting for the firmware version
    common::helpers::reply(&mut mock, CMD_SAM_CONFIGURATION, &[]);

    assert_eq!(dev.get_firmware_version(), Err(Error::WrongCommandResponse));
    assert_eq!(mock.written().last().unwrap(), &ACK_FRAME.to_vec());
}

#[test]
fn corrupted_response_reports_checksum_error() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    mock.push_read(ACK_FRAME.to_vec());
    let mut frame = common::fixtures::firmware_response_frame();
    frame[8] ^= 0x10;
    mock.push_read(frame);

    let err = dev.get_firmware_version().unwrap_err();
    assert_eq!(err, Error::BadDataChecksum);
    assert_eq!(err.code(), Some(0x07));
    assert_eq!(mock.written().last().unwrap(), &ACK_FRAME.to_vec());
}

#[test]
fn ack_timeout_uses_poll_interval() {
    let config = DeviceConfig {
        poll_interval_ms: 10,
        ..DeviceConfig::default()
    };
    let (mut dev, mut mock) = common::helpers::awake_device_with(config);
    mock.set_never_ready(true);

    assert_eq!(dev.call_function(0x04, &[], 12, 100), Err(Error::AckTimeout));
    assert_eq!(mock.status_polls(), 10);
    assert!(mock.delays().iter().all(|&d| d == 10));
}

#[test]
fn response_timeout_after_ack() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    mock.push_read(ACK_FRAME.to_vec());
    mock.push_status(0x01);
    mock.set_never_ready(true);

    assert_eq!(dev.sam_disable(), Err(Error::ResponseTimeout));
}

#[test]
fn transactions_balance_after_success_and_failure() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    common::helpers::reply(
        &mut mock,
        CMD_GET_FIRMWARE_VERSION,
        &common::fixtures::FIRMWARE,
    );
    dev.get_firmware_version().unwrap();
    assert!(!mock.is_open());
    assert_eq!(mock.transactions(), 5);

    mock.clear_log();
    // no reads queued: the ack comes back as zeros
    assert!(dev.sam_disable().is_err());
    assert!(!mock.is_open());
    // frame write, status poll, ack read, abort write
    assert_eq!(mock.transactions(), 4);
}

#[test]
fn bus_failure_mid_exchange() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    mock.set_transaction_failures(1);
    assert!(matches!(dev.get_firmware_version(), Err(Error::Bus(_))));
    assert!(!mock.is_open());
}
