#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libpn532::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_IN_LIST_PASSIVE_TARGET, CMD_POWER_DOWN, CMD_SAM_CONFIGURATION,
};
use libpn532::device::DeviceConfig;
use libpn532::test_support::push_firmware_reply;
use libpn532::{BaudRate, Error, FirmwareVersion, SamMode};

#[test]
fn get_firmware_version_reads_four_bytes() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    common::helpers::reply(&mut mock, CMD_GET_FIRMWARE_VERSION, &[0x32, 0x01, 0x04, 0x07]);
    let fw = dev.get_firmware_version().unwrap();
    assert_eq!(fw, FirmwareVersion::from_bytes([0x32, 0x01, 0x04, 0x07]));
    assert_eq!(fw.to_string(), "PN532 v1.4 (support 0x07)");
}

#[test]
fn get_firmware_version_short_result() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    common::helpers::reply(&mut mock, CMD_GET_FIRMWARE_VERSION, &[0x32, 0x01]);
    assert_eq!(
        dev.get_firmware_version(),
        Err(Error::InvalidLength {
            expected: 4,
            actual: 2
        })
    );
}

#[test]
fn sam_disable_then_configure() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    common::helpers::reply(&mut mock, CMD_SAM_CONFIGURATION, &[]);
    common::helpers::reply(&mut mock, CMD_SAM_CONFIGURATION, &[]);

    dev.sam_disable().unwrap();
    dev.sam_configure(SamMode::WiredCard, 0x00, true).unwrap();

    let written = mock.written();
    assert_eq!(written[0], fixtures::sam_disable_frame());
    assert_eq!(&written[1][6..10], &[0x14, 0x03, 0x00, 0x01]);
}

#[test]
fn read_iso14443a_uid() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    common::helpers::reply(
        &mut mock,
        CMD_IN_LIST_PASSIVE_TARGET,
        &fixtures::iso14443a_result(&[0x04, 0xA2, 0x3B, 0x5C]),
    );

    let uid = dev
        .read_passive_target_id(BaudRate::Iso14443A, 7, 1000)
        .unwrap()
        .unwrap();
    assert_eq!(uid.to_hex(), "04a23b5c");
    assert_eq!(mock.written(), vec![fixtures::list_iso14443a_frame()]);
}

#[test]
fn read_felica_uid_with_raw_baud() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    let idm = [0x01, 0x01, 0x06, 0x01, 0xCA, 0x15, 0x2E, 0x0B];
    common::helpers::reply(&mut mock, CMD_IN_LIST_PASSIVE_TARGET, &fixtures::felica_result(idm));

    let uid = dev.read_passive_target_id_raw(0x01, 8, 1000).unwrap().unwrap();
    assert_eq!(uid.as_bytes(), &idm);
}

#[test]
fn no_card_in_field() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    common::helpers::reply(&mut mock, CMD_IN_LIST_PASSIVE_TARGET, &fixtures::no_target_result());
    assert_eq!(
        dev.read_passive_target_id(BaudRate::Iso14443A, 10, 1000),
        Ok(None)
    );
}

#[test]
fn read_failure_collapses_to_not_found() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    mock.set_never_ready(true);
    let res = dev.read_passive_target_id(BaudRate::Iso14443A, 10, 20);
    assert_eq!(res, Err(Error::AckTimeout));
    assert_eq!(res.ok().flatten(), None);
}

#[test]
fn read_passive_target_with_configured_timeout() {
    let config = DeviceConfig {
        default_timeout_ms: 20,
        ..DeviceConfig::default()
    };
    let (mut dev, mut mock) = common::helpers::awake_device_with(config);
    common::helpers::reply(
        &mut mock,
        CMD_IN_LIST_PASSIVE_TARGET,
        &fixtures::iso14443a_result(&[0x04, 0xA2, 0x3B, 0x5C]),
    );
    let uid = dev.read_passive_target(BaudRate::Iso14443A, 7).unwrap().unwrap();
    assert_eq!(uid.to_hex(), "04a23b5c");

    // nothing ready: 20 ms at the default 5 ms poll interval
    mock.clear_log();
    mock.set_never_ready(true);
    assert_eq!(
        dev.read_passive_target(BaudRate::Iso14443A, 7),
        Err(Error::AckTimeout)
    );
    assert_eq!(mock.status_polls(), 4);
}

#[test]
fn power_down_waits_after_success() {
    let config = DeviceConfig {
        powerdown_delay_ms: 9,
        ..DeviceConfig::default()
    };
    let (mut dev, mut mock) = common::helpers::awake_device_with(config);
    common::helpers::reply(&mut mock, CMD_POWER_DOWN, &[0x00]);

    dev.power_down().unwrap();
    assert_eq!(mock.written(), vec![fixtures::power_down_frame()]);
    assert_eq!(mock.delays(), vec![9]);
}

#[test]
fn power_down_error_status_skips_delay() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    common::helpers::reply(&mut mock, CMD_POWER_DOWN, &[0x27]);

    let err = dev.power_down().unwrap_err();
    assert_eq!(err, Error::Status(0x27));
    assert!(mock.delays().is_empty());
}

#[test]
fn power_down_without_status_byte() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    common::helpers::reply(&mut mock, CMD_POWER_DOWN, &[]);
    assert!(matches!(
        dev.power_down(),
        Err(Error::InvalidLength { expected: 1, actual: 0 })
    ));
    assert!(mock.delays().is_empty());
}

#[test]
fn wake_after_power_down() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    common::helpers::reply(&mut mock, CMD_POWER_DOWN, &[0x00]);
    dev.power_down().unwrap();

    push_firmware_reply(&mut mock, fixtures::FIRMWARE).unwrap();
    assert!(dev.wake().is_awake());
    assert_eq!(mock.delays(), vec![1, 2]);
}

#[test]
fn debug_dumps_do_not_change_behaviour() {
    let (mut dev, mut mock) = common::helpers::awake_device();
    dev.set_debug(true);
    common::helpers::reply(&mut mock, CMD_GET_FIRMWARE_VERSION, &fixtures::FIRMWARE);
    assert!(dev.get_firmware_version().is_ok());
    assert!(dev.config().debug);
}
