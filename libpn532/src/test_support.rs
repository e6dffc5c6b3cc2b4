//! Test support helpers intended for use by unit and integration tests.
//!
//! They script a `MockTransport` so it answers like a PN532: an ACK frame
//! followed by a response frame for each queued reply.
#![allow(dead_code)]

use crate::constants::{ACK_FRAME, TFI_PN532_TO_HOST};
use crate::device::{Device, DeviceConfig};
use crate::protocol::Frame;
use crate::transport::MockTransport;
use crate::Result;

/// PN532 -> host frame answering command `opcode` with `data`.
#[doc(hidden)]
pub fn response_frame(opcode: u8, data: &[u8]) -> Result<Vec<u8>> {
    let mut payload = Vec::with_capacity(data.len() + 1);
    payload.push(opcode.wrapping_add(1));
    payload.extend_from_slice(data);
    Frame::encode_with_tfi(TFI_PN532_TO_HOST, &payload)
}

/// Queue an ACK and the response to `opcode` on the mock.
#[doc(hidden)]
pub fn push_reply(mock: &mut MockTransport, opcode: u8, data: &[u8]) -> Result<()> {
    mock.push_read(ACK_FRAME.to_vec());
    mock.push_read(response_frame(opcode, data)?);
    Ok(())
}

/// Queue a successful GetFirmwareVersion exchange.
#[doc(hidden)]
pub fn push_firmware_reply(mock: &mut MockTransport, fw: [u8; 4]) -> Result<()> {
    push_reply(mock, crate::constants::CMD_GET_FIRMWARE_VERSION, &fw)
}

/// Build a Device whose wake sequence succeeds, and return it with a
/// handle on the shared mock. The handle's log is cleared so tests only
/// see traffic from their own calls.
#[doc(hidden)]
pub fn awake_mock_device(fw: [u8; 4]) -> Result<(Device, MockTransport)> {
    awake_mock_device_with_config(fw, DeviceConfig::default())
}

/// [`awake_mock_device`] with custom settings.
#[doc(hidden)]
pub fn awake_mock_device_with_config(
    fw: [u8; 4],
    config: DeviceConfig,
) -> Result<(Device, MockTransport)> {
    let mut mock = MockTransport::new();
    push_firmware_reply(&mut mock, fw)?;
    let device = Device::open(Box::new(mock.clone()), config);
    mock.clear_log();
    Ok((device, mock))
}
