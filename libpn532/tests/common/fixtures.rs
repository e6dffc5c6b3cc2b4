// fixtures.rs: commonly used PN532 frames and command results

/// IC 0x32 (PN532), firmware 1.6, supports ISO14443A/B and ISO18092
pub const FIRMWARE: [u8; 4] = [0x32, 0x01, 0x06, 0x07];

pub fn hex_bytes(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}

/// Host frames as they appear on the wire
pub fn get_firmware_version_frame() -> Vec<u8> {
    hex_bytes("00 00 ff 02 fe d4 02 2a 00")
}

pub fn sam_disable_frame() -> Vec<u8> {
    hex_bytes("00 00 ff 05 fb d4 14 01 00 00 17 00")
}

pub fn list_iso14443a_frame() -> Vec<u8> {
    hex_bytes("00 00 ff 04 fc d4 4a 01 00 e1 00")
}

pub fn power_down_frame() -> Vec<u8> {
    hex_bytes("00 00 ff 04 fc d4 16 20 00 f6 00")
}

/// PN532 answer to GetFirmwareVersion
pub fn firmware_response_frame() -> Vec<u8> {
    hex_bytes("00 00 ff 06 fa d5 03 32 01 06 07 e8 00")
}

/// InListPassiveTarget results (response code stripped)
pub fn iso14443a_result(uid: &[u8]) -> Vec<u8> {
    // NbTg, Tg, SENS_RES, SEL_RES, NFCIDLength
    let mut v = vec![0x01, 0x01, 0x00, 0x44, 0x00, uid.len() as u8];
    v.extend_from_slice(uid);
    v
}

pub fn felica_result(idm: [u8; 8]) -> Vec<u8> {
    // NbTg, Tg, POL_RES length, response code
    let mut v = vec![0x01, 0x01, 0x12, 0x01];
    v.extend_from_slice(&idm);
    v.extend_from_slice(&[0x03, 0x01, 0x4B, 0x02, 0x4F, 0x49, 0x93, 0xFF]);
    v
}

pub fn iso14443b_result(attrib: &[u8]) -> Vec<u8> {
    // NbTg, Tg, ATQB(12)
    let mut v = vec![0x01, 0x01];
    v.extend_from_slice(&[
        0x50, 0x1A, 0x2B, 0x3C, 0x4D, 0x00, 0x00, 0x00, 0x00, 0x00, 0x81, 0x81,
    ]);
    v.push(attrib.len() as u8);
    v.extend_from_slice(attrib);
    v
}

pub fn jewel_result(id: [u8; 4]) -> Vec<u8> {
    let mut v = vec![0x01, 0x01, 0x00, 0x0C];
    v.extend_from_slice(&id);
    v
}

/// No target in the field
pub fn no_target_result() -> Vec<u8> {
    vec![0x00]
}
