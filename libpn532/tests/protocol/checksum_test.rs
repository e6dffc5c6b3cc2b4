use libpn532::protocol::checksum::{dcs, lcs, sum};
use libpn532::protocol::Frame;
use proptest::prelude::*;

#[test]
fn checksum_of_known_frames() {
    // GetFirmwareVersion: LEN 2, TFI D4, cmd 02
    assert_eq!(lcs(0x02), 0xFE);
    assert_eq!(dcs(&[0xD4, 0x02]), 0x2A);
    // InListPassiveTarget ISO14443A
    assert_eq!(dcs(&[0xD4, 0x4A, 0x01, 0x00]), 0xE1);
}

proptest! {
    #[test]
    fn lcs_cancels_len(len in any::<u8>()) {
        prop_assert_eq!(len.wrapping_add(lcs(len)), 0);
    }

    #[test]
    fn dcs_cancels_data(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut with_dcs = data.clone();
        with_dcs.push(dcs(&data));
        prop_assert_eq!(sum(&with_dcs), 0);
    }

    #[test]
    fn encoded_frame_checksums_hold(data in prop::collection::vec(any::<u8>(), 1..=33)) {
        let frame = Frame::encode(&data).unwrap();
        let len = frame[3];
        prop_assert_eq!(len as usize, data.len() + 1);
        prop_assert_eq!(len.wrapping_add(frame[4]), 0);
        // TFI .. DCS
        prop_assert_eq!(sum(&frame[5..5 + len as usize + 1]), 0);
    }
}
