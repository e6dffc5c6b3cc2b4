// libpn532/src/protocol/frame.rs

//! Normal information frame encode/decode.

use crate::constants::{
    ACK_FRAME, FRAME_OVERHEAD, MAX_FRAME_LEN, POSTAMBLE, PREAMBLE, START_CODE, TFI_HOST_TO_PN532,
    TFI_PN532_TO_HOST,
};
use crate::protocol::checksum::{dcs, lcs, sum};
use crate::{Error, Result};

/// PN532 normal information frame helper. Provides encode/decode of the wire frame
/// Format: [Preamble(1)] [StartCode(2)] [Len(1)] [LCS(1)] [TFI(1)] [Data(n)] [DCS(1)] [Postamble(1)]
/// Len counts TFI + Data.
pub struct Frame;

impl Frame {
    /// Encode host -> PN532 data (command code + params) into a full frame
    pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
        Self::encode_with_tfi(TFI_HOST_TO_PN532, data)
    }

    /// Encode data behind an explicit frame identifier. Mostly useful for
    /// building PN532 -> host frames in tests and simulators.
    pub fn encode_with_tfi(tfi: u8, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() + 1 > MAX_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_FRAME_LEN - 1,
                actual: data.len(),
            });
        }

        let len = (data.len() + 1) as u8;
        let mut out = Vec::with_capacity(data.len() + FRAME_OVERHEAD);
        out.push(PREAMBLE);
        out.extend_from_slice(&START_CODE);
        out.push(len);
        out.push(lcs(len));
        out.push(tfi);
        out.extend_from_slice(data);
        out.push(dcs(&out[5..]));
        out.push(POSTAMBLE);
        Ok(out)
    }

    /// Size of the raw read needed to receive `capacity` data bytes.
    pub fn read_len(capacity: usize) -> usize {
        capacity + FRAME_OVERHEAD
    }

    /// Decode a raw PN532 -> host read and return the data after the TFI.
    ///
    /// `raw` is normally `capacity + 8` bytes long. Checks run in a fixed
    /// order: markers and checksums are verified before the length field is
    /// trusted for slicing.
    pub fn decode(raw: &[u8], capacity: usize) -> Result<Vec<u8>> {
        let n = raw.len();

        // Frames sometimes arrive with a missing or padded preamble, so
        // swallow every zero before the 0xFF start byte.
        let mut offset = raw
            .iter()
            .position(|&b| b != PREAMBLE)
            .ok_or(Error::BadPreamble)?;
        if raw[offset] != START_CODE[1] {
            return Err(Error::BadPacketStart);
        }
        offset += 1;
        if offset == n {
            return Err(Error::EmptyPacket);
        }

        let len = raw[offset];
        if len == 0 {
            return Err(Error::EmptyResponse);
        }
        let lcs_actual = *raw.get(offset + 1).ok_or(Error::BadLengthChecksum)?;
        if len.wrapping_add(lcs_actual) != 0 {
            return Err(Error::BadLengthChecksum);
        }
        offset += 2;

        let len = len as usize;
        // DCS and postamble must fit after the claimed data
        if offset + len + 2 > n {
            return Err(Error::LongResponse);
        }

        // TFI .. DCS inclusive
        if sum(&raw[offset..offset + len + 1]) != 0 {
            return Err(Error::BadDataChecksum);
        }
        if raw[offset] != TFI_PN532_TO_HOST {
            return Err(Error::BadTfi);
        }
        if raw[offset + len + 1] != POSTAMBLE {
            return Err(Error::BadPostamble);
        }

        let data_len = len - 1;
        // A missing preamble makes the frame look longer than requested
        if data_len > capacity {
            return Err(Error::LongResponse);
        }
        Ok(raw[offset + 1..offset + 1 + data_len].to_vec())
    }

    /// True when `raw` is exactly the ACK frame.
    pub fn is_ack(raw: &[u8]) -> bool {
        raw == ACK_FRAME
    }
}
