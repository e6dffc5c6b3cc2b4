// libpn532/src/protocol/codec.rs

//! Glue between [`Command`]/[`Response`] and wire frames.

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::parser;
use super::responses::Response;

/// Encode a Command into a full wire frame (with preamble/LCS/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode(&cmd.encode())
}

/// Decode a raw response read for `cmd`: validate the frame, match the
/// response code (command code + 1) and return the bytes after it.
pub fn decode_response_data(cmd: &Command, raw: &[u8]) -> Result<Vec<u8>> {
    // +1 for the response code
    let mut data = Frame::decode(raw, cmd.response_capacity() + 1)?;
    parser::expect_response_code(&data, cmd.response_code())?;
    data.remove(0);
    Ok(data)
}

/// Decode a raw response read and parse it into a typed Response.
pub fn decode_response_frame(cmd: &Command, raw: &[u8]) -> Result<Response> {
    let data = decode_response_data(cmd, raw)?;
    Response::decode(cmd, &data)
}
