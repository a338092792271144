//! Frame codec
//!
//! Wraps message bodies in an opcode-tagged frame.
//!
//! ## Wire Format
//! ```text
//! ┌────────────┬──────────┬─────────────────────────────┐
//! │ Opcode (2) │ Len (4)  │         Payload             │
//! └────────────┴──────────┴─────────────────────────────┘
//! ```
//! The header is big-endian. The payload is whatever the message's
//! [`Wire::serialize`] wrote, in the cursor's default little-endian order.

use std::io::{Read, Write};

use super::{ClientMessage, OpcodeRegistry, ServerMessage, Wire};
use crate::cursor::{ByteCursor, ByteOrder};
use crate::error::{CursorError, Result};

/// Header size: 2 bytes opcode + 4 bytes length
pub const HEADER_SIZE: usize = 6;

/// Maximum payload size (16 MB)
pub const MAX_PAYLOAD_SIZE: u32 = 16 * 1024 * 1024;

/// Parsed frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub opcode: u16,
    pub payload_len: u32,
}

impl FrameHeader {
    /// Total frame size including the header
    pub fn frame_len(&self) -> usize {
        HEADER_SIZE + self.payload_len as usize
    }
}

// =============================================================================
// Header Encoding/Decoding
// =============================================================================

/// Decode and validate a frame header from the first `HEADER_SIZE` bytes
pub fn decode_header(bytes: &[u8]) -> Result<FrameHeader> {
    let mut cursor = ByteCursor::from(bytes.get(..HEADER_SIZE).unwrap_or(bytes));
    cursor.set_byte_order(ByteOrder::Big);

    let opcode = cursor.read_u16()?;
    let payload_len = cursor.read_u32()?;

    if payload_len > MAX_PAYLOAD_SIZE {
        return Err(CursorError::Protocol(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_PAYLOAD_SIZE
        )));
    }

    Ok(FrameHeader {
        opcode,
        payload_len,
    })
}

/// Encode a body under `opcode`
fn encode_frame<M: Wire>(opcode: u16, message: &M) -> Result<Vec<u8>> {
    let mut body = ByteCursor::new();
    message.serialize(&mut body)?;

    let payload_len = u32::try_from(body.len())
        .ok()
        .filter(|len| *len <= MAX_PAYLOAD_SIZE)
        .ok_or_else(|| {
            CursorError::Protocol(format!(
                "Payload too large: {} bytes (max {})",
                body.len(),
                MAX_PAYLOAD_SIZE
            ))
        })?;

    let mut frame = ByteCursor::with_capacity(HEADER_SIZE + body.len());
    frame.set_byte_order(ByteOrder::Big);
    frame.write_u16(opcode);
    frame.write_u32(payload_len);
    frame.write_bytes(body.as_slice());

    Ok(frame.into_vec())
}

/// Decode a body, checking the opcode and that the payload is fully consumed
fn decode_frame<M: Wire>(expected_opcode: u16, bytes: &[u8]) -> Result<M> {
    let header = decode_header(bytes)?;

    if header.opcode != expected_opcode {
        return Err(CursorError::Protocol(format!(
            "Opcode mismatch: expected 0x{:04x}, got 0x{:04x}",
            expected_opcode, header.opcode
        )));
    }

    if bytes.len() < header.frame_len() {
        return Err(CursorError::Boundary {
            position: HEADER_SIZE,
            needed: header.payload_len as usize,
            available: bytes.len() - HEADER_SIZE,
        });
    }

    let mut body = ByteCursor::from(&bytes[HEADER_SIZE..header.frame_len()]);
    let message = M::deserialize(&mut body)?;

    if body.remaining() > 0 {
        return Err(CursorError::Protocol(format!(
            "Opcode 0x{:04x}: {} unread payload bytes",
            header.opcode,
            body.remaining()
        )));
    }

    Ok(message)
}

// =============================================================================
// Request / Response Encoding
// =============================================================================

/// Encode a client message into a frame
pub fn encode_request<M: ClientMessage>(registry: &OpcodeRegistry, message: &M) -> Result<Vec<u8>> {
    encode_frame(registry.client_opcode::<M>()?, message)
}

/// Decode a frame holding the client message `M`
pub fn decode_request<M: ClientMessage>(registry: &OpcodeRegistry, bytes: &[u8]) -> Result<M> {
    decode_frame(registry.client_opcode::<M>()?, bytes)
}

/// Encode a server message into a frame
pub fn encode_response<M: ServerMessage>(registry: &OpcodeRegistry, message: &M) -> Result<Vec<u8>> {
    encode_frame(registry.server_opcode::<M>()?, message)
}

/// Decode a frame holding the server message `M`
pub fn decode_response<M: ServerMessage>(registry: &OpcodeRegistry, bytes: &[u8]) -> Result<M> {
    decode_frame(registry.server_opcode::<M>()?, bytes)
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read one complete frame from a stream
///
/// Blocks until the whole frame is received or an error occurs. The returned
/// bytes include the header, ready for `decode_request`/`decode_response`.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<(FrameHeader, Vec<u8>)> {
    let mut header_bytes = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header_bytes)?;

    let header = decode_header(&header_bytes)?;

    let mut frame = vec![0u8; header.frame_len()];
    frame[..HEADER_SIZE].copy_from_slice(&header_bytes);
    if header.payload_len > 0 {
        reader.read_exact(&mut frame[HEADER_SIZE..])?;
    }

    Ok((header, frame))
}

/// Write an encoded frame to a stream
pub fn write_frame<W: Write>(writer: &mut W, frame: &[u8]) -> Result<()> {
    writer.write_all(frame)?;
    writer.flush()?;
    Ok(())
}
