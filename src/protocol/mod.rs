//! Protocol Module
//!
//! Message contracts layered on top of [`ByteCursor`](crate::ByteCursor).
//!
//! ## Frame Format
//! ```text
//! ┌────────────┬──────────┬─────────────────────────────┐
//! │ Opcode (2) │ Len (4)  │         Payload             │
//! └────────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Pieces
//! - [`Wire`]: serialize/deserialize a body with cursor primitives
//! - [`ClientMessage`] / [`ServerMessage`]: direction markers
//! - [`OpcodeRegistry`]: type ↔ opcode lookups, passed in explicitly
//! - codec: frame encode/decode and stream helpers

mod message;
mod registry;
mod codec;

pub use message::{ClientMessage, ServerMessage, Wire};
pub use registry::{OpcodeRegistry, Registration};
pub use codec::{
    decode_header, decode_request, decode_response, encode_request, encode_response,
    read_frame, write_frame, FrameHeader, HEADER_SIZE, MAX_PAYLOAD_SIZE,
};
