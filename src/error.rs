//! Error types for ByteCursor
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CursorError
pub type Result<T> = std::result::Result<T, CursorError>;

/// Unified error type for ByteCursor operations
#[derive(Debug, Error)]
pub enum CursorError {
    // -------------------------------------------------------------------------
    // Boundary Errors
    // -------------------------------------------------------------------------
    #[error("Boundary violation at position {position}: need {needed} bytes, {available} available")]
    Boundary {
        position: usize,
        needed: usize,
        available: usize,
    },

    #[error("Position {position} is past the logical length {length}")]
    PositionOutOfRange { position: usize, length: usize },

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    #[error("String payload of {len} bytes exceeds the 65535 byte limit")]
    StringTooLong { len: usize },

    #[error("Blob payload of {len} bytes exceeds the u32 length prefix")]
    BlobTooLarge { len: usize },

    #[error("Invalid UTF-8 in string payload: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Timestamp tick count {0} is not representable")]
    InvalidTimestamp(i64),

    #[error("Object codec error: {0}")]
    Object(String),

    // -------------------------------------------------------------------------
    // Registry / Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Unknown opcode: 0x{0:04x}")]
    UnknownOpcode(u16),

    #[error("Type not registered: {0}")]
    UnregisteredType(&'static str),

    #[error("Opcode 0x{0:04x} is already registered")]
    DuplicateOpcode(u16),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CursorError {
    /// True for the boundary violation raised by short reads
    pub fn is_boundary(&self) -> bool {
        matches!(self, CursorError::Boundary { .. })
    }
}

impl From<bincode::Error> for CursorError {
    fn from(err: bincode::Error) -> Self {
        CursorError::Object(err.to_string())
    }
}
