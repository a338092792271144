//! Cursor Module
//!
//! The binary read/write cursor over a growable byte buffer.
//!
//! ## Responsibilities
//! - Own a contiguous, geometrically-growing storage region
//! - Track a single position shared by reads and writes
//! - Track the logical length (high-water mark of written bytes)
//! - Encode/decode primitives in a selectable byte order
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────────┬──────────────────┐
//! │        logical range         │  spare capacity  │
//! └──────────────────────────────┴──────────────────┘
//! 0        ▲ position            len              capacity
//! ```
//! Invariant: `0 <= position <= len <= capacity`.
//!
//! ## Shared Cursor
//! Reads and writes move the same position. Writing after a partial read
//! overwrites the unread tail at the current position instead of appending.
//! Call [`ByteCursor::seek`] with [`ByteCursor::len`] to append explicitly.

mod primitives;
mod text;
mod timestamp;

pub use text::MAX_STRING_LEN;
pub use timestamp::{datetime_to_ticks, ticks_to_datetime, TICKS_PER_SECOND};

use bytes::Bytes;

use crate::config::CursorConfig;
use crate::error::{CursorError, Result};

/// Byte order applied to multi-byte encodes and decodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    /// Byte order of the host platform
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }
}

/// Binary read/write cursor over an owned, growable byte buffer
///
/// Not internally synchronized. Use one cursor per concurrent task or wrap
/// it in a lock.
#[derive(Debug, Clone)]
pub struct ByteCursor {
    /// Backing storage; `storage.len()` is the capacity, zero-filled past `len`
    storage: Vec<u8>,

    /// Shared read/write offset
    position: usize,

    /// High-water mark of written bytes
    len: usize,

    /// Order for all subsequent multi-byte operations
    byte_order: ByteOrder,
}

impl ByteCursor {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create an empty cursor with the default configuration
    pub fn new() -> Self {
        Self::with_config(&CursorConfig::default())
    }

    /// Create an empty cursor with the given starting capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity],
            position: 0,
            len: 0,
            byte_order: ByteOrder::Little,
        }
    }

    /// Create an empty cursor from a config
    pub fn with_config(config: &CursorConfig) -> Self {
        let mut cursor = Self::with_capacity(config.initial_capacity);
        cursor.byte_order = config.byte_order;
        cursor
    }

    /// Take ownership of an existing byte sequence
    ///
    /// The cursor starts at position 0 with the whole sequence as its logical range.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self {
            storage: bytes,
            position: 0,
            len,
            byte_order: ByteOrder::Little,
        }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Current shared read/write position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Logical length (bytes written so far)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated storage in bytes
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Bytes left to read before hitting the logical length
    pub fn remaining(&self) -> usize {
        self.len - self.position
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Change the order used by all subsequent multi-byte operations
    ///
    /// Bytes already written or read are unaffected.
    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.byte_order = order;
    }

    /// Borrow the logical range
    pub fn as_slice(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    // =========================================================================
    // Positioning
    // =========================================================================

    /// Move the shared position, bounded to `[0, len]`
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.len {
            return Err(CursorError::PositionOutOfRange {
                position,
                length: self.len,
            });
        }
        self.position = position;
        Ok(())
    }

    /// Move the position back to 0
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    // =========================================================================
    // Snapshot / Lifecycle
    // =========================================================================

    /// Fresh copy of exactly the logical range
    pub fn snapshot(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Copy the logical range into a `Bytes` handle
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_slice())
    }

    /// Consume the cursor and return its logical range
    pub fn into_vec(mut self) -> Vec<u8> {
        self.storage.truncate(self.len);
        self.storage
    }

    /// Reset position and length to 0, keeping storage
    pub fn clear(&mut self) {
        self.position = 0;
        self.len = 0;
    }

    /// Discard storage and reset position and length to 0
    ///
    /// Later writes regrow storage from zero capacity.
    pub fn release(&mut self) {
        tracing::trace!(capacity = self.storage.len(), "releasing cursor storage");
        self.storage = Vec::new();
        self.position = 0;
        self.len = 0;
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Grow storage so that `position + additional` bytes fit
    ///
    /// Doubles the capacity, or jumps straight to the required size when
    /// doubling is not enough.
    fn ensure_capacity(&mut self, additional: usize) {
        let required = self.position + additional;
        let capacity = self.storage.len();
        if required <= capacity {
            return;
        }

        let new_capacity = capacity.saturating_mul(2).max(required);
        tracing::trace!(from = capacity, to = new_capacity, "growing cursor storage");
        self.storage.resize(new_capacity, 0);
    }

    /// Copy `bytes` in at the position, advancing it and the high-water mark
    pub(crate) fn put_slice(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.ensure_capacity(bytes.len());
        let end = self.position + bytes.len();
        self.storage[self.position..end].copy_from_slice(bytes);
        self.position = end;
        if end > self.len {
            self.len = end;
        }
    }

    /// Fail with a boundary error unless `needed` bytes remain
    fn check_available(&self, needed: usize) -> Result<()> {
        let available = self.remaining();
        if needed > available {
            tracing::debug!(
                position = self.position,
                needed,
                available,
                "boundary violation on read"
            );
            return Err(CursorError::Boundary {
                position: self.position,
                needed,
                available,
            });
        }
        Ok(())
    }

    /// Borrow the next `n` bytes and advance past them
    pub(crate) fn take_slice(&mut self, n: usize) -> Result<&[u8]> {
        self.check_available(n)?;
        let start = self.position;
        self.position += n;
        Ok(&self.storage[start..start + n])
    }

    /// Read a fixed-width array and advance past it
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take_slice(N)?);
        Ok(out)
    }

    /// Run a multi-step read, restoring the position if any step fails
    pub(crate) fn transactional<T>(&mut self, read: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let start = self.position;
        let result = read(self);
        if result.is_err() {
            self.position = start;
        }
        result
    }
}

impl Default for ByteCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl From<&[u8]> for ByteCursor {
    fn from(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }
}

impl From<Bytes> for ByteCursor {
    /// Reuses the allocation when the handle is unique
    fn from(bytes: Bytes) -> Self {
        Self::from_vec(Vec::from(bytes))
    }
}
