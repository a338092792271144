//! Opaque object hook
//!
//! The single entry point for embedding serialized objects in a cursor.
//!
//! ## Blob Format
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (4)  │     payload bytes (Len)     │
//! └──────────┴─────────────────────────────┘
//! ```
//! `Len` is a u32 in the cursor's byte order. The cursor never interprets the
//! payload. [`ByteCursor::write_object`] fills it with bincode; callers with
//! another codec use [`ByteCursor::write_blob`] directly.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::{CursorError, Result};

impl ByteCursor {
    // =========================================================================
    // Blob Framing
    // =========================================================================

    /// Write a u32 length prefix followed by the payload verbatim
    pub fn write_blob(&mut self, payload: &[u8]) -> Result<()> {
        let len = u32::try_from(payload.len())
            .map_err(|_| CursorError::BlobTooLarge { len: payload.len() })?;
        self.write_u32(len);
        self.put_slice(payload);
        Ok(())
    }

    /// Read a u32 length prefix and return that many raw bytes
    ///
    /// A short payload leaves the position before the prefix.
    pub fn read_blob(&mut self) -> Result<Vec<u8>> {
        self.transactional(|cursor| {
            let len = cursor.read_u32()? as usize;
            Ok(cursor.take_slice(len)?.to_vec())
        })
    }

    // =========================================================================
    // Object Codec (bincode)
    // =========================================================================

    /// Encode `value` with bincode and write it as a blob
    pub fn write_object<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let payload = bincode::serialize(value)?;
        self.write_blob(&payload)
    }

    /// Read a blob and decode it with bincode
    ///
    /// A payload that fails to decode leaves the position before the prefix.
    pub fn read_object<T: DeserializeOwned>(&mut self) -> Result<T> {
        self.transactional(|cursor| {
            let payload = cursor.read_blob()?;
            Ok(bincode::deserialize(&payload)?)
        })
    }
}
