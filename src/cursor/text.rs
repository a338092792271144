//! String and raw byte-block codecs
//!
//! ## String Format
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (2)  │      UTF-8 bytes (Len)      │
//! └──────────┴─────────────────────────────┘
//! ```
//! `Len` is a byte count in the cursor's byte order. Raw byte blocks carry
//! no prefix; framing them is up to the caller.

use super::ByteCursor;
use crate::error::{CursorError, Result};

/// Largest string payload the 16-bit prefix can describe
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

impl ByteCursor {
    // =========================================================================
    // Strings
    // =========================================================================

    /// Write a length-prefixed UTF-8 string
    ///
    /// Payloads over [`MAX_STRING_LEN`] bytes are rejected with
    /// `StringTooLong` and nothing is written.
    pub fn write_str(&mut self, value: &str) -> Result<()> {
        let bytes = value.as_bytes();
        if bytes.len() > MAX_STRING_LEN {
            return Err(CursorError::StringTooLong { len: bytes.len() });
        }
        self.write_u16(bytes.len() as u16);
        self.put_slice(bytes);
        Ok(())
    }

    /// Write an optional string; `None` encodes as an empty string
    pub fn write_opt_str(&mut self, value: Option<&str>) -> Result<()> {
        self.write_str(value.unwrap_or_default())
    }

    /// Read a length-prefixed UTF-8 string
    ///
    /// On any failure the position is left where it was before the prefix.
    pub fn read_string(&mut self) -> Result<String> {
        self.transactional(|cursor| {
            let len = cursor.read_u16()? as usize;
            if len == 0 {
                return Ok(String::new());
            }
            let bytes = cursor.take_slice(len)?.to_vec();
            Ok(String::from_utf8(bytes)?)
        })
    }

    // =========================================================================
    // Raw Byte Blocks
    // =========================================================================

    /// Append bytes verbatim, with no length prefix
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.put_slice(bytes);
    }

    /// Copy out the next `n` bytes
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        Ok(self.take_slice(n)?.to_vec())
    }

    /// Fill `dst` from the next `dst.len()` bytes
    pub fn read_into(&mut self, dst: &mut [u8]) -> Result<()> {
        dst.copy_from_slice(self.take_slice(dst.len())?);
        Ok(())
    }
}
