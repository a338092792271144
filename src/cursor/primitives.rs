//! Fixed-width primitive codecs
//!
//! Integers, booleans and floats, each encoded at the current position in
//! the cursor's byte order.

use super::{ByteCursor, ByteOrder};
use crate::error::Result;

/// Generates a `write_*` / `read_*` pair for a fixed-width numeric type
macro_rules! primitive_codec {
    ($($ty:ty => $write:ident, $read:ident;)*) => {
        $(
            #[doc = concat!("Write a `", stringify!($ty), "` in the cursor's byte order")]
            pub fn $write(&mut self, value: $ty) {
                let bytes = match self.byte_order {
                    ByteOrder::Little => value.to_le_bytes(),
                    ByteOrder::Big => value.to_be_bytes(),
                };
                self.put_slice(&bytes);
            }

            #[doc = concat!("Read a `", stringify!($ty), "` in the cursor's byte order")]
            pub fn $read(&mut self) -> Result<$ty> {
                let bytes = self.take_array::<{ std::mem::size_of::<$ty>() }>()?;
                Ok(match self.byte_order {
                    ByteOrder::Little => <$ty>::from_le_bytes(bytes),
                    ByteOrder::Big => <$ty>::from_be_bytes(bytes),
                })
            }
        )*
    };
}

impl ByteCursor {
    primitive_codec! {
        u8 => write_u8, read_u8;
        i8 => write_i8, read_i8;
        u16 => write_u16, read_u16;
        i16 => write_i16, read_i16;
        u32 => write_u32, read_u32;
        i32 => write_i32, read_i32;
        u64 => write_u64, read_u64;
        i64 => write_i64, read_i64;
    }

    /// Write a boolean as a single byte (always 0 or 1)
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    /// Read a boolean; any nonzero byte is `true`
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    // Floats travel as their raw bit patterns so NaN payloads, signed zeros
    // and subnormals survive unchanged.

    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    pub fn write_f64(&mut self, value: f64) {
        self.write_u64(value.to_bits());
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }
}
