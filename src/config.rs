//! Configuration for ByteCursor
//!
//! Centralized configuration with sensible defaults.

use crate::cursor::ByteOrder;

/// Default starting capacity for a fresh buffer (in bytes)
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Construction-time settings for a [`ByteCursor`](crate::ByteCursor)
#[derive(Debug, Clone)]
pub struct CursorConfig {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Bytes reserved up front; storage doubles from here as writes demand
    pub initial_capacity: usize,

    // -------------------------------------------------------------------------
    // Encoding Configuration
    // -------------------------------------------------------------------------
    /// Byte order for multi-byte values until changed with `set_byte_order`
    pub byte_order: ByteOrder,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            byte_order: ByteOrder::Little,
        }
    }
}

impl CursorConfig {
    /// Create a new config builder
    pub fn builder() -> CursorConfigBuilder {
        CursorConfigBuilder::default()
    }
}

/// Builder for CursorConfig
#[derive(Default)]
pub struct CursorConfigBuilder {
    config: CursorConfig,
}

impl CursorConfigBuilder {
    /// Set the starting capacity (in bytes)
    pub fn initial_capacity(mut self, bytes: usize) -> Self {
        self.config.initial_capacity = bytes;
        self
    }

    /// Set the initial byte order
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.config.byte_order = order;
        self
    }

    /// Shorthand for `byte_order(ByteOrder::Big)`
    pub fn big_endian(self) -> Self {
        self.byte_order(ByteOrder::Big)
    }

    pub fn build(self) -> CursorConfig {
        self.config
    }
}
