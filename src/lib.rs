//! # ByteCursor
//!
//! A binary read/write cursor over a growable byte buffer with:
//! - Fixed-width integer, boolean and float codecs
//! - Selectable byte order (little-endian by default)
//! - Length-prefixed strings, raw byte blocks and UTC timestamps
//! - Bounds-checked reads that never move the cursor on failure
//! - An opaque blob hook for embedded objects (bincode-backed)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Messages                      │
//! │              (ClientMessage / ServerMessage)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Frame Codec                                │
//! │           (OpcodeRegistry, opcode + length header)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Primitives  │          │ Object Hook │
//!   │ str / bytes │          │  (bincode)  │
//!   └──────┬──────┘          └──────┬──────┘
//!          └────────────┬────────────┘
//!                       ▼
//!               ┌─────────────┐
//!               │ ByteCursor  │
//!               │  (storage)  │
//!               └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod cursor;
pub mod object;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CursorError, Result};
pub use config::CursorConfig;
pub use cursor::{ByteCursor, ByteOrder};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ByteCursor
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
