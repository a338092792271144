//! Message capability traits
//!
//! Types that travel over the wire implement [`Wire`] in terms of the
//! cursor primitives, then opt into a direction with one of the markers.

use crate::cursor::ByteCursor;
use crate::error::Result;

/// Encode/decode contract for a message body
pub trait Wire: Sized {
    /// Write this value at the cursor's position
    fn serialize(&self, buf: &mut ByteCursor) -> Result<()>;

    /// Read a value from the cursor's position
    fn deserialize(buf: &mut ByteCursor) -> Result<Self>;
}

/// Marker for messages sent by a client (requests)
pub trait ClientMessage: Wire + 'static {}

/// Marker for messages sent by a server (responses)
pub trait ServerMessage: Wire + 'static {}
