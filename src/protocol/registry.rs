//! Opcode Registry
//!
//! Maps message types to numeric opcodes and back, separately for client
//! and server messages. The registry is a plain value: build one at startup
//! and hand it (or an `Arc` of it) to whatever encodes or decodes frames.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use super::{ClientMessage, ServerMessage};
use crate::error::{CursorError, Result};

/// One registered type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub opcode: u16,
    pub type_id: TypeId,
    pub type_name: &'static str,
}

impl Registration {
    /// True if this registration belongs to `T`
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

/// Two-way lookup table for one message direction
#[derive(Debug, Default)]
struct OpcodeTable {
    by_type: HashMap<TypeId, u16>,
    by_opcode: HashMap<u16, Registration>,
}

impl OpcodeTable {
    fn insert<T: 'static>(&mut self, opcode: u16) -> Result<()> {
        let registration = Registration {
            opcode,
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        };

        if let Some(existing) = self.by_opcode.get(&opcode) {
            if existing.type_id == registration.type_id {
                return Ok(());
            }
            return Err(CursorError::DuplicateOpcode(opcode));
        }
        if let Some(previous) = self.by_type.get(&registration.type_id) {
            return Err(CursorError::Protocol(format!(
                "{} is already registered as opcode 0x{:04x}",
                registration.type_name, previous
            )));
        }

        self.by_type.insert(registration.type_id, opcode);
        self.by_opcode.insert(opcode, registration);
        Ok(())
    }

    fn opcode_of<T: 'static>(&self) -> Result<u16> {
        self.by_type
            .get(&TypeId::of::<T>())
            .copied()
            .ok_or(CursorError::UnregisteredType(type_name::<T>()))
    }
}

/// Opcode lookups for client and server messages
#[derive(Debug, Default)]
pub struct OpcodeRegistry {
    client: OpcodeTable,
    server: OpcodeTable,
}

impl OpcodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Map a client message type to `opcode`
    ///
    /// Registering the same pair twice is a no-op. Reusing an opcode or
    /// re-registering a type under a different opcode is an error.
    pub fn register_client<M: ClientMessage>(&mut self, opcode: u16) -> Result<()> {
        self.client.insert::<M>(opcode)?;
        tracing::debug!(opcode, message = type_name::<M>(), "registered client message");
        Ok(())
    }

    /// Map a server message type to `opcode`
    pub fn register_server<M: ServerMessage>(&mut self, opcode: u16) -> Result<()> {
        self.server.insert::<M>(opcode)?;
        tracing::debug!(opcode, message = type_name::<M>(), "registered server message");
        Ok(())
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn client_opcode<M: ClientMessage>(&self) -> Result<u16> {
        self.client.opcode_of::<M>()
    }

    pub fn server_opcode<M: ServerMessage>(&self) -> Result<u16> {
        self.server.opcode_of::<M>()
    }

    /// Client message registered under `opcode`, if any
    pub fn client_type(&self, opcode: u16) -> Option<&Registration> {
        self.client.by_opcode.get(&opcode)
    }

    /// Server message registered under `opcode`, if any
    pub fn server_type(&self, opcode: u16) -> Option<&Registration> {
        self.server.by_opcode.get(&opcode)
    }

    /// Number of registered client and server types
    pub fn len(&self) -> usize {
        self.client.by_opcode.len() + self.server.by_opcode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
