//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when interpreting the wire vocabulary.
///
/// The addressing and configuration lookups themselves never fail; they
/// degrade to sentinel values instead. Only the typed conversions from raw
/// command bytes can reject their input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// Byte does not name a serial command opcode.
    #[error("unknown serial command opcode: 0x{0:02X}")]
    UnknownCommand(u8),

    /// Byte does not name a serial read sub-mode.
    #[error("unknown serial read mode: 0x{0:02X}")]
    UnknownReadMode(u8),
}
