//! Hostlink Serial Port Protocol
//!
//! This crate provides the addressing and line-configuration layer for the
//! hostlink bridge firmware's multi-port serial feature: the vocabulary a
//! host uses to name serial ports and pins on a remote device, and the
//! decoding of its compact line-configuration field into the value a UART
//! peripheral expects.
//!
//! # Protocol Overview
//!
//! Port-addressed command bytes split into two nibbles:
//!
//! ```text
//!   7       4 3       0
//! +-----------+---------+
//! |  opcode   | port id |
//! +-----------+---------+
//! ```
//!
//! Port identifiers 0x00–0x07 address hardware UARTs and 0x08–0x0F address
//! software-emulated ports. Three pure lookups make up the layer:
//!
//! - **Port table**: port identifier → rx/tx pin pair of the current board,
//!   with (0, 0) as the "not available on this build" sentinel
//! - **Pin role resolver**: physical pin → the serial role it plays, for
//!   capability reporting
//! - **Line config encoder**: 16-bit options field → platform config token,
//!   falling back to 8N1 whenever the requested combination is unsupported
//!
//! All three always produce a value; sentinels, not errors, signal the
//! unsupported cases, so a remote misconfiguration can never leave the
//! device unresponsive. Framing, UART I/O, and command dispatch live in the
//! layers around this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use hostlink_serial_protocol::{lookup_pins, role_of, config_value};
//! use hostlink_serial_protocol::{LineOptions, PortId};
//!
//! let pins = lookup_pins(PortId::from_wire(0x01));
//! if !pins.is_unassigned() {
//!     let value = config_value(LineOptions::new(options_from_host));
//!     // hand `pins` and `value` to the UART driver
//! }
//! ```

mod board;
mod commands;
mod constants;
mod error;
mod options;
mod types;

pub use board::*;
pub use commands::*;
pub use constants::*;
pub use error::*;
pub use options::*;
pub use types::*;
