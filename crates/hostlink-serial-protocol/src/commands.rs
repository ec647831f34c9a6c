//! Command byte vocabulary shared with the host framing layer.
//!
//! The framing and dispatch live outside this crate; what lives here is the
//! typed form of the opcode space so the command processor never pattern
//! matches on raw bytes.

use crate::constants::*;
use crate::error::ProtocolError;
use crate::types::PortId;

/// Serial command opcodes, carried in the high nibble of the first byte of
/// a port-addressed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialCommand {
    /// Configure a port (baud rate and line options follow).
    Config,
    /// Write bytes to a port.
    Write,
    /// Request reads from a port.
    Read,
    /// Reply carrying bytes read from a port.
    Reply,
    /// Close a port.
    Close,
    /// Flush a port.
    Flush,
    /// Set the listening software serial port.
    Listen,
}

impl SerialCommand {
    /// The opcode value (high nibble set, low nibble clear).
    pub fn opcode(&self) -> u8 {
        match self {
            SerialCommand::Config => SERIAL_CONFIG,
            SerialCommand::Write => SERIAL_WRITE,
            SerialCommand::Read => SERIAL_READ,
            SerialCommand::Reply => SERIAL_REPLY,
            SerialCommand::Close => SERIAL_CLOSE,
            SerialCommand::Flush => SERIAL_FLUSH,
            SerialCommand::Listen => SERIAL_LISTEN,
        }
    }

    /// Extract the opcode from the first byte of a port-addressed command,
    /// ignoring the port identifier in the low nibble.
    pub fn from_command_byte(byte: u8) -> Result<Self, ProtocolError> {
        SerialCommand::try_from(byte & SERIAL_COMMAND_MASK)
            .map_err(|_| ProtocolError::UnknownCommand(byte))
    }
}

impl TryFrom<u8> for SerialCommand {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            SERIAL_CONFIG => Ok(SerialCommand::Config),
            SERIAL_WRITE => Ok(SerialCommand::Write),
            SERIAL_READ => Ok(SerialCommand::Read),
            SERIAL_REPLY => Ok(SerialCommand::Reply),
            SERIAL_CLOSE => Ok(SerialCommand::Close),
            SERIAL_FLUSH => Ok(SerialCommand::Flush),
            SERIAL_LISTEN => Ok(SerialCommand::Listen),
            _ => Err(ProtocolError::UnknownCommand(value)),
        }
    }
}

impl From<SerialCommand> for u8 {
    fn from(command: SerialCommand) -> Self {
        command.opcode()
    }
}

/// Compose the first byte of a port-addressed command.
pub fn command_byte(command: SerialCommand, port: PortId) -> u8 {
    command.opcode() | port.as_byte()
}

/// Sub-mode of a read request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Keep reading and forwarding received bytes until told to stop.
    Continuously,
    /// Stop reading from the port.
    StopReading,
}

impl TryFrom<u8> for ReadMode {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            SERIAL_READ_CONTINUOUSLY => Ok(ReadMode::Continuously),
            SERIAL_STOP_READING => Ok(ReadMode::StopReading),
            _ => Err(ProtocolError::UnknownReadMode(value)),
        }
    }
}

impl From<ReadMode> for u8 {
    fn from(mode: ReadMode) -> Self {
        match mode {
            ReadMode::Continuously => SERIAL_READ_CONTINUOUSLY,
            ReadMode::StopReading => SERIAL_STOP_READING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_roundtrip() {
        for command in [
            SerialCommand::Config,
            SerialCommand::Write,
            SerialCommand::Read,
            SerialCommand::Reply,
            SerialCommand::Close,
            SerialCommand::Flush,
            SerialCommand::Listen,
        ] {
            assert_eq!(SerialCommand::try_from(command.opcode()), Ok(command));
            // Opcodes keep the port nibble clear.
            assert_eq!(command.opcode() & SERIAL_PORT_ID_MASK, 0);
        }
    }

    #[test]
    fn test_unknown_opcode_is_rejected() {
        assert_eq!(
            SerialCommand::try_from(0x80),
            Err(ProtocolError::UnknownCommand(0x80))
        );
        assert_eq!(
            SerialCommand::try_from(0x00),
            Err(ProtocolError::UnknownCommand(0x00))
        );
    }

    #[test]
    fn test_command_byte_splits_into_opcode_and_port() {
        let byte = command_byte(SerialCommand::Read, PortId::from_wire(HW_SERIAL1));
        assert_eq!(byte, 0x31);
        assert_eq!(SerialCommand::from_command_byte(byte), Ok(SerialCommand::Read));
        assert_eq!(PortId::from_wire(byte).as_byte(), HW_SERIAL1);
    }

    #[test]
    fn test_read_modes() {
        assert_eq!(ReadMode::try_from(0x00), Ok(ReadMode::Continuously));
        assert_eq!(ReadMode::try_from(0x01), Ok(ReadMode::StopReading));
        assert_eq!(
            ReadMode::try_from(0x02),
            Err(ProtocolError::UnknownReadMode(0x02))
        );
    }
}
