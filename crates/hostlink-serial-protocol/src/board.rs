//! Board pin tables and the active board profile.
//!
//! Which hardware UARTs exist, and on which physical pins, is a build-time
//! fact that varies per target board. Each supported target gets one
//! statically initialized [`BoardProfile`]; all profiles are always compiled
//! so they can be exercised on any host, and a cargo feature selects the one
//! the firmware is actually built for.

use crate::constants::MAX_SERIAL_PORTS;
use crate::options::{ConfigValue, LineOptions};
use crate::types::{PinPair, PinRole, PortId};

/// Compile-time description of one target board's serial resources.
#[derive(Debug, Clone, Copy)]
pub struct BoardProfile {
    /// Target name.
    pub name: &'static str,
    /// rx/tx pins of each hardware port, indexed by port number. Port 0 is
    /// reserved (it carries the host link) and stays unassigned on every
    /// profile.
    pub hw_pins: [PinPair; MAX_SERIAL_PORTS],
    /// Whether the target's UARTs support mark/space parity.
    pub extended_parity: bool,
}

impl BoardProfile {
    /// rx/tx pin numbers for a hardware port.
    ///
    /// Returns the sentinel pair for software ports (their pins are assigned
    /// dynamically, not compiled in) and for any hardware port absent from
    /// this profile. The sentinel is the only "unavailable" signal; the
    /// protocol layer turns it into a configuration-failure report.
    pub fn lookup_pins(&self, port: PortId) -> PinPair {
        if !port.is_hardware() {
            return PinPair::UNASSIGNED;
        }
        let pins = self.hw_pins[port.index()];
        if pins.is_unassigned() {
            log::trace!("no pins for port 0x{:02X} on {}", port.as_byte(), self.name);
        }
        pins
    }

    /// The serial role a physical pin plays on this board, if any.
    ///
    /// Ports are checked in fixed priority order, port 1 through port 3,
    /// receive before transmit, and the first match wins. Unassigned table
    /// entries never match, so pin 0 classifies correctly on boards whose
    /// port 1 really is wired to pins 0/1.
    pub fn role_of(&self, pin: u8) -> PinRole {
        const ROLES: [(PinRole, PinRole); 3] = [
            (PinRole::Rx1, PinRole::Tx1),
            (PinRole::Rx2, PinRole::Tx2),
            (PinRole::Rx3, PinRole::Tx3),
        ];
        for (port, (rx_role, tx_role)) in ROLES.into_iter().enumerate() {
            let pins = self.hw_pins[port + 1];
            if pins.is_unassigned() {
                continue;
            }
            if pin == pins.rx {
                return rx_role;
            }
            if pin == pins.tx {
                return tx_role;
            }
        }
        PinRole::None
    }

    /// Resolve a line options value against this board's capabilities.
    pub fn config_value(&self, options: LineOptions) -> ConfigValue {
        options.config_value(self.extended_parity)
    }
}

/// ATmega328P targets: no hardware UART to spare (the only one carries the
/// host link), no extended parity.
pub const ATMEGA328P: BoardProfile = BoardProfile {
    name: "atmega328p",
    hw_pins: [PinPair::UNASSIGNED; MAX_SERIAL_PORTS],
    extended_parity: false,
};

/// ATmega32U4 targets: the host link rides the USB controller, freeing one
/// hardware UART on pins 0/1.
pub const ATMEGA32U4: BoardProfile = BoardProfile {
    name: "atmega32u4",
    hw_pins: [
        PinPair::UNASSIGNED, // port 0: reserved
        PinPair::new(0, 1),
        PinPair::UNASSIGNED,
        PinPair::UNASSIGNED,
        PinPair::UNASSIGNED,
        PinPair::UNASSIGNED,
        PinPair::UNASSIGNED,
        PinPair::UNASSIGNED,
    ],
    extended_parity: false,
};

/// ATmega2560 targets: three spare hardware UARTs.
pub const ATMEGA2560: BoardProfile = BoardProfile {
    name: "atmega2560",
    hw_pins: [
        PinPair::UNASSIGNED, // port 0: reserved
        PinPair::new(19, 18),
        PinPair::new(17, 16),
        PinPair::new(15, 14),
        PinPair::UNASSIGNED,
        PinPair::UNASSIGNED,
        PinPair::UNASSIGNED,
        PinPair::UNASSIGNED,
    ],
    extended_parity: false,
};

/// SAM3X8E targets: same pin map as the ATmega2560, and the USART blocks
/// support mark/space parity.
pub const SAM3X8E: BoardProfile = BoardProfile {
    name: "sam3x8e",
    hw_pins: [
        PinPair::UNASSIGNED, // port 0: reserved
        PinPair::new(19, 18),
        PinPair::new(17, 16),
        PinPair::new(15, 14),
        PinPair::UNASSIGNED,
        PinPair::UNASSIGNED,
        PinPair::UNASSIGNED,
        PinPair::UNASSIGNED,
    ],
    extended_parity: true,
};

/// The profile the firmware is built for, selected by cargo feature. The
/// most capable enabled profile wins; with no board feature the bare
/// ATmega328P profile is used and every lookup degrades to the sentinel.
#[cfg(feature = "board-sam3x8e")]
pub const ACTIVE_BOARD: &BoardProfile = &SAM3X8E;

#[cfg(all(feature = "board-atmega2560", not(feature = "board-sam3x8e")))]
pub const ACTIVE_BOARD: &BoardProfile = &ATMEGA2560;

#[cfg(all(
    feature = "board-atmega32u4",
    not(any(feature = "board-atmega2560", feature = "board-sam3x8e"))
))]
pub const ACTIVE_BOARD: &BoardProfile = &ATMEGA32U4;

#[cfg(not(any(
    feature = "board-atmega32u4",
    feature = "board-atmega2560",
    feature = "board-sam3x8e"
)))]
pub const ACTIVE_BOARD: &BoardProfile = &ATMEGA328P;

/// rx/tx pin numbers for a hardware port on the active board.
pub fn lookup_pins(port: PortId) -> PinPair {
    ACTIVE_BOARD.lookup_pins(port)
}

/// The serial role a physical pin plays on the active board, if any.
pub fn role_of(pin: u8) -> PinRole {
    ACTIVE_BOARD.role_of(pin)
}

/// Resolve a line options value against the active board's capabilities.
pub fn config_value(options: LineOptions) -> ConfigValue {
    ACTIVE_BOARD.config_value(options)
}
