//! Line configuration options and the platform config value table.
//!
//! A serial configure command carries a 16-bit options value packing the
//! data-bits/parity/stop-bits triple. The firmware decodes it into one of a
//! fixed set of platform configuration tokens, the values the UART
//! initialization routine accepts directly.
//!
//! ## Options Field Layout
//!
//! ```text
//!  15          9 8       5 4       2 1       0
//! +-------------+---------+---------+---------+
//! |  (ignored)  |  data   | parity  |  stop   |
//! +-------------+---------+---------+---------+
//! ```
//!
//! - **data**: raw data bit count, 5–8
//! - **parity**: 0 none, 1 even, 2 odd, 3 mark, 4 space
//! - **stop**: 0 = one stop bit, 1 = 1.5 (unsupported), 2 = two
//!
//! ## Config Token Layout
//!
//! The platform tokens pack the same triple into the byte the UART register
//! interface expects:
//!
//! | Bits  | Field                                        |
//! |-------|----------------------------------------------|
//! | 2:1   | character size (0=5 … 3=8 data bits)         |
//! | 3     | stop bits (0 = one, 1 = two)                 |
//! | 6:4   | parity mode (0=N, 1=E, 2=O, 3=M, 4=S)        |

use crate::constants::*;

/// Number of data bits per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBits {
    /// 5 data bits.
    Five,
    /// 6 data bits.
    Six,
    /// 7 data bits.
    Seven,
    /// 8 data bits.
    Eight,
}

impl DataBits {
    /// Decode the raw bit count from the options field. Anything outside
    /// 5–8 is unsupported.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            5 => Some(DataBits::Five),
            6 => Some(DataBits::Six),
            7 => Some(DataBits::Seven),
            8 => Some(DataBits::Eight),
            _ => None,
        }
    }

    /// The number of data bits.
    pub fn bits(&self) -> u8 {
        match self {
            DataBits::Five => 5,
            DataBits::Six => 6,
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        }
    }
}

/// Parity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// No parity.
    None,
    /// Even parity.
    Even,
    /// Odd parity.
    Odd,
    /// Mark parity (extended targets only).
    Mark,
    /// Space parity (extended targets only).
    Space,
}

impl Parity {
    /// Decode the parity code from the options field.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            PARITY_NONE => Some(Parity::None),
            PARITY_EVEN => Some(Parity::Even),
            PARITY_ODD => Some(Parity::Odd),
            PARITY_MARK => Some(Parity::Mark),
            PARITY_SPACE => Some(Parity::Space),
            _ => None,
        }
    }

    /// The wire code for this parity mode.
    pub fn code(&self) -> u8 {
        match self {
            Parity::None => PARITY_NONE,
            Parity::Even => PARITY_EVEN,
            Parity::Odd => PARITY_ODD,
            Parity::Mark => PARITY_MARK,
            Parity::Space => PARITY_SPACE,
        }
    }

    /// Whether this mode requires extended-parity UART support.
    pub fn is_extended(&self) -> bool {
        matches!(self, Parity::Mark | Parity::Space)
    }
}

/// Number of stop bits.
///
/// The wire encoding also allows 1.5 stop bits (code 1), which no target in
/// scope supports, so it has no variant here and decodes to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    /// One stop bit.
    One,
    /// Two stop bits.
    Two,
}

impl StopBits {
    /// Decode the stop bits code from the options field.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            STOP_BITS_1 => Some(StopBits::One),
            STOP_BITS_2 => Some(StopBits::Two),
            _ => None,
        }
    }
}

/// The 16-bit line options value carried by a serial configure command.
///
/// The framing layer reassembles the value from protocol bytes before
/// handing it over; no byte-order handling happens here. Bits outside the
/// three sub-fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOptions(u16);

impl LineOptions {
    /// Wrap an already-assembled options value.
    pub const fn new(raw: u16) -> Self {
        LineOptions(raw)
    }

    /// Pack raw field codes into an options value (host side).
    pub const fn compose(data_bits: u8, parity: u8, stop_bits: u8) -> Self {
        LineOptions(
            (((data_bits as u16) << 5) & SERIAL_DATA_BITS_MASK)
                | (((parity as u16) << 2) & SERIAL_PARITY_MASK)
                | ((stop_bits as u16) & SERIAL_STOP_BITS_MASK),
        )
    }

    /// The raw 16-bit value.
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// Raw data bits code (bits \[8:5\]).
    pub const fn data_bits_code(&self) -> u8 {
        ((self.0 & SERIAL_DATA_BITS_MASK) >> 5) as u8
    }

    /// Raw parity code (bits \[4:2\]).
    pub const fn parity_code(&self) -> u8 {
        ((self.0 & SERIAL_PARITY_MASK) >> 2) as u8
    }

    /// Raw stop bits code (bits \[1:0\]).
    pub const fn stop_bits_code(&self) -> u8 {
        (self.0 & SERIAL_STOP_BITS_MASK) as u8
    }

    /// Resolve these options to a platform config token.
    ///
    /// Total: any unrecognized field code, the 1.5-stop-bits encoding, and
    /// mark/space parity on a target without `extended_parity` all resolve
    /// to [`SERIAL_8N1`]. The caller is never left without a usable value.
    pub fn config_value(self, extended_parity: bool) -> ConfigValue {
        let decoded = (
            Parity::from_code(self.parity_code()),
            StopBits::from_code(self.stop_bits_code()),
            DataBits::from_code(self.data_bits_code()),
        );
        let (parity, stop_bits, data_bits) = match decoded {
            (Some(p), Some(s), Some(d)) => (p, s, d),
            _ => {
                log::debug!("unsupported serial options 0x{:04X}, using 8N1", self.0);
                return SERIAL_8N1;
            }
        };

        if parity.is_extended() && !extended_parity {
            log::debug!(
                "mark/space parity not available on this target, using 8N1"
            );
            return SERIAL_8N1;
        }

        match (parity, stop_bits, data_bits) {
            (Parity::None, StopBits::One, DataBits::Five) => SERIAL_5N1,
            (Parity::None, StopBits::One, DataBits::Six) => SERIAL_6N1,
            (Parity::None, StopBits::One, DataBits::Seven) => SERIAL_7N1,
            (Parity::None, StopBits::One, DataBits::Eight) => SERIAL_8N1,
            (Parity::None, StopBits::Two, DataBits::Five) => SERIAL_5N2,
            (Parity::None, StopBits::Two, DataBits::Six) => SERIAL_6N2,
            (Parity::None, StopBits::Two, DataBits::Seven) => SERIAL_7N2,
            (Parity::None, StopBits::Two, DataBits::Eight) => SERIAL_8N2,
            (Parity::Even, StopBits::One, DataBits::Five) => SERIAL_5E1,
            (Parity::Even, StopBits::One, DataBits::Six) => SERIAL_6E1,
            (Parity::Even, StopBits::One, DataBits::Seven) => SERIAL_7E1,
            (Parity::Even, StopBits::One, DataBits::Eight) => SERIAL_8E1,
            (Parity::Even, StopBits::Two, DataBits::Five) => SERIAL_5E2,
            (Parity::Even, StopBits::Two, DataBits::Six) => SERIAL_6E2,
            (Parity::Even, StopBits::Two, DataBits::Seven) => SERIAL_7E2,
            (Parity::Even, StopBits::Two, DataBits::Eight) => SERIAL_8E2,
            (Parity::Odd, StopBits::One, DataBits::Five) => SERIAL_5O1,
            (Parity::Odd, StopBits::One, DataBits::Six) => SERIAL_6O1,
            (Parity::Odd, StopBits::One, DataBits::Seven) => SERIAL_7O1,
            (Parity::Odd, StopBits::One, DataBits::Eight) => SERIAL_8O1,
            (Parity::Odd, StopBits::Two, DataBits::Five) => SERIAL_5O2,
            (Parity::Odd, StopBits::Two, DataBits::Six) => SERIAL_6O2,
            (Parity::Odd, StopBits::Two, DataBits::Seven) => SERIAL_7O2,
            (Parity::Odd, StopBits::Two, DataBits::Eight) => SERIAL_8O2,
            (Parity::Mark, StopBits::One, DataBits::Five) => SERIAL_5M1,
            (Parity::Mark, StopBits::One, DataBits::Six) => SERIAL_6M1,
            (Parity::Mark, StopBits::One, DataBits::Seven) => SERIAL_7M1,
            (Parity::Mark, StopBits::One, DataBits::Eight) => SERIAL_8M1,
            (Parity::Mark, StopBits::Two, DataBits::Five) => SERIAL_5M2,
            (Parity::Mark, StopBits::Two, DataBits::Six) => SERIAL_6M2,
            (Parity::Mark, StopBits::Two, DataBits::Seven) => SERIAL_7M2,
            (Parity::Mark, StopBits::Two, DataBits::Eight) => SERIAL_8M2,
            (Parity::Space, StopBits::One, DataBits::Five) => SERIAL_5S1,
            (Parity::Space, StopBits::One, DataBits::Six) => SERIAL_6S1,
            (Parity::Space, StopBits::One, DataBits::Seven) => SERIAL_7S1,
            (Parity::Space, StopBits::One, DataBits::Eight) => SERIAL_8S1,
            (Parity::Space, StopBits::Two, DataBits::Five) => SERIAL_5S2,
            (Parity::Space, StopBits::Two, DataBits::Six) => SERIAL_6S2,
            (Parity::Space, StopBits::Two, DataBits::Seven) => SERIAL_7S2,
            (Parity::Space, StopBits::Two, DataBits::Eight) => SERIAL_8S2,
        }
    }
}

impl From<u16> for LineOptions {
    fn from(raw: u16) -> Self {
        LineOptions(raw)
    }
}

/// A platform configuration token, consumed directly by UART initialization.
///
/// Hosts treat the value as opaque; the layout is documented at the top of
/// this module for the firmware side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigValue(pub u16);

/// 5 data bits, no parity, 1 stop bit.
pub const SERIAL_5N1: ConfigValue = ConfigValue(0x00);
/// 6 data bits, no parity, 1 stop bit.
pub const SERIAL_6N1: ConfigValue = ConfigValue(0x02);
/// 7 data bits, no parity, 1 stop bit.
pub const SERIAL_7N1: ConfigValue = ConfigValue(0x04);
/// 8 data bits, no parity, 1 stop bit. The fallback for any unsupported options.
pub const SERIAL_8N1: ConfigValue = ConfigValue(0x06);
/// 5 data bits, no parity, 2 stop bits.
pub const SERIAL_5N2: ConfigValue = ConfigValue(0x08);
/// 6 data bits, no parity, 2 stop bits.
pub const SERIAL_6N2: ConfigValue = ConfigValue(0x0A);
/// 7 data bits, no parity, 2 stop bits.
pub const SERIAL_7N2: ConfigValue = ConfigValue(0x0C);
/// 8 data bits, no parity, 2 stop bits.
pub const SERIAL_8N2: ConfigValue = ConfigValue(0x0E);
/// 5 data bits, even parity, 1 stop bit.
pub const SERIAL_5E1: ConfigValue = ConfigValue(0x10);
/// 6 data bits, even parity, 1 stop bit.
pub const SERIAL_6E1: ConfigValue = ConfigValue(0x12);
/// 7 data bits, even parity, 1 stop bit.
pub const SERIAL_7E1: ConfigValue = ConfigValue(0x14);
/// 8 data bits, even parity, 1 stop bit.
pub const SERIAL_8E1: ConfigValue = ConfigValue(0x16);
/// 5 data bits, even parity, 2 stop bits.
pub const SERIAL_5E2: ConfigValue = ConfigValue(0x18);
/// 6 data bits, even parity, 2 stop bits.
pub const SERIAL_6E2: ConfigValue = ConfigValue(0x1A);
/// 7 data bits, even parity, 2 stop bits.
pub const SERIAL_7E2: ConfigValue = ConfigValue(0x1C);
/// 8 data bits, even parity, 2 stop bits.
pub const SERIAL_8E2: ConfigValue = ConfigValue(0x1E);
/// 5 data bits, odd parity, 1 stop bit.
pub const SERIAL_5O1: ConfigValue = ConfigValue(0x20);
/// 6 data bits, odd parity, 1 stop bit.
pub const SERIAL_6O1: ConfigValue = ConfigValue(0x22);
/// 7 data bits, odd parity, 1 stop bit.
pub const SERIAL_7O1: ConfigValue = ConfigValue(0x24);
/// 8 data bits, odd parity, 1 stop bit.
pub const SERIAL_8O1: ConfigValue = ConfigValue(0x26);
/// 5 data bits, odd parity, 2 stop bits.
pub const SERIAL_5O2: ConfigValue = ConfigValue(0x28);
/// 6 data bits, odd parity, 2 stop bits.
pub const SERIAL_6O2: ConfigValue = ConfigValue(0x2A);
/// 7 data bits, odd parity, 2 stop bits.
pub const SERIAL_7O2: ConfigValue = ConfigValue(0x2C);
/// 8 data bits, odd parity, 2 stop bits.
pub const SERIAL_8O2: ConfigValue = ConfigValue(0x2E);
/// 5 data bits, mark parity, 1 stop bit (extended targets only).
pub const SERIAL_5M1: ConfigValue = ConfigValue(0x30);
/// 6 data bits, mark parity, 1 stop bit (extended targets only).
pub const SERIAL_6M1: ConfigValue = ConfigValue(0x32);
/// 7 data bits, mark parity, 1 stop bit (extended targets only).
pub const SERIAL_7M1: ConfigValue = ConfigValue(0x34);
/// 8 data bits, mark parity, 1 stop bit (extended targets only).
pub const SERIAL_8M1: ConfigValue = ConfigValue(0x36);
/// 5 data bits, mark parity, 2 stop bits (extended targets only).
pub const SERIAL_5M2: ConfigValue = ConfigValue(0x38);
/// 6 data bits, mark parity, 2 stop bits (extended targets only).
pub const SERIAL_6M2: ConfigValue = ConfigValue(0x3A);
/// 7 data bits, mark parity, 2 stop bits (extended targets only).
pub const SERIAL_7M2: ConfigValue = ConfigValue(0x3C);
/// 8 data bits, mark parity, 2 stop bits (extended targets only).
pub const SERIAL_8M2: ConfigValue = ConfigValue(0x3E);
/// 5 data bits, space parity, 1 stop bit (extended targets only).
pub const SERIAL_5S1: ConfigValue = ConfigValue(0x40);
/// 6 data bits, space parity, 1 stop bit (extended targets only).
pub const SERIAL_6S1: ConfigValue = ConfigValue(0x42);
/// 7 data bits, space parity, 1 stop bit (extended targets only).
pub const SERIAL_7S1: ConfigValue = ConfigValue(0x44);
/// 8 data bits, space parity, 1 stop bit (extended targets only).
pub const SERIAL_8S1: ConfigValue = ConfigValue(0x46);
/// 5 data bits, space parity, 2 stop bits (extended targets only).
pub const SERIAL_5S2: ConfigValue = ConfigValue(0x48);
/// 6 data bits, space parity, 2 stop bits (extended targets only).
pub const SERIAL_6S2: ConfigValue = ConfigValue(0x4A);
/// 7 data bits, space parity, 2 stop bits (extended targets only).
pub const SERIAL_7S2: ConfigValue = ConfigValue(0x4C);
/// 8 data bits, space parity, 2 stop bits (extended targets only).
pub const SERIAL_8S2: ConfigValue = ConfigValue(0x4E);

#[cfg(test)]
mod tests {
    use super::*;

    /// Every published token, base set first, extended-parity block last.
    const ALL_TOKENS: [ConfigValue; 40] = [
        SERIAL_5N1, SERIAL_6N1, SERIAL_7N1, SERIAL_8N1,
        SERIAL_5N2, SERIAL_6N2, SERIAL_7N2, SERIAL_8N2,
        SERIAL_5E1, SERIAL_6E1, SERIAL_7E1, SERIAL_8E1,
        SERIAL_5E2, SERIAL_6E2, SERIAL_7E2, SERIAL_8E2,
        SERIAL_5O1, SERIAL_6O1, SERIAL_7O1, SERIAL_8O1,
        SERIAL_5O2, SERIAL_6O2, SERIAL_7O2, SERIAL_8O2,
        SERIAL_5M1, SERIAL_6M1, SERIAL_7M1, SERIAL_8M1,
        SERIAL_5M2, SERIAL_6M2, SERIAL_7M2, SERIAL_8M2,
        SERIAL_5S1, SERIAL_6S1, SERIAL_7S1, SERIAL_8S1,
        SERIAL_5S2, SERIAL_6S2, SERIAL_7S2, SERIAL_8S2,
    ];

    #[test]
    fn test_field_extraction() {
        let options = LineOptions::compose(6, PARITY_EVEN, STOP_BITS_2);
        assert_eq!(options.raw(), 0x00C6);
        assert_eq!(options.data_bits_code(), 6);
        assert_eq!(options.parity_code(), PARITY_EVEN);
        assert_eq!(options.stop_bits_code(), STOP_BITS_2);
    }

    #[test]
    fn test_bits_outside_fields_are_ignored() {
        let plain = LineOptions::compose(8, PARITY_NONE, STOP_BITS_1);
        let noisy = LineOptions::new(plain.raw() | 0xFE00);
        assert_eq!(
            noisy.config_value(false),
            plain.config_value(false)
        );
    }

    #[test]
    fn test_option_masks_are_disjoint() {
        assert_eq!(SERIAL_DATA_BITS_MASK & SERIAL_PARITY_MASK, 0);
        assert_eq!(SERIAL_DATA_BITS_MASK & SERIAL_STOP_BITS_MASK, 0);
        assert_eq!(SERIAL_PARITY_MASK & SERIAL_STOP_BITS_MASK, 0);
    }

    #[test]
    fn test_8n1_is_also_the_default() {
        let options = LineOptions::compose(8, PARITY_NONE, STOP_BITS_1);
        assert_eq!(options.config_value(false), SERIAL_8N1);
        assert_eq!(options.config_value(true), SERIAL_8N1);
    }

    #[test]
    fn test_one_and_a_half_stop_bits_falls_back() {
        // 1.5 stop bits is a legal wire encoding but no target supports it.
        for data_bits in 5..=8u8 {
            let options = LineOptions::compose(data_bits, PARITY_EVEN, STOP_BITS_1_5);
            assert_eq!(options.config_value(true), SERIAL_8N1);
        }
    }

    #[test]
    fn test_6e2() {
        let options = LineOptions::compose(6, PARITY_EVEN, STOP_BITS_2);
        assert_eq!(options.config_value(false), SERIAL_6E2);
    }

    #[test]
    fn test_unsupported_data_bits_fall_back() {
        for data_bits in [0u8, 4, 9, 15] {
            let options = LineOptions::compose(data_bits, PARITY_ODD, STOP_BITS_1);
            assert_eq!(options.config_value(true), SERIAL_8N1);
        }
    }

    #[test]
    fn test_mark_space_need_extended_parity() {
        let mark = LineOptions::compose(8, PARITY_MARK, STOP_BITS_1);
        let space = LineOptions::compose(7, PARITY_SPACE, STOP_BITS_2);

        assert_eq!(mark.config_value(true), SERIAL_8M1);
        assert_eq!(space.config_value(true), SERIAL_7S2);

        assert_eq!(mark.config_value(false), SERIAL_8N1);
        assert_eq!(space.config_value(false), SERIAL_8N1);
    }

    #[test]
    fn test_total_over_all_inputs() {
        // Every 16-bit value resolves to a published token, and without
        // extended parity the mark/space block never appears.
        let extended_tokens = &ALL_TOKENS[24..];
        for raw in 0..=u16::MAX {
            let options = LineOptions::new(raw);

            let extended = options.config_value(true);
            assert!(ALL_TOKENS.contains(&extended), "0x{raw:04X} -> {extended:?}");

            let base = options.config_value(false);
            assert!(ALL_TOKENS.contains(&base));
            assert!(
                !extended_tokens.contains(&base),
                "0x{raw:04X} produced an extended token without support"
            );
        }
    }

    #[test]
    fn test_tokens_are_unique() {
        for (i, a) in ALL_TOKENS.iter().enumerate() {
            for b in &ALL_TOKENS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
