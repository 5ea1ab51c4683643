use std::str::FromStr;

use bitflags::bitflags;

use crate::error::Error;

bitflags! {
    /// Status bits of the 8080 flags byte.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: S (sign)
    /// - bit 6: Z (zero)
    /// - bit 5: always 0
    /// - bit 4: A (auxiliary carry)
    /// - bit 3: always 0
    /// - bit 2: P (parity)
    /// - bit 1: always 1
    /// - bit 0: C (carry)
    ///
    /// Only the five status bits are representable here; the fixed bits are
    /// applied by [`Flags::to_byte`] and dropped by [`Flags::from_byte`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const CARRY = 0x01;
        const PARITY = 0x04;
        const AUX_CARRY = 0x10;
        const ZERO = 0x40;
        const SIGN = 0x80;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Flags {
    /// Bits that read as 1 in every flags byte.
    pub const RESERVED_SET: u8 = 0x02;
    /// Bits that read as 0 in every flags byte.
    pub const RESERVED_CLEAR: u8 = 0x28;

    #[inline]
    pub fn to_byte(self) -> u8 {
        self.bits() | Self::RESERVED_SET
    }

    #[inline]
    pub fn from_byte(value: u8) -> Self {
        Self::from_bits_truncate(value)
    }
}

/// A single named status flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    Carry,
    Parity,
    AuxCarry,
    Zero,
    Sign,
}

impl Flag {
    pub const ALL: [Flag; 5] = [
        Flag::Carry,
        Flag::Parity,
        Flag::AuxCarry,
        Flag::Zero,
        Flag::Sign,
    ];

    #[inline]
    pub fn mask(self) -> Flags {
        match self {
            Flag::Carry => Flags::CARRY,
            Flag::Parity => Flags::PARITY,
            Flag::AuxCarry => Flags::AUX_CARRY,
            Flag::Zero => Flags::ZERO,
            Flag::Sign => Flags::SIGN,
        }
    }
}

/// Parses the conventional single-letter names (`C`, `P`, `A`, `Z`, `S`),
/// plus `AC`/`CY` as used by Intel's manuals. Case-insensitive.
impl FromStr for Flag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "C" | "CY" => Ok(Flag::Carry),
            "P" => Ok(Flag::Parity),
            "A" | "AC" => Ok(Flag::AuxCarry),
            "Z" => Ok(Flag::Zero),
            "S" => Ok(Flag::Sign),
            _ => Err(Error::UnknownFlag(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_bits_survive_any_byte() {
        for byte in 0..=0xFFu8 {
            let f = Flags::from_byte(byte).to_byte();
            assert_eq!(f & Flags::RESERVED_SET, Flags::RESERVED_SET);
            assert_eq!(f & Flags::RESERVED_CLEAR, 0);
            assert_eq!(f & !0x2A, byte & !0x2A);
        }
    }

    #[test]
    fn parses_flag_names() {
        assert_eq!("c".parse::<Flag>().unwrap(), Flag::Carry);
        assert_eq!("AC".parse::<Flag>().unwrap(), Flag::AuxCarry);
        assert_eq!("S".parse::<Flag>().unwrap(), Flag::Sign);
        assert_eq!(
            "N".parse::<Flag>().unwrap_err(),
            Error::UnknownFlag("N".to_string())
        );
    }
}
