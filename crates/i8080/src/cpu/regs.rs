use std::str::FromStr;

use crate::error::Error;

/// Register file of the 8080.
///
/// Register pairs are not stored separately: `bc()`/`set_bc()` and friends
/// read and write straight through the two 8-bit halves, high register in the
/// upper byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    pub fn get(&self, reg: Register) -> u8 {
        match reg {
            Register::A => self.a,
            Register::B => self.b,
            Register::C => self.c,
            Register::D => self.d,
            Register::E => self.e,
            Register::H => self.h,
            Register::L => self.l,
        }
    }

    pub fn set(&mut self, reg: Register, value: u8) {
        match reg {
            Register::A => self.a = value,
            Register::B => self.b = value,
            Register::C => self.c = value,
            Register::D => self.d = value,
            Register::E => self.e = value,
            Register::H => self.h = value,
            Register::L => self.l = value,
        }
    }

    pub fn pair(&self, pair: RegisterPair) -> u16 {
        match pair {
            RegisterPair::BC => self.bc(),
            RegisterPair::DE => self.de(),
            RegisterPair::HL => self.hl(),
            RegisterPair::SP => self.sp,
        }
    }

    pub fn set_pair(&mut self, pair: RegisterPair, value: u16) {
        match pair {
            RegisterPair::BC => self.set_bc(value),
            RegisterPair::DE => self.set_de(value),
            RegisterPair::HL => self.set_hl(value),
            RegisterPair::SP => self.sp = value,
        }
    }
}

/// An 8-bit register.
///
/// Opcodes encode registers in three bits as 0=B, 1=C, 2=D, 3=E, 4=H, 5=L,
/// 7=A. The value 6 selects memory at HL and is not a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Register {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

impl Register {
    pub const ALL: [Register; 7] = [
        Register::A,
        Register::B,
        Register::C,
        Register::D,
        Register::E,
        Register::H,
        Register::L,
    ];

    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code & 0x07 {
            0 => Some(Register::B),
            1 => Some(Register::C),
            2 => Some(Register::D),
            3 => Some(Register::E),
            4 => Some(Register::H),
            5 => Some(Register::L),
            7 => Some(Register::A),
            _ => None,
        }
    }
}

impl FromStr for Register {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Register::A),
            "B" => Ok(Register::B),
            "C" => Ok(Register::C),
            "D" => Ok(Register::D),
            "E" => Ok(Register::E),
            "H" => Ok(Register::H),
            "L" => Ok(Register::L),
            _ => Err(Error::UnknownRegister(s.to_string())),
        }
    }
}

/// A 16-bit register operand: the three register pairs or the stack pointer.
///
/// Opcodes encode these in two bits as 0=BC, 1=DE, 2=HL, 3=SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterPair {
    BC,
    DE,
    HL,
    SP,
}

impl RegisterPair {
    pub(crate) const fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0 => RegisterPair::BC,
            1 => RegisterPair::DE,
            2 => RegisterPair::HL,
            _ => RegisterPair::SP,
        }
    }
}

impl FromStr for RegisterPair {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BC" | "B" => Ok(RegisterPair::BC),
            "DE" | "D" => Ok(RegisterPair::DE),
            "HL" | "H" => Ok(RegisterPair::HL),
            "SP" => Ok(RegisterPair::SP),
            _ => Err(Error::UnknownRegister(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_views_of_the_halves() {
        let mut regs = Registers::default();
        for value in 0..=u16::MAX {
            regs.set_bc(value);
            regs.set_de(value);
            regs.set_hl(value);
            let [hi, lo] = value.to_be_bytes();
            assert_eq!((regs.b, regs.c), (hi, lo));
            assert_eq!((regs.d, regs.e), (hi, lo));
            assert_eq!((regs.h, regs.l), (hi, lo));
        }

        for hi in 0..=0xFFu8 {
            for lo in 0..=0xFFu8 {
                regs.h = hi;
                regs.l = lo;
                assert_eq!(regs.hl(), u16::from_be_bytes([hi, lo]));
            }
        }
    }

    #[test]
    fn register_codes_follow_opcode_encoding() {
        assert_eq!(Register::from_code(0), Some(Register::B));
        assert_eq!(Register::from_code(5), Some(Register::L));
        assert_eq!(Register::from_code(6), None);
        assert_eq!(Register::from_code(7), Some(Register::A));
        assert_eq!(RegisterPair::from_code(3), RegisterPair::SP);
    }

    #[test]
    fn parses_register_names() {
        assert_eq!("h".parse::<Register>().unwrap(), Register::H);
        assert_eq!("hl".parse::<RegisterPair>().unwrap(), RegisterPair::HL);
        assert_eq!(
            "M".parse::<Register>().unwrap_err(),
            Error::UnknownRegister("M".to_string())
        );
    }
}
