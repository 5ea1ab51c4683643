use lazy_static::lazy_static;

use super::{Flag, Flags, Register, RegisterPair};
use crate::config::UndocumentedOpcodes;

/// An 8-bit operand: a register or the byte at HL ("M").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Reg(Register),
    M,
}

impl Operand {
    fn from_code(code: u8) -> Self {
        match Register::from_code(code) {
            Some(reg) => Operand::Reg(reg),
            None => Operand::M,
        }
    }

    #[inline]
    pub fn is_memory(self) -> bool {
        matches!(self, Operand::M)
    }
}

/// Accumulator operation shared by a register/memory form and an immediate form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbb,
    Ana,
    Xra,
    Ora,
    Cmp,
}

impl AluOp {
    fn from_code(code: u8) -> Self {
        match code & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbb,
            4 => AluOp::Ana,
            5 => AluOp::Xra,
            6 => AluOp::Ora,
            _ => AluOp::Cmp,
        }
    }
}

/// Branch condition of the Jcc/Ccc/Rcc families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    NotZero,
    Zero,
    NoCarry,
    Carry,
    ParityOdd,
    ParityEven,
    Plus,
    Minus,
}

impl Condition {
    fn from_code(code: u8) -> Self {
        match code & 0x07 {
            0 => Condition::NotZero,
            1 => Condition::Zero,
            2 => Condition::NoCarry,
            3 => Condition::Carry,
            4 => Condition::ParityOdd,
            5 => Condition::ParityEven,
            6 => Condition::Plus,
            _ => Condition::Minus,
        }
    }

    /// The flag a condition looks at and the value that makes it hold.
    pub fn flag_and_polarity(self) -> (Flag, bool) {
        match self {
            Condition::NotZero => (Flag::Zero, false),
            Condition::Zero => (Flag::Zero, true),
            Condition::NoCarry => (Flag::Carry, false),
            Condition::Carry => (Flag::Carry, true),
            Condition::ParityOdd => (Flag::Parity, false),
            Condition::ParityEven => (Flag::Parity, true),
            Condition::Plus => (Flag::Sign, false),
            Condition::Minus => (Flag::Sign, true),
        }
    }

    #[inline]
    pub fn holds(self, flags: Flags) -> bool {
        let (flag, expected) = self.flag_and_polarity();
        flags.contains(flag.mask()) == expected
    }
}

/// Register pair operand of PUSH/POP, where the fourth slot is A plus flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackPair {
    BC,
    DE,
    HL,
    PSW,
}

impl StackPair {
    fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0 => StackPair::BC,
            1 => StackPair::DE,
            2 => StackPair::HL,
            _ => StackPair::PSW,
        }
    }
}

/// One decoded 8080 instruction. Operands that live in the instruction
/// stream (immediates, addresses) are fetched by the handler when it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Nop,
    Mov { dst: Operand, src: Operand },
    Mvi(Operand),
    Lxi(RegisterPair),
    Lda,
    Sta,
    Lhld,
    Shld,
    Ldax(RegisterPair),
    Stax(RegisterPair),
    Xchg,
    Alu(AluOp, Operand),
    AluImmediate(AluOp),
    Inr(Operand),
    Dcr(Operand),
    Inx(RegisterPair),
    Dcx(RegisterPair),
    Dad(RegisterPair),
    Rlc,
    Rrc,
    Ral,
    Rar,
    Daa,
    Cma,
    Stc,
    Cmc,
    Jmp,
    Jcc(Condition),
    Call,
    Ccc(Condition),
    Ret,
    Rcc(Condition),
    Rst(u8),
    Pchl,
    Push(StackPair),
    Pop(StackPair),
    Xthl,
    Sphl,
    In,
    Out,
    Ei,
    Di,
    Hlt,
}

impl Instruction {
    /// Encoded length in bytes, opcode included.
    pub fn length(self) -> u16 {
        match self {
            Instruction::Mvi(_)
            | Instruction::AluImmediate(_)
            | Instruction::In
            | Instruction::Out => 2,
            Instruction::Lxi(_)
            | Instruction::Lda
            | Instruction::Sta
            | Instruction::Lhld
            | Instruction::Shld
            | Instruction::Jmp
            | Instruction::Jcc(_)
            | Instruction::Call
            | Instruction::Ccc(_) => 3,
            _ => 1,
        }
    }
}

/// Slot of the opcode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub instruction: Instruction,
    /// `false` for the encodings Intel left unassigned that the chip still
    /// executes as a duplicate of another instruction.
    pub documented: bool,
}

impl OpcodeEntry {
    const fn documented(instruction: Instruction) -> Self {
        Self {
            instruction,
            documented: true,
        }
    }

    const fn alias(instruction: Instruction) -> Self {
        Self {
            instruction,
            documented: false,
        }
    }
}

lazy_static! {
    static ref OPCODE_TABLE: [OpcodeEntry; 256] =
        std::array::from_fn(|opcode| decode_opcode(opcode as u8));
}

/// Table slot for `opcode`, regardless of the undocumented-opcode policy.
pub fn entry(opcode: u8) -> OpcodeEntry {
    OPCODE_TABLE[opcode as usize]
}

/// Look up the handler for `opcode` under `policy`.
///
/// Returns `None` when the opcode has no handler, which the step driver turns
/// into a decode error.
pub fn lookup(opcode: u8, policy: UndocumentedOpcodes) -> Option<OpcodeEntry> {
    let slot = entry(opcode);
    match (slot.documented, policy) {
        (false, UndocumentedOpcodes::Reject) => None,
        _ => Some(slot),
    }
}

/// Decode one opcode from its bit fields.
///
/// The 8080 map splits the byte as `xx yyy zzz`: `x` picks the quarter,
/// `z` the column and `y` the row (or register/condition/ALU selector), with
/// `y` further split into `p = y >> 1` and `q = y & 1` for pair operands.
fn decode_opcode(opcode: u8) -> OpcodeEntry {
    use self::Instruction::*;
    use self::OpcodeEntry as E;

    let x = opcode >> 6;
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let p = y >> 1;
    let q = y & 0x01;

    match (x, z) {
        (0, 0) if y == 0 => E::documented(Nop),
        // 0x08, 0x10, ... 0x38
        (0, 0) => E::alias(Nop),
        (0, 1) if q == 0 => E::documented(Lxi(RegisterPair::from_code(p))),
        (0, 1) => E::documented(Dad(RegisterPair::from_code(p))),
        (0, 2) => E::documented(match (p, q) {
            (0, 0) => Stax(RegisterPair::BC),
            (1, 0) => Stax(RegisterPair::DE),
            (2, 0) => Shld,
            (3, 0) => Sta,
            (0, _) => Ldax(RegisterPair::BC),
            (1, _) => Ldax(RegisterPair::DE),
            (2, _) => Lhld,
            _ => Lda,
        }),
        (0, 3) if q == 0 => E::documented(Inx(RegisterPair::from_code(p))),
        (0, 3) => E::documented(Dcx(RegisterPair::from_code(p))),
        (0, 4) => E::documented(Inr(Operand::from_code(y))),
        (0, 5) => E::documented(Dcr(Operand::from_code(y))),
        (0, 6) => E::documented(Mvi(Operand::from_code(y))),
        (0, _) => E::documented(match y {
            0 => Rlc,
            1 => Rrc,
            2 => Ral,
            3 => Rar,
            4 => Daa,
            5 => Cma,
            6 => Stc,
            _ => Cmc,
        }),
        // MOV M,M is HLT.
        (1, 6) if y == 6 => E::documented(Hlt),
        (1, _) => E::documented(Mov {
            dst: Operand::from_code(y),
            src: Operand::from_code(z),
        }),
        (2, _) => E::documented(Alu(AluOp::from_code(y), Operand::from_code(z))),
        (_, 0) => E::documented(Rcc(Condition::from_code(y))),
        (_, 1) => match (p, q) {
            (_, 0) => E::documented(Pop(StackPair::from_code(p))),
            (0, _) => E::documented(Ret),
            // 0xD9
            (1, _) => E::alias(Ret),
            (2, _) => E::documented(Pchl),
            _ => E::documented(Sphl),
        },
        (_, 2) => E::documented(Jcc(Condition::from_code(y))),
        (_, 3) => match y {
            0 => E::documented(Jmp),
            // 0xCB
            1 => E::alias(Jmp),
            2 => E::documented(Out),
            3 => E::documented(In),
            4 => E::documented(Xthl),
            5 => E::documented(Xchg),
            6 => E::documented(Di),
            _ => E::documented(Ei),
        },
        (_, 4) => E::documented(Ccc(Condition::from_code(y))),
        (_, 5) => match (p, q) {
            (_, 0) => E::documented(Push(StackPair::from_code(p))),
            (0, _) => E::documented(Call),
            // 0xDD, 0xED, 0xFD
            _ => E::alias(Call),
        },
        (_, 6) => E::documented(AluImmediate(AluOp::from_code(y))),
        _ => E::documented(Rst(y)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undocumented_encodings_are_the_known_twelve() {
        let aliases: Vec<u8> = (0..=0xFFu8).filter(|&op| !entry(op).documented).collect();
        assert_eq!(
            aliases,
            vec![0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38, 0xCB, 0xD9, 0xDD, 0xED, 0xFD]
        );
        assert_eq!(entry(0xCB).instruction, Instruction::Jmp);
        assert_eq!(entry(0xD9).instruction, Instruction::Ret);
        assert_eq!(entry(0xFD).instruction, Instruction::Call);
    }

    #[test]
    fn reject_policy_drops_only_aliases() {
        for op in 0..=0xFFu8 {
            let documented = entry(op).documented;
            assert_eq!(lookup(op, UndocumentedOpcodes::Reject).is_some(), documented);
            assert!(lookup(op, UndocumentedOpcodes::Alias).is_some());
        }
    }

    #[test]
    fn decodes_representative_opcodes() {
        use Instruction::*;
        let cases = [
            (0x01, Lxi(RegisterPair::BC)),
            (0x0A, Ldax(RegisterPair::BC)),
            (0x12, Stax(RegisterPair::DE)),
            (0x22, Shld),
            (0x2A, Lhld),
            (0x32, Sta),
            (0x3A, Lda),
            (0x39, Dad(RegisterPair::SP)),
            (0x34, Inr(Operand::M)),
            (0x3D, Dcr(Operand::Reg(Register::A))),
            (0x27, Daa),
            (0x41, Mov {
                dst: Operand::Reg(Register::B),
                src: Operand::Reg(Register::C),
            }),
            (0x77, Mov {
                dst: Operand::M,
                src: Operand::Reg(Register::A),
            }),
            (0x76, Hlt),
            (0xA0, Alu(AluOp::Ana, Operand::Reg(Register::B))),
            (0xBE, Alu(AluOp::Cmp, Operand::M)),
            (0xC0, Rcc(Condition::NotZero)),
            (0xF1, Pop(StackPair::PSW)),
            (0xE9, Pchl),
            (0xF9, Sphl),
            (0xFA, Jcc(Condition::Minus)),
            (0xD3, Out),
            (0xDB, In),
            (0xE3, Xthl),
            (0xEB, Xchg),
            (0xF3, Di),
            (0xFB, Ei),
            (0xEC, Ccc(Condition::ParityEven)),
            (0xC5, Push(StackPair::BC)),
            (0xCD, Call),
            (0xDE, AluImmediate(AluOp::Sbb)),
            (0xFF, Rst(7)),
        ];
        for (op, expected) in cases {
            assert_eq!(entry(op).instruction, expected, "opcode {op:02X}");
            assert!(entry(op).documented, "opcode {op:02X}");
        }
    }

    #[test]
    fn lengths_match_operand_bytes() {
        assert_eq!(entry(0x00).instruction.length(), 1);
        assert_eq!(entry(0x06).instruction.length(), 2);
        assert_eq!(entry(0xFE).instruction.length(), 2);
        assert_eq!(entry(0xDB).instruction.length(), 2);
        assert_eq!(entry(0x21).instruction.length(), 3);
        assert_eq!(entry(0xC4).instruction.length(), 3);
        assert_eq!(entry(0xC9).instruction.length(), 1);
    }

    #[test]
    fn conditions_test_one_flag() {
        let flags = Flags::ZERO | Flags::PARITY;
        assert!(Condition::Zero.holds(flags));
        assert!(!Condition::NotZero.holds(flags));
        assert!(Condition::NoCarry.holds(flags));
        assert!(Condition::ParityEven.holds(flags));
        assert!(Condition::Plus.holds(flags));
        assert!(Condition::Minus.holds(Flags::SIGN));
    }
}
