mod alu;
pub mod decode;
mod exec;
mod flags;
mod helpers;
mod regs;
mod step;


pub use decode::{AluOp, Condition, Instruction, OpcodeEntry, Operand, StackPair};
pub use flags::{Flag, Flags};
pub use regs::{Register, RegisterPair, Registers};

use crate::config::UndocumentedOpcodes;
use crate::error::Result;

/// Bus interface of the 8080 core.
///
/// The CPU reaches memory and the I/O ports only through this trait, so it
/// never owns either. Memory accesses are fallible to surface accesses past a
/// restricted capacity; port accesses always succeed.
pub trait Bus8080 {
    fn mem_read(&mut self, addr: u16) -> Result<u8>;
    fn mem_write(&mut self, addr: u16, value: u8) -> Result<()>;

    /// Fail the way an access to `addr` would, without changing anything.
    ///
    /// Multi-byte stores probe every target first so that a store either
    /// lands completely or not at all. The default probes through
    /// `mem_read`; buses whose reads have side effects should override it.
    fn mem_check(&mut self, addr: u16) -> Result<()> {
        self.mem_read(addr).map(|_| ())
    }

    fn io_read(&mut self, port: u8) -> u8;
    fn io_write(&mut self, port: u8, value: u8);
}

/// Programmer-visible state of one Intel 8080.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cpu8080 {
    pub regs: Registers,
    flags: Flags,
    interrupts_enabled: bool,
    halted: bool,
    cycles: u64,
    undocumented: UndocumentedOpcodes,
}

impl Cpu8080 {
    /// Create a new CPU instance in reset state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_undocumented(undocumented: UndocumentedOpcodes) -> Self {
        Self {
            undocumented,
            ..Self::default()
        }
    }

    /// Zero all registers, PC, SP and the cycle counter, and bring the flags
    /// byte back to its reserved-bits-only value. The undocumented-opcode
    /// policy is part of the wiring, not of the state, and is kept.
    pub fn reset(&mut self) {
        *self = Self::with_undocumented(self.undocumented);
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.flags.contains(flag.mask())
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.flags.set(flag.mask(), value);
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The flags byte as PUSH PSW stores it.
    pub fn flags_byte(&self) -> u8 {
        self.flags.to_byte()
    }

    /// Load the flags from a byte; the reserved bits of `value` are ignored.
    pub fn set_flags_byte(&mut self, value: u8) {
        self.flags = Flags::from_byte(value);
    }

    pub fn register(&self, reg: Register) -> u8 {
        self.regs.get(reg)
    }

    pub fn set_register(&mut self, reg: Register, value: u8) {
        self.regs.set(reg, value);
    }

    pub fn pair(&self, pair: RegisterPair) -> u16 {
        self.regs.pair(pair)
    }

    pub fn set_pair(&mut self, pair: RegisterPair, value: u16) {
        self.regs.set_pair(pair, value);
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    pub fn set_sp(&mut self, value: u16) {
        self.regs.sp = value;
    }

    /// Total cycles consumed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    pub fn undocumented_opcodes(&self) -> UndocumentedOpcodes {
        self.undocumented
    }
}
