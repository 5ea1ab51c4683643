//! Instruction-level emulator core for the Intel 8080.
//!
//! The crate models the programmer-visible processor state, a flat memory and
//! the full 256-entry opcode map. A [`Machine`] owns one processor and one
//! memory; everything beyond single-stepping (run loops, loaders, devices) is
//! left to the caller.

pub mod config;
pub mod cpu;
pub mod error;
pub mod io;
pub mod machine;
pub mod memory;

pub use config::{MachineConfig, UndocumentedOpcodes};
pub use cpu::{Bus8080, Condition, Cpu8080, Flag, Flags, Instruction, Register, RegisterPair};
pub use error::{Error, Result};
pub use io::{NullPorts, Ports};
pub use machine::Machine;
pub use memory::Memory;

/// Size of the 16-bit address space in bytes.
pub const ADDRESS_SPACE: usize = 0x10000;
