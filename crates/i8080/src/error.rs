use thiserror::Error;

/// Errors surfaced by the 8080 core.
///
/// All of them are fatal for the current run: the processor has no notion of
/// a soft failure mid-instruction, so callers of `step` should stop driving
/// the machine once one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no handler for opcode 0x{opcode:02X} at 0x{address:04X}")]
    Decode { opcode: u8, address: u16 },
    #[error("memory access at 0x{address:04X} outside capacity of {capacity} bytes")]
    MemoryBounds { address: u16, capacity: usize },
    #[error("memory capacity {0} is not within 1..=65536 bytes")]
    InvalidCapacity(usize),
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
    #[error("unknown register '{0}'")]
    UnknownRegister(String),
}

pub type Result<T> = std::result::Result<T, Error>;
