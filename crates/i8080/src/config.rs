use typed_builder::TypedBuilder;

use crate::ADDRESS_SPACE;

/// How the decoder treats the undocumented opcode encodings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UndocumentedOpcodes {
    /// Run them as their documented twins, like the silicon does.
    #[default]
    Alias,
    /// Leave them without a handler so that stepping onto one is a decode error.
    Reject,
}

/// Construction parameters for a [`Machine`](crate::Machine).
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct MachineConfig {
    /// Memory capacity in bytes, at most the full 64 KiB address space.
    #[builder(default = ADDRESS_SPACE)]
    pub memory_size: usize,
    #[builder(default)]
    pub undocumented_opcodes: UndocumentedOpcodes,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
