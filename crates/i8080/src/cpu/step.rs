use super::{decode, Bus8080, Cpu8080};
use crate::error::{Error, Result};

/// Cycles charged for each step spent in the halted state.
const HALTED_STEP_CYCLES: u32 = 4;
/// Cycles of an interrupt acknowledge with an RST instruction.
const INTERRUPT_CYCLES: u32 = 11;

impl Cpu8080 {
    /// Execute a single instruction and return the number of cycles consumed.
    ///
    /// A halted CPU fetches nothing and only burns [`HALTED_STEP_CYCLES`].
    /// An instruction that fails takes no effect: the processor state is put
    /// back as it was before the fetch, with PC on the offending opcode, and
    /// stores are bounds-checked before anything is written. The run should
    /// stop there.
    pub fn step<B: Bus8080>(&mut self, bus: &mut B) -> Result<u32> {
        if self.halted {
            self.cycles += u64::from(HALTED_STEP_CYCLES);
            return Ok(HALTED_STEP_CYCLES);
        }

        let address = self.regs.pc;
        let opcode = bus.mem_read(address)?;
        let Some(entry) = decode::lookup(opcode, self.undocumented) else {
            log::error!(
                "8080 decode error: opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} A=0x{a:02X} F=0x{f:02X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                opcode = opcode,
                pc = address,
                sp = self.regs.sp,
                a = self.regs.a,
                f = self.flags_byte(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
            return Err(Error::Decode { opcode, address });
        };

        if !entry.documented {
            log::debug!(
                "undocumented opcode 0x{opcode:02X} at 0x{address:04X} runs as {:?}",
                entry.instruction
            );
        }

        let before = self.clone();
        self.regs.pc = address.wrapping_add(1);
        let cycles = match entry.instruction.execute(self, bus) {
            Ok(cycles) => cycles,
            Err(err) => {
                *self = before;
                return Err(err);
            }
        };
        self.cycles += u64::from(cycles);

        log::trace!(
            "{address:04X}: {opcode:02X} {:?} ({cycles} cycles)",
            entry.instruction
        );
        Ok(cycles)
    }

    /// Maskable interrupt carrying `RST vector`.
    ///
    /// Accepted only while interrupts are enabled: the enable latch is
    /// cleared, a pending HLT is released, PC is pushed and execution resumes
    /// at `8 * vector`. Returns the cycles consumed, or `None` when the
    /// interrupt was ignored.
    pub fn interrupt<B: Bus8080>(&mut self, bus: &mut B, vector: u8) -> Result<Option<u32>> {
        if !self.interrupts_enabled {
            return Ok(None);
        }

        let target = (u16::from(vector) & 0x07) << 3;
        self.call_to(bus, target)?;
        self.interrupts_enabled = false;
        self.halted = false;
        self.cycles += u64::from(INTERRUPT_CYCLES);

        log::debug!("8080 interrupt RST {} -> 0x{target:04X}", vector & 0x07);
        Ok(Some(INTERRUPT_CYCLES))
    }
}
