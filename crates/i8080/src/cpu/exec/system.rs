use crate::cpu::{Bus8080, Cpu8080};
use crate::error::Result;

impl Cpu8080 {
    pub(in crate::cpu) fn exec_in<B: Bus8080>(&mut self, bus: &mut B) -> Result<u32> {
        let port = self.fetch8(bus)?;
        self.regs.a = bus.io_read(port);
        Ok(10)
    }

    pub(in crate::cpu) fn exec_out<B: Bus8080>(&mut self, bus: &mut B) -> Result<u32> {
        let port = self.fetch8(bus)?;
        bus.io_write(port, self.regs.a);
        Ok(10)
    }

    pub(in crate::cpu) fn exec_ei(&mut self) -> u32 {
        self.interrupts_enabled = true;
        4
    }

    pub(in crate::cpu) fn exec_di(&mut self) -> u32 {
        self.interrupts_enabled = false;
        4
    }

    /// HLT: PC already points past the opcode; the CPU idles until an
    /// interrupt or a reset.
    pub(in crate::cpu) fn exec_hlt(&mut self) -> u32 {
        self.halted = true;
        log::debug!("8080 halted at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
        7
    }
}
