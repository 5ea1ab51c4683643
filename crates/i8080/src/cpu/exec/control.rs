use crate::cpu::{Bus8080, Condition, Cpu8080};
use crate::error::Result;

impl Cpu8080 {
    pub(in crate::cpu) fn exec_jmp<B: Bus8080>(&mut self, bus: &mut B) -> Result<u32> {
        let addr = self.fetch16(bus)?;
        self.regs.pc = addr;
        Ok(10)
    }

    /// Jcc: the address is always fetched, and both outcomes cost 10 cycles.
    pub(in crate::cpu) fn exec_jcc<B: Bus8080>(&mut self, bus: &mut B, cond: Condition) -> Result<u32> {
        let addr = self.fetch16(bus)?;
        if cond.holds(self.flags) {
            self.regs.pc = addr;
        }
        Ok(10)
    }

    pub(in crate::cpu) fn exec_call<B: Bus8080>(&mut self, bus: &mut B) -> Result<u32> {
        let addr = self.fetch16(bus)?;
        self.call_to(bus, addr)?;
        Ok(17)
    }

    pub(in crate::cpu) fn exec_ccc<B: Bus8080>(&mut self, bus: &mut B, cond: Condition) -> Result<u32> {
        let addr = self.fetch16(bus)?;
        if cond.holds(self.flags) {
            self.call_to(bus, addr)?;
            Ok(17)
        } else {
            Ok(11)
        }
    }

    pub(in crate::cpu) fn exec_ret<B: Bus8080>(&mut self, bus: &mut B) -> Result<u32> {
        self.regs.pc = self.pop_u16(bus)?;
        Ok(10)
    }

    pub(in crate::cpu) fn exec_rcc<B: Bus8080>(&mut self, bus: &mut B, cond: Condition) -> Result<u32> {
        if cond.holds(self.flags) {
            self.regs.pc = self.pop_u16(bus)?;
            Ok(11)
        } else {
            Ok(5)
        }
    }

    /// RST n: call to `8 * n`.
    pub(in crate::cpu) fn exec_rst<B: Bus8080>(&mut self, bus: &mut B, n: u8) -> Result<u32> {
        self.call_to(bus, u16::from(n & 0x07) << 3)?;
        Ok(11)
    }

    pub(in crate::cpu) fn exec_pchl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        5
    }
}
