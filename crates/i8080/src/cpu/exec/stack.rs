use crate::cpu::{Bus8080, Cpu8080, StackPair};
use crate::error::Result;

impl Cpu8080 {
    pub(in crate::cpu) fn exec_push<B: Bus8080>(&mut self, bus: &mut B, pair: StackPair) -> Result<u32> {
        let value = match pair {
            StackPair::BC => self.regs.bc(),
            StackPair::DE => self.regs.de(),
            StackPair::HL => self.regs.hl(),
            StackPair::PSW => u16::from_be_bytes([self.regs.a, self.flags_byte()]),
        };
        self.push_u16(bus, value)?;
        Ok(11)
    }

    pub(in crate::cpu) fn exec_pop<B: Bus8080>(&mut self, bus: &mut B, pair: StackPair) -> Result<u32> {
        let value = self.pop_u16(bus)?;
        match pair {
            StackPair::BC => self.regs.set_bc(value),
            StackPair::DE => self.regs.set_de(value),
            StackPair::HL => self.regs.set_hl(value),
            StackPair::PSW => {
                let [a, f] = value.to_be_bytes();
                self.regs.a = a;
                self.set_flags_byte(f);
            }
        }
        Ok(10)
    }

    /// XTHL: swap HL with the word on top of the stack. SP is unchanged.
    pub(in crate::cpu) fn exec_xthl<B: Bus8080>(&mut self, bus: &mut B) -> Result<u32> {
        let sp = self.regs.sp;
        let top = self.read16(bus, sp)?;
        let hl = self.regs.hl();
        self.write16(bus, sp, hl)?;
        self.regs.set_hl(top);
        Ok(18)
    }

    pub(in crate::cpu) fn exec_sphl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        5
    }
}
