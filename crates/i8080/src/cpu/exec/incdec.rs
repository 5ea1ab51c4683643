use crate::cpu::{Bus8080, Cpu8080, Operand, RegisterPair};
use crate::error::Result;

impl Cpu8080 {
    pub(in crate::cpu) fn exec_inr<B: Bus8080>(&mut self, bus: &mut B, operand: Operand) -> Result<u32> {
        let value = self.read_operand(bus, operand)?;
        let result = self.alu_inr(value);
        self.write_operand(bus, operand, result)?;
        Ok(if operand.is_memory() { 10 } else { 5 })
    }

    pub(in crate::cpu) fn exec_dcr<B: Bus8080>(&mut self, bus: &mut B, operand: Operand) -> Result<u32> {
        let value = self.read_operand(bus, operand)?;
        let result = self.alu_dcr(value);
        self.write_operand(bus, operand, result)?;
        Ok(if operand.is_memory() { 10 } else { 5 })
    }

    // INX/DCX leave every flag alone.

    pub(in crate::cpu) fn exec_inx(&mut self, pair: RegisterPair) -> u32 {
        let value = self.regs.pair(pair).wrapping_add(1);
        self.regs.set_pair(pair, value);
        5
    }

    pub(in crate::cpu) fn exec_dcx(&mut self, pair: RegisterPair) -> u32 {
        let value = self.regs.pair(pair).wrapping_sub(1);
        self.regs.set_pair(pair, value);
        5
    }
}
