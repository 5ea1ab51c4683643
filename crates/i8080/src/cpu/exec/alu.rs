use crate::cpu::{AluOp, Bus8080, Cpu8080, Flag, Operand, RegisterPair};
use crate::error::Result;

impl Cpu8080 {
    fn apply_alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbb => self.alu_sub(value, true),
            AluOp::Ana => self.alu_and(value),
            AluOp::Xra => self.alu_xor(value),
            AluOp::Ora => self.alu_or(value),
            AluOp::Cmp => self.alu_cmp(value),
        }
    }

    /// ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP r or M.
    pub(in crate::cpu) fn exec_alu<B: Bus8080>(
        &mut self,
        bus: &mut B,
        op: AluOp,
        src: Operand,
    ) -> Result<u32> {
        let value = self.read_operand(bus, src)?;
        self.apply_alu(op, value);
        Ok(if src.is_memory() { 7 } else { 4 })
    }

    /// ADI/ACI/SUI/SBI/ANI/XRI/ORI/CPI d8.
    pub(in crate::cpu) fn exec_alu_imm<B: Bus8080>(&mut self, bus: &mut B, op: AluOp) -> Result<u32> {
        let value = self.fetch8(bus)?;
        self.apply_alu(op, value);
        Ok(7)
    }

    pub(in crate::cpu) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    /// CMA: complement A, no flags.
    pub(in crate::cpu) fn exec_cma(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        4
    }

    pub(in crate::cpu) fn exec_stc(&mut self) -> u32 {
        self.set_flag(Flag::Carry, true);
        4
    }

    pub(in crate::cpu) fn exec_cmc(&mut self) -> u32 {
        let carry = self.get_flag(Flag::Carry);
        self.set_flag(Flag::Carry, !carry);
        4
    }

    // Rotates touch Carry only.

    pub(in crate::cpu) fn exec_rlc(&mut self) -> u32 {
        self.alu_rlc();
        4
    }

    pub(in crate::cpu) fn exec_rrc(&mut self) -> u32 {
        self.alu_rrc();
        4
    }

    pub(in crate::cpu) fn exec_ral(&mut self) -> u32 {
        self.alu_ral();
        4
    }

    pub(in crate::cpu) fn exec_rar(&mut self) -> u32 {
        self.alu_rar();
        4
    }

    pub(in crate::cpu) fn exec_dad(&mut self, pair: RegisterPair) -> u32 {
        let value = self.regs.pair(pair);
        self.alu_dad(value);
        10
    }
}
