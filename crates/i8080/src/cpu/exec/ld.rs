use crate::cpu::{Bus8080, Cpu8080, Operand, RegisterPair};
use crate::error::Result;

impl Cpu8080 {
    pub(in crate::cpu) fn exec_mov<B: Bus8080>(
        &mut self,
        bus: &mut B,
        dst: Operand,
        src: Operand,
    ) -> Result<u32> {
        let value = self.read_operand(bus, src)?;
        self.write_operand(bus, dst, value)?;

        if dst.is_memory() || src.is_memory() {
            Ok(7)
        } else {
            Ok(5)
        }
    }

    pub(in crate::cpu) fn exec_mvi<B: Bus8080>(&mut self, bus: &mut B, dst: Operand) -> Result<u32> {
        let value = self.fetch8(bus)?;
        self.write_operand(bus, dst, value)?;
        Ok(if dst.is_memory() { 10 } else { 7 })
    }

    pub(in crate::cpu) fn exec_lxi<B: Bus8080>(
        &mut self,
        bus: &mut B,
        pair: RegisterPair,
    ) -> Result<u32> {
        let value = self.fetch16(bus)?;
        self.regs.set_pair(pair, value);
        Ok(10)
    }

    pub(in crate::cpu) fn exec_lda<B: Bus8080>(&mut self, bus: &mut B) -> Result<u32> {
        let addr = self.fetch16(bus)?;
        self.regs.a = bus.mem_read(addr)?;
        Ok(13)
    }

    pub(in crate::cpu) fn exec_sta<B: Bus8080>(&mut self, bus: &mut B) -> Result<u32> {
        let addr = self.fetch16(bus)?;
        bus.mem_write(addr, self.regs.a)?;
        Ok(13)
    }

    /// LHLD: L from `addr`, H from `addr + 1`.
    pub(in crate::cpu) fn exec_lhld<B: Bus8080>(&mut self, bus: &mut B) -> Result<u32> {
        let addr = self.fetch16(bus)?;
        let value = self.read16(bus, addr)?;
        self.regs.set_hl(value);
        Ok(16)
    }

    pub(in crate::cpu) fn exec_shld<B: Bus8080>(&mut self, bus: &mut B) -> Result<u32> {
        let addr = self.fetch16(bus)?;
        let hl = self.regs.hl();
        self.write16(bus, addr, hl)?;
        Ok(16)
    }

    pub(in crate::cpu) fn exec_ldax<B: Bus8080>(
        &mut self,
        bus: &mut B,
        pair: RegisterPair,
    ) -> Result<u32> {
        let addr = self.regs.pair(pair);
        self.regs.a = bus.mem_read(addr)?;
        Ok(7)
    }

    pub(in crate::cpu) fn exec_stax<B: Bus8080>(
        &mut self,
        bus: &mut B,
        pair: RegisterPair,
    ) -> Result<u32> {
        let addr = self.regs.pair(pair);
        bus.mem_write(addr, self.regs.a)?;
        Ok(7)
    }

    pub(in crate::cpu) fn exec_xchg(&mut self) -> u32 {
        std::mem::swap(&mut self.regs.d, &mut self.regs.h);
        std::mem::swap(&mut self.regs.e, &mut self.regs.l);
        4
    }
}
