use super::{Bus8080, Cpu8080, Operand};
use crate::error::Result;

impl Cpu8080 {
    #[inline]
    pub(super) fn fetch8<B: Bus8080>(&mut self, bus: &mut B) -> Result<u8> {
        let value = bus.mem_read(self.regs.pc)?;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(value)
    }

    #[inline]
    pub(super) fn fetch16<B: Bus8080>(&mut self, bus: &mut B) -> Result<u16> {
        let lo = self.fetch8(bus)?;
        let hi = self.fetch8(bus)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Little-endian word read; the second byte comes from `addr + 1`
    /// modulo the address space.
    pub(super) fn read16<B: Bus8080>(&mut self, bus: &mut B, addr: u16) -> Result<u16> {
        let lo = bus.mem_read(addr)?;
        let hi = bus.mem_read(addr.wrapping_add(1))?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Little-endian word write. Both bytes are bounds-checked before either
    /// is stored.
    pub(super) fn write16<B: Bus8080>(&mut self, bus: &mut B, addr: u16, value: u16) -> Result<()> {
        let [lo, hi] = value.to_le_bytes();
        let hi_addr = addr.wrapping_add(1);
        bus.mem_check(addr)?;
        bus.mem_check(hi_addr)?;
        bus.mem_write(addr, lo)?;
        bus.mem_write(hi_addr, hi)
    }

    /// Read an 8-bit operand; `M` goes through memory at HL.
    #[inline]
    pub(super) fn read_operand<B: Bus8080>(&mut self, bus: &mut B, operand: Operand) -> Result<u8> {
        match operand {
            Operand::Reg(reg) => Ok(self.regs.get(reg)),
            Operand::M => bus.mem_read(self.regs.hl()),
        }
    }

    #[inline]
    pub(super) fn write_operand<B: Bus8080>(
        &mut self,
        bus: &mut B,
        operand: Operand,
        value: u8,
    ) -> Result<()> {
        match operand {
            Operand::Reg(reg) => {
                self.regs.set(reg, value);
                Ok(())
            }
            Operand::M => bus.mem_write(self.regs.hl(), value),
        }
    }

    /// Push a word: memory[SP-1] = high byte, then memory[SP-2] = low byte.
    /// Nothing is stored and SP is kept when either slot is out of range.
    pub(super) fn push_u16<B: Bus8080>(&mut self, bus: &mut B, value: u16) -> Result<()> {
        let [lo, hi] = value.to_le_bytes();
        let hi_addr = self.regs.sp.wrapping_sub(1);
        let lo_addr = self.regs.sp.wrapping_sub(2);
        bus.mem_check(hi_addr)?;
        bus.mem_check(lo_addr)?;
        bus.mem_write(hi_addr, hi)?;
        bus.mem_write(lo_addr, lo)?;
        self.regs.sp = lo_addr;
        Ok(())
    }

    pub(super) fn pop_u16<B: Bus8080>(&mut self, bus: &mut B) -> Result<u16> {
        let value = self.read16(bus, self.regs.sp)?;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        Ok(value)
    }

    /// Shared tail of CALL and RST: push the return address and jump.
    pub(super) fn call_to<B: Bus8080>(&mut self, bus: &mut B, target: u16) -> Result<()> {
        let ret = self.regs.pc;
        self.push_u16(bus, ret)?;
        self.regs.pc = target;
        Ok(())
    }
}
