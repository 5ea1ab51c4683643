use super::{Cpu8080, Flag};

impl Cpu8080 {
    /// Sign, Zero and Parity from an 8-bit result.
    #[inline]
    pub(super) fn set_szp(&mut self, value: u8) {
        self.set_flag(Flag::Zero, value == 0);
        self.set_flag(Flag::Sign, (value & 0x80) != 0);
        self.set_flag(Flag::Parity, value.count_ones() % 2 == 0);
    }

    /// 8-bit adder shared by every arithmetic instruction.
    ///
    /// Sets S/Z/P from the sum, Auxiliary-Carry from the carry out of bit 3
    /// and Carry from the carry out of bit 7, and returns the sum.
    fn adder(&mut self, a: u8, value: u8, carry_in: bool) -> u8 {
        let carry_in = carry_in as u16;
        let full = a as u16 + value as u16 + carry_in;
        let half = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in;
        let result = full as u8;

        self.set_szp(result);
        self.set_flag(Flag::AuxCarry, half > 0x0F);
        self.set_flag(Flag::Carry, full > 0xFF);
        result
    }

    /// Subtraction the way the 8080 ALU does it: add the one's complement of
    /// the subtrahend with an inverted borrow, then invert the carry out.
    ///
    /// Auxiliary-Carry is the (non-inverted) carry out of bit 3 of that
    /// addition. A subtrahend of zero without borrow therefore always carries
    /// out and never leaves Carry set.
    fn subtractor(&mut self, a: u8, value: u8, borrow_in: bool) -> u8 {
        let result = self.adder(a, !value, !borrow_in);
        let borrow = !self.get_flag(Flag::Carry);
        self.set_flag(Flag::Carry, borrow);
        result
    }

    /// ADD/ADC on A. `use_carry` selects ADC.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let carry_in = use_carry && self.get_flag(Flag::Carry);
        self.regs.a = self.adder(self.regs.a, value, carry_in);
    }

    /// SUB/SBB on A. `use_carry` selects SBB.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let borrow_in = use_carry && self.get_flag(Flag::Carry);
        self.regs.a = self.subtractor(self.regs.a, value, borrow_in);
    }

    /// CMP: flags of `A - value`, accumulator untouched.
    pub(super) fn alu_cmp(&mut self, value: u8) {
        self.subtractor(self.regs.a, value, false);
    }

    /// ANA: Auxiliary-Carry is the OR of bit 3 of both operands.
    pub(super) fn alu_and(&mut self, value: u8) {
        let a = self.regs.a;
        let result = a & value;
        self.set_szp(result);
        self.set_flag(Flag::AuxCarry, ((a | value) & 0x08) != 0);
        self.set_flag(Flag::Carry, false);
        self.regs.a = result;
    }

    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.set_szp(result);
        self.set_flag(Flag::AuxCarry, false);
        self.set_flag(Flag::Carry, false);
        self.regs.a = result;
    }

    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.set_szp(result);
        self.set_flag(Flag::AuxCarry, false);
        self.set_flag(Flag::Carry, false);
        self.regs.a = result;
    }

    /// INR: every flag but Carry.
    pub(super) fn alu_inr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_szp(result);
        self.set_flag(Flag::AuxCarry, (value & 0x0F) == 0x0F);
        result
    }

    /// DCR: every flag but Carry. The ALU adds 0xFF, so Auxiliary-Carry is
    /// set unless the low nibble borrows.
    pub(super) fn alu_dcr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_szp(result);
        self.set_flag(Flag::AuxCarry, (value & 0x0F) != 0x00);
        result
    }

    /// DAD: 16-bit add into HL, Carry only.
    pub(super) fn alu_dad(&mut self, value: u16) {
        let (result, carry) = self.regs.hl().overflowing_add(value);
        self.set_flag(Flag::Carry, carry);
        self.regs.set_hl(result);
    }

    /// DAA: decimal-adjust A after a BCD addition.
    ///
    /// The correction is added through the normal adder, so S/Z/P/A come from
    /// that addition. Carry is only ever set here, never cleared.
    pub(super) fn alu_daa(&mut self) {
        let a = self.regs.a;
        let low = a & 0x0F;
        let high = a >> 4;
        let mut correction = 0u8;
        let mut carry = self.get_flag(Flag::Carry);

        if low > 9 || self.get_flag(Flag::AuxCarry) {
            correction |= 0x06;
        }
        if carry || high > 9 || (high >= 9 && low > 9) {
            correction |= 0x60;
            carry = true;
        }

        self.regs.a = self.adder(a, correction, false);
        self.set_flag(Flag::Carry, carry);
    }

    /// RLC: rotate A left, bit 7 into Carry and bit 0.
    pub(super) fn alu_rlc(&mut self) {
        let a = self.regs.a;
        self.regs.a = a.rotate_left(1);
        self.set_flag(Flag::Carry, (a & 0x80) != 0);
    }

    /// RRC: rotate A right, bit 0 into Carry and bit 7.
    pub(super) fn alu_rrc(&mut self) {
        let a = self.regs.a;
        self.regs.a = a.rotate_right(1);
        self.set_flag(Flag::Carry, (a & 0x01) != 0);
    }

    /// RAL: rotate A left through Carry.
    pub(super) fn alu_ral(&mut self) {
        let a = self.regs.a;
        let carry_in = self.get_flag(Flag::Carry) as u8;
        self.regs.a = (a << 1) | carry_in;
        self.set_flag(Flag::Carry, (a & 0x80) != 0);
    }

    /// RAR: rotate A right through Carry.
    pub(super) fn alu_rar(&mut self) {
        let a = self.regs.a;
        let carry_in = if self.get_flag(Flag::Carry) { 0x80 } else { 0 };
        self.regs.a = (a >> 1) | carry_in;
        self.set_flag(Flag::Carry, (a & 0x01) != 0);
    }
}
