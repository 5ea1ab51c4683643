mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus8080, Cpu8080, Instruction};
use crate::error::Result;

impl Instruction {
    /// Run this instruction against `cpu` and `bus` and return the cycles it
    /// took.
    ///
    /// The opcode byte has already been consumed; handlers fetch their own
    /// immediate bytes and addresses, so PC ends up past the full encoding
    /// unless the instruction redirects it.
    pub fn execute<B: Bus8080>(self, cpu: &mut Cpu8080, bus: &mut B) -> Result<u32> {
        use Instruction::*;

        match self {
            Nop => Ok(4),

            Mov { dst, src } => cpu.exec_mov(bus, dst, src),
            Mvi(dst) => cpu.exec_mvi(bus, dst),
            Lxi(pair) => cpu.exec_lxi(bus, pair),
            Lda => cpu.exec_lda(bus),
            Sta => cpu.exec_sta(bus),
            Lhld => cpu.exec_lhld(bus),
            Shld => cpu.exec_shld(bus),
            Ldax(pair) => cpu.exec_ldax(bus, pair),
            Stax(pair) => cpu.exec_stax(bus, pair),
            Xchg => Ok(cpu.exec_xchg()),

            Alu(op, src) => cpu.exec_alu(bus, op, src),
            AluImmediate(op) => cpu.exec_alu_imm(bus, op),
            Daa => Ok(cpu.exec_daa()),
            Cma => Ok(cpu.exec_cma()),
            Stc => Ok(cpu.exec_stc()),
            Cmc => Ok(cpu.exec_cmc()),
            Rlc => Ok(cpu.exec_rlc()),
            Rrc => Ok(cpu.exec_rrc()),
            Ral => Ok(cpu.exec_ral()),
            Rar => Ok(cpu.exec_rar()),
            Dad(pair) => Ok(cpu.exec_dad(pair)),

            Inr(operand) => cpu.exec_inr(bus, operand),
            Dcr(operand) => cpu.exec_dcr(bus, operand),
            Inx(pair) => Ok(cpu.exec_inx(pair)),
            Dcx(pair) => Ok(cpu.exec_dcx(pair)),

            Jmp => cpu.exec_jmp(bus),
            Jcc(cond) => cpu.exec_jcc(bus, cond),
            Call => cpu.exec_call(bus),
            Ccc(cond) => cpu.exec_ccc(bus, cond),
            Ret => cpu.exec_ret(bus),
            Rcc(cond) => cpu.exec_rcc(bus, cond),
            Rst(n) => cpu.exec_rst(bus, n),
            Pchl => Ok(cpu.exec_pchl()),

            Push(pair) => cpu.exec_push(bus, pair),
            Pop(pair) => cpu.exec_pop(bus, pair),
            Xthl => cpu.exec_xthl(bus),
            Sphl => Ok(cpu.exec_sphl()),

            In => cpu.exec_in(bus),
            Out => cpu.exec_out(bus),
            Ei => Ok(cpu.exec_ei()),
            Di => Ok(cpu.exec_di()),
            Hlt => Ok(cpu.exec_hlt()),
        }
    }
}
