/*!
load_store.rs - Load / Store opcode family handler

Overview
========
Loads (set Z/N flags; page-cross penalty charged by the dispatcher):
    LDA: A9, A5, B5, AD, BD*, B9*, A1, B1*
    LDX: A2, A6, B6, AE, BE*
    LDY: A0, A4, B4, AC, BC*

Stores (no flags changed, never penalized):
    STA: 85, 95, 8D, 9D, 99, 81, 91
    STX: 86, 96, 8E
    STY: 84, 94, 8C

Immediate operands resolve to the operand byte's own address, so loads read
through the bus uniformly for every mode.
*/

use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::instruction::Instruction;
use crate::cpu::opcode::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::memory::MemoryBus;

/// Returns `true` when `inst` is a load or store.
pub(super) fn handle<C: CpuRegs, M: MemoryBus + ?Sized>(
    inst: &Instruction,
    addr: u16,
    cpu: &mut C,
    bus: &mut M,
    _cycles: &mut u64,
) -> bool {
    match inst.mnemonic() {
        Mnemonic::Lda => lda(cpu, bus.read(addr)),
        Mnemonic::Ldx => ldx(cpu, bus.read(addr)),
        Mnemonic::Ldy => ldy(cpu, bus.read(addr)),
        Mnemonic::Sta => bus.write(addr, cpu.a()),
        Mnemonic::Stx => bus.write(addr, cpu.x()),
        Mnemonic::Sty => bus.write(addr, cpu.y()),
        _ => return false,
    }
    true
}
