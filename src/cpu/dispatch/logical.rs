/*!
logical.rs - AND / ORA / EOR / BIT opcode family handler

AND, ORA and EOR write A and set Z/N. BIT only sets flags: Z from `A & M`,
N and V copied from bits 7 and 6 of the memory operand.
*/

use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::instruction::Instruction;
use crate::cpu::opcode::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::memory::MemoryBus;

pub(super) fn handle<C: CpuRegs, M: MemoryBus + ?Sized>(
    inst: &Instruction,
    addr: u16,
    cpu: &mut C,
    bus: &mut M,
    _cycles: &mut u64,
) -> bool {
    match inst.mnemonic() {
        Mnemonic::And => and(cpu, bus.read(addr)),
        Mnemonic::Ora => ora(cpu, bus.read(addr)),
        Mnemonic::Eor => eor(cpu, bus.read(addr)),
        Mnemonic::Bit => bit(cpu, bus.read(addr)),
        _ => return false,
    }
    true
}
