/*!
addressing.rs - Effective-address resolution for decoded instructions.

Overview
========
`resolve` turns an `Instruction` plus the current index registers into the
address its handler operates on, and reports whether an index addition
crossed a page boundary.

Rules
=====
- Immediate resolves to `location + 1` (the operand byte itself).
- Zero-page indexed modes wrap inside page zero and never cross a page.
- Absolute,X / Absolute,Y / (Indirect),Y report a cross when the high byte of
  the base differs from the high byte of the result. No other mode does.
- Indirect (JMP) and both zero-page pointer modes read their 16-bit pointer
  with `read16_bug`, so a pointer at $xxFF takes its high byte from $xx00.
- Relative resolves to the branch target (end of instruction + signed offset).
- Implied / Accumulator have no address; the instruction location is returned
  as a placeholder.

Caller Assumptions
==================
Pure apart from pointer reads: registers are never modified here, and the
dispatcher decides whether a reported page cross costs a cycle.
*/

use crate::cpu::cycles::pages_differ;
use crate::cpu::instruction::{Instruction, Operand};
use crate::cpu::regs::CpuRegs;
use crate::memory::MemoryBus;

/// Resolve the effective address of `inst`. Returns `(address, page_crossed)`.
pub(crate) fn resolve<C: CpuRegs, M: MemoryBus + ?Sized>(
    inst: &Instruction,
    cpu: &C,
    bus: &mut M,
) -> (u16, bool) {
    match inst.operand() {
        Operand::Implied | Operand::Accumulator => (inst.location(), false),
        Operand::Immediate(_) => (inst.location().wrapping_add(1), false),
        Operand::ZeroPage(zp) => (zp as u16, false),
        Operand::ZeroPageX(zp) => (zp.wrapping_add(cpu.x()) as u16, false),
        Operand::ZeroPageY(zp) => (zp.wrapping_add(cpu.y()) as u16, false),
        Operand::Absolute(addr) => (addr, false),
        Operand::AbsoluteX(base) => indexed(base, cpu.x()),
        Operand::AbsoluteY(base) => indexed(base, cpu.y()),
        Operand::Indirect(ptr) => (bus.read16_bug(ptr), false),
        Operand::IndexedIndirect(zp) => (bus.read16_bug(zp.wrapping_add(cpu.x()) as u16), false),
        Operand::IndirectIndexed(zp) => {
            let base = bus.read16_bug(zp as u16);
            indexed(base, cpu.y())
        }
        Operand::Relative(_) => (inst.branch_target().unwrap_or(inst.location()), false),
    }
}

#[inline]
fn indexed(base: u16, index: u8) -> (u16, bool) {
    let addr = base.wrapping_add(index as u16);
    (addr, pages_differ(base, addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;
    use crate::memory::MemoryBus;
    use crate::test_utils::FlatMemory;

    fn decode(bytes: &[u8], at: u16) -> Instruction {
        Instruction::decode(bytes, at).unwrap()
    }

    #[test]
    fn immediate_points_at_operand_byte() {
        let mut mem = FlatMemory::new();
        let cpu = CpuState::new();
        let i = decode(&[0xA9, 0x42], 0x8000);
        assert_eq!(resolve(&i, &cpu, &mut mem), (0x8001, false));
    }

    #[test]
    fn zero_page_x_wraps_within_page_zero() {
        let mut mem = FlatMemory::new();
        let mut cpu = CpuState::new();
        cpu.x = 0x20;
        let i = decode(&[0xB5, 0xF0], 0x8000);
        assert_eq!(resolve(&i, &cpu, &mut mem), (0x0010, false));
    }

    #[test]
    fn absolute_x_reports_page_cross() {
        let mut mem = FlatMemory::new();
        let mut cpu = CpuState::new();
        cpu.x = 0x01;
        let same = decode(&[0xBD, 0x10, 0x20], 0x8000);
        assert_eq!(resolve(&same, &cpu, &mut mem), (0x2011, false));
        let cross = decode(&[0xBD, 0xFF, 0x20], 0x8000);
        assert_eq!(resolve(&cross, &cpu, &mut mem), (0x2100, true));
    }

    #[test]
    fn jmp_indirect_reproduces_page_wrap_bug() {
        let mut mem = FlatMemory::new();
        mem.write(0x01FF, 0x34);
        mem.write(0x0100, 0x12);
        mem.write(0x0200, 0x56);
        let cpu = CpuState::new();
        let i = decode(&[0x6C, 0xFF, 0x01], 0x8000);
        assert_eq!(resolve(&i, &cpu, &mut mem), (0x1234, false));
    }

    #[test]
    fn indexed_indirect_wraps_pointer_in_zero_page() {
        let mut mem = FlatMemory::new();
        mem.write(0x00FF, 0x00);
        mem.write(0x0000, 0x04);
        mem.write(0x0100, 0x09);
        let mut cpu = CpuState::new();
        cpu.x = 0x0F;
        let i = decode(&[0xA1, 0xF0], 0x8000);
        assert_eq!(resolve(&i, &cpu, &mut mem), (0x0400, false));
    }

    #[test]
    fn indirect_indexed_adds_y_and_reports_cross() {
        let mut mem = FlatMemory::new();
        mem.write(0x0086, 0xF0);
        mem.write(0x0087, 0x12);
        let mut cpu = CpuState::new();
        cpu.y = 0x20;
        let i = decode(&[0xB1, 0x86], 0x8000);
        assert_eq!(resolve(&i, &cpu, &mut mem), (0x1310, true));
        cpu.y = 0x05;
        assert_eq!(resolve(&i, &cpu, &mut mem), (0x12F5, false));
    }

    #[test]
    fn relative_handles_negative_offsets() {
        let mut mem = FlatMemory::new();
        let cpu = CpuState::new();
        let i = decode(&[0xD0, 0x80], 0x8050);
        assert_eq!(resolve(&i, &cpu, &mut mem), (0x7FD2, false));
    }
}
