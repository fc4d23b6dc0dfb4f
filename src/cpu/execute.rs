/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Purpose
=======
Centralize side-effect logic for instructions so every dispatch family
(and the undocumented combined opcodes that chain two of them) share a single
implementation.

Scope (crate-visible)
---------------------
Stack helpers:
    push, pop, push_word, pop_word, push_status
    php, plp, pha, pla

Loads / transfers:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs

ALU:
    and/ora/eor/bit, adc/sbc, compare
    inx/iny/dex/dey

Shifts / rotates:
    value forms (asl/lsr/rol/ror), accumulator forms, memory forms via
    rmw_memory

Design Notes
============
- Helpers rely only on the `CpuRegs` API and, where memory is involved, a
  `MemoryBus`. No cycle accounting happens here.
- Decimal mode is ignored by ADC/SBC: the NES ALU has no BCD path.
*/

use crate::cpu::flags::StatusFlags;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::STACK_PAGE;
use crate::memory::MemoryBus;

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn push<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M, v: u8) {
    let sp = cpu.sp();
    bus.write(STACK_PAGE | sp as u16, v);
    cpu.set_sp(sp.wrapping_sub(1));
}

#[inline]
pub(crate) fn pop<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    bus.read(STACK_PAGE | sp as u16)
}

/// High byte first, so the low byte ends up at the lower address.
#[inline]
pub(crate) fn push_word<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M, v: u16) {
    push(cpu, bus, (v >> 8) as u8);
    push(cpu, bus, (v & 0xFF) as u8);
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M) -> u16 {
    let lo = pop(cpu, bus) as u16;
    let hi = pop(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Push P with the break bit set (PHP/BRK) or cleared (IRQ/NMI).
#[inline]
pub(crate) fn push_status<C: CpuRegs, M: MemoryBus + ?Sized>(
    cpu: &mut C,
    bus: &mut M,
    set_break: bool,
) {
    let v = cpu.status().pushed(set_break);
    push(cpu, bus, v);
}

#[inline]
pub(crate) fn php<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M) {
    push_status(cpu, bus, true);
}

#[inline]
pub(crate) fn plp<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M) {
    let v = pop(cpu, bus);
    cpu.set_status(StatusFlags::pulled(v));
}

#[inline]
pub(crate) fn pha<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M) {
    let a = cpu.a();
    push(cpu, bus, a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M) {
    let val = pop(cpu, bus);
    lda(cpu, val);
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldx(cpu, v);
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldy(cpu, v);
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.sp();
    ldx(cpu, v);
}

/// TXS leaves the flags alone.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    cpu.set_sp(v);
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() & v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() | v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() ^ v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    let zero = cpu.a() & v == 0;
    cpu.assign_flag(StatusFlags::ZERO, zero);
    cpu.assign_flag(StatusFlags::NEGATIVE, v & 0x80 != 0);
    cpu.assign_flag(StatusFlags::OVERFLOW, v & 0x40 != 0);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_add(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_add(1);
    ldy(cpu, v);
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_sub(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_sub(1);
    ldy(cpu, v);
}

// ---------------------------------------------------------------------------
// ADC / SBC / Compare
// ---------------------------------------------------------------------------

pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let sum = a as u16 + v as u16 + cpu.carry_bit() as u16;
    let result = sum as u8;

    cpu.assign_flag(StatusFlags::CARRY, sum > 0xFF);
    cpu.assign_flag(
        StatusFlags::OVERFLOW,
        (a ^ v) & 0x80 == 0 && (a ^ result) & 0x80 != 0,
    );
    lda(cpu, result);
}

/// Carry is cleared when a borrow occurred.
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let diff = a as i16 - v as i16 - (1 - cpu.carry_bit() as i16);
    let result = diff as u8;

    cpu.assign_flag(StatusFlags::CARRY, diff >= 0);
    cpu.assign_flag(
        StatusFlags::OVERFLOW,
        (a ^ v) & 0x80 != 0 && (a ^ result) & 0x80 != 0,
    );
    lda(cpu, result);
}

/// CMP / CPX / CPY: flags as for `reg - v`, register untouched.
#[inline]
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    cpu.assign_flag(StatusFlags::CARRY, reg >= v);
    cpu.update_zn(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Shifts / Rotates (value forms; carry out to C, Z/N from result)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.assign_flag(StatusFlags::CARRY, v & 0x80 != 0);
    let r = v << 1;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.assign_flag(StatusFlags::CARRY, v & 0x01 != 0);
    let r = v >> 1;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.carry_bit();
    cpu.assign_flag(StatusFlags::CARRY, v & 0x80 != 0);
    let r = (v << 1) | carry_in;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.carry_bit() << 7;
    cpu.assign_flag(StatusFlags::CARRY, v & 0x01 != 0);
    let r = (v >> 1) | carry_in;
    cpu.update_zn(r);
    r
}

/// Apply a shift/rotate to A.
#[inline]
pub(crate) fn shift_acc<C: CpuRegs>(cpu: &mut C, op: fn(&mut C, u8) -> u8) {
    let a = cpu.a();
    let r = op(cpu, a);
    cpu.set_a(r);
}

// ---------------------------------------------------------------------------
// Read-Modify-Write (memory)
// ---------------------------------------------------------------------------

/// Read `addr`, transform the byte, write it back. Returns the new value.
pub(crate) fn rmw_memory<C: CpuRegs, M: MemoryBus + ?Sized, F>(
    cpu: &mut C,
    bus: &mut M,
    addr: u16,
    transform: F,
) -> u8
where
    F: FnOnce(&mut C, u8) -> u8,
{
    let old = bus.read(addr);
    let new = transform(cpu, old);
    bus.write(addr, new);
    new
}

#[inline]
pub(crate) fn inc_mem<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M, addr: u16) -> u8 {
    let r = rmw_memory(cpu, bus, addr, |_, old| old.wrapping_add(1));
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn dec_mem<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M, addr: u16) -> u8 {
    let r = rmw_memory(cpu, bus, addr, |_, old| old.wrapping_sub(1));
    cpu.update_zn(r);
    r
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
