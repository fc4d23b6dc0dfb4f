/*!
dispatch - Orchestrator for a single 6502 CPU step (interrupts / decode / execute)

Overview
========
Coordinates a single CPU instruction step:
1. Services a pending NMI or IRQ (7-cycle entry sequence), then clears it.
2. Fetches and decodes the instruction at PC. A decode failure returns before
   the instruction touches any register. An interrupt entry from step 1 stays
   applied, 7 cycles included.
3. Advances PC past the instruction.
4. Resolves the effective address once and charges base + page-cross cycles.
5. Hands the instruction to the family handler chain.
6. Collects any bus fault latched while executing.

Architecture
============
Each family module exposes

```text
pub(super) fn handle(inst, addr, cpu, bus, cycles) -> bool
```

returning `true` when it recognized the mnemonic. Handlers receive the already
resolved address so combined opcodes apply both halves to the same location.
Only branches touch `cycles`; every other cost is table-driven here.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod illegal;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use log::debug;

use crate::cpu::addressing::resolve;
use crate::cpu::cycles::{base_cycles, page_cross_cycles};
use crate::cpu::execute::{push_status, push_word};
use crate::cpu::flags::StatusFlags;
use crate::cpu::instruction::Instruction;
use crate::cpu::interrupt::Interrupt;
use crate::cpu::regs::CpuRegs;
use crate::error::CpuError;
use crate::memory::MemoryBus;

/// Cycles charged for the interrupt entry sequence.
pub(crate) const INTERRUPT_CYCLES: u64 = 7;

/// Execute one CPU step, adding every cycle it costs to `*cycles`.
pub(crate) fn step<C: CpuRegs, M: MemoryBus + ?Sized>(
    cpu: &mut C,
    pending: &mut Interrupt,
    cycles: &mut u64,
    bus: &mut M,
) -> Result<(), CpuError> {
    // 1. Pending interrupt
    let request = std::mem::take(pending);
    if request.is_pending() {
        service_interrupt(cpu, bus, request, cycles)?;
    }

    // 2. Fetch / decode
    let inst = Instruction::fetch(bus, cpu.pc())?;
    check_fault(bus)?;

    // 3. PC now refers to the following instruction
    cpu.set_pc(inst.next_location());

    // 4. Address + table cost
    let (addr, crossed) = resolve(&inst, cpu, bus);
    let op = inst.opcode();
    *cycles += base_cycles(op) as u64;
    if crossed {
        *cycles += page_cross_cycles(op) as u64;
    }

    // 5. Family chain
    let handled = load_store::handle(&inst, addr, cpu, bus, cycles)
        || arithmetic::handle(&inst, addr, cpu, bus, cycles)
        || logical::handle(&inst, addr, cpu, bus, cycles)
        || compare::handle(&inst, addr, cpu, bus, cycles)
        || rmw::handle(&inst, addr, cpu, bus, cycles)
        || branches::handle(&inst, addr, cpu, bus, cycles)
        || control_flow::handle(&inst, addr, cpu, bus, cycles)
        || misc::handle(&inst, addr, cpu, bus, cycles)
        || illegal::handle(&inst, addr, cpu, bus, cycles);
    if !handled {
        return Err(CpuError::UnsupportedOpcode {
            opcode: op,
            pc: inst.location(),
        });
    }

    // 6. Faults raised by the handler itself
    check_fault(bus)
}

/// Interrupt entry: push PC, push P with B clear, set I, jump through the vector.
fn service_interrupt<C: CpuRegs, M: MemoryBus + ?Sized>(
    cpu: &mut C,
    bus: &mut M,
    kind: Interrupt,
    cycles: &mut u64,
) -> Result<(), CpuError> {
    let Some(vector) = kind.vector() else {
        return Ok(());
    };
    let return_pc = cpu.pc();
    push_word(cpu, bus, return_pc);
    push_status(cpu, bus, false);
    cpu.assign_flag(StatusFlags::IRQ_DISABLE, true);
    let target = bus.read16(vector);
    cpu.set_pc(target);
    *cycles += INTERRUPT_CYCLES;
    debug!("{kind:?} serviced: vector ${vector:04X} -> ${target:04X} (return ${return_pc:04X})");
    check_fault(bus)
}

#[inline]
fn check_fault<M: MemoryBus + ?Sized>(bus: &mut M) -> Result<(), CpuError> {
    match bus.take_fault() {
        Some(fault) => Err(CpuError::Bus(fault)),
        None => Ok(()),
    }
}
