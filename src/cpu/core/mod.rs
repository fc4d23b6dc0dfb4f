/*!
core::Cpu - Canonical 6502 CPU façade wrapping `CpuState`.

Design
======
- `Cpu` owns the register file (`CpuState`), the running cycle total and the
  pending interrupt request. The memory bus is borrowed per call; the CPU
  never stores it.
- `step` executes exactly one instruction (after servicing any pending
  interrupt) and returns the cycles it cost. `run` repeats it.
- Errors are returned, never swallowed: a decode failure or bus fault stops
  the caller's loop and leaves the decision to halt or recover with them.

Interrupt Requests
==================
- `request_nmi` always records an NMI, displacing a pending IRQ.
- `request_irq` is dropped while I is set and never displaces a pending NMI.
- `set_pending_interrupt` overwrites the slot unconditionally.

Logging
=======
`reset` and interrupt entry log at debug level. With trace level enabled each
`step` logs the fixed-width trace line of the instruction about to run.
*/

use log::{debug, log_enabled, trace, Level};

use crate::cpu::dispatch;
use crate::cpu::flags::StatusFlags;
use crate::cpu::interrupt::Interrupt;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CpuState, RESET_VECTOR};
use crate::error::CpuError;
use crate::memory::MemoryBus;

/// Cycles the reset sequence takes on hardware.
pub const RESET_CYCLES: u64 = 7;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
    cycles: u64,
    interrupt: Interrupt,
}

impl Cpu {
    /// Construct a new CPU with power-up defaults. Call `reset` before stepping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Return mutable reference to internal state.
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Load PC from the reset vector, restore SP / P and drop any pending
    /// interrupt. A, X and Y are preserved.
    pub fn reset<M: MemoryBus + ?Sized>(&mut self, bus: &mut M) -> Result<(), CpuError> {
        self.state.reset(bus);
        self.interrupt = Interrupt::None;
        self.cycles += RESET_CYCLES;
        if let Some(fault) = bus.take_fault() {
            return Err(CpuError::Bus(fault));
        }
        debug!(
            "reset: vector ${RESET_VECTOR:04X} -> PC ${:04X}",
            self.state.pc
        );
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Register accessors
    // ---------------------------------------------------------------------

    #[inline]
    pub fn a(&self) -> u8 {
        self.state.a
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.state.x
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.state.y
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    #[inline]
    pub fn status(&self) -> StatusFlags {
        self.state.status
    }

    #[inline]
    pub fn flag(&self, flag: StatusFlags) -> bool {
        self.state.is_flag_set(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: StatusFlags, on: bool) {
        self.state.assign_flag(flag, on);
    }

    /// Total cycles executed since construction (reset included).
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ---------------------------------------------------------------------
    // Interrupt lines
    // ---------------------------------------------------------------------

    pub fn request_nmi(&mut self) {
        self.interrupt = Interrupt::Nmi;
    }

    pub fn request_irq(&mut self) {
        if self.flag(StatusFlags::IRQ_DISABLE) || self.interrupt == Interrupt::Nmi {
            return;
        }
        self.interrupt = Interrupt::Irq;
    }

    #[inline]
    pub fn pending_interrupt(&self) -> Interrupt {
        self.interrupt
    }

    #[inline]
    pub fn set_pending_interrupt(&mut self, interrupt: Interrupt) {
        self.interrupt = interrupt;
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Execute one instruction (servicing a pending interrupt first) and
    /// return the cycles consumed.
    ///
    /// Interrupt entry is committed before the handler's first instruction is
    /// fetched. If that fetch or execution fails, the error is returned with
    /// the entry already applied: the return frame is on the stack, PC points
    /// at the handler, and `cycles()` includes the 7 entry cycles even though
    /// no `Ok` value reported them.
    pub fn step<M: MemoryBus + ?Sized>(&mut self, bus: &mut M) -> Result<u32, CpuError> {
        if log_enabled!(Level::Trace) && !self.interrupt.is_pending() {
            if let Ok(line) = crate::trace::trace_line(self, bus) {
                trace!("{line}");
            }
        }

        let before = self.cycles;
        dispatch::step(&mut self.state, &mut self.interrupt, &mut self.cycles, bus)?;
        Ok((self.cycles - before) as u32)
    }

    /// Step up to `max_instructions` times. Returns the cycles consumed, or
    /// the first error.
    pub fn run<M: MemoryBus + ?Sized>(
        &mut self,
        bus: &mut M,
        max_instructions: usize,
    ) -> Result<u64, CpuError> {
        let before = self.cycles;
        for _ in 0..max_instructions {
            self.step(bus)?;
        }
        Ok(self.cycles - before)
    }

    /// Trace line for the instruction at PC.
    pub fn trace_line<M: MemoryBus + ?Sized>(&self, bus: &mut M) -> Result<String, CpuError> {
        crate::trace::trace_line(self, bus)
    }
}
