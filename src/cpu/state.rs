/*!
state.rs - Architectural 6502 register file.

Overview
========
`CpuState` owns every programmer-visible register: A, X, Y, SP, PC and the
status flags. It carries no timing, decode or interrupt state; those live in
the `Cpu` façade and the dispatch layer.

Reset Semantics
===============
`reset` loads PC from $FFFC/$FFFD, sets SP to $FD and the status register to
$24. A, X and Y keep whatever they held, as on hardware.

Stack
=====
The stack lives on page $01. `stack_addr` maps the 8-bit SP onto it; the
push/pull primitives themselves are in `execute.rs`.
*/

use crate::cpu::flags::StatusFlags;
use crate::memory::MemoryBus;

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;
pub const STACK_PAGE: u16 = 0x0100;
pub const POWER_ON_SP: u8 = 0xFD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: StatusFlags,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: POWER_ON_SP,
            pc: 0x0000,
            status: StatusFlags::POWER_ON,
        }
    }
}

impl CpuState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load PC from the reset vector and restore SP / P to power-on values.
    pub fn reset<M: MemoryBus + ?Sized>(&mut self, bus: &mut M) {
        self.pc = bus.read16(RESET_VECTOR);
        self.sp = POWER_ON_SP;
        self.status = StatusFlags::POWER_ON;
    }

    /// Address of the current top-of-stack slot.
    #[inline]
    pub fn stack_addr(&self) -> u16 {
        STACK_PAGE | self.sp as u16
    }
}
