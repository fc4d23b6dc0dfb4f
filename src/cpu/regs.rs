/*!
regs.rs - CpuRegs trait: the register + flag surface instruction handlers
are written against.

The trait does NOT include:
  - Stack push/pop
  - Bus access of any kind

Memory and stack operations stay explicit at call sites (`&mut M` where
`M: MemoryBus`) so handlers never over-borrow. Handlers are generic
(`fn op<C: CpuRegs>(cpu: &mut C)`), giving static dispatch with no trait
objects on the hot path.
*/

use crate::cpu::flags::StatusFlags;
use crate::cpu::state::CpuState;

/// Minimal 6502 register + flag API needed by execute and dispatch code.
pub trait CpuRegs {
    // ---------------------------------------------------------------------
    // Read accessors
    // ---------------------------------------------------------------------
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status(&self) -> StatusFlags;

    // ---------------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------------
    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: StatusFlags);

    // ---------------------------------------------------------------------
    // Flag operations
    // ---------------------------------------------------------------------

    #[inline]
    fn is_flag_set(&self, flag: StatusFlags) -> bool {
        self.status().contains(flag)
    }

    #[inline]
    fn assign_flag(&mut self, flag: StatusFlags, value: bool) {
        let mut p = self.status();
        p.set(flag, value);
        self.set_status(p);
    }

    /// ZERO and NEGATIVE from a result byte.
    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.assign_flag(StatusFlags::ZERO, result == 0);
        self.assign_flag(StatusFlags::NEGATIVE, result & 0x80 != 0);
    }

    /// Carry as 0 or 1, for rotates and ADC/SBC.
    #[inline]
    fn carry_bit(&self) -> u8 {
        self.is_flag_set(StatusFlags::CARRY) as u8
    }
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    fn status(&self) -> StatusFlags {
        self.status
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    fn set_status(&mut self, v: StatusFlags) {
        self.status = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_zn_behavior() {
        let mut s = CpuState::new();
        s.update_zn(0x00);
        assert!(s.is_flag_set(StatusFlags::ZERO));
        assert!(!s.is_flag_set(StatusFlags::NEGATIVE));
        s.update_zn(0x80);
        assert!(!s.is_flag_set(StatusFlags::ZERO));
        assert!(s.is_flag_set(StatusFlags::NEGATIVE));
    }

    #[test]
    fn assign_flag_round_trip() {
        let mut s = CpuState::new();
        s.assign_flag(StatusFlags::CARRY, true);
        assert_eq!(s.carry_bit(), 1);
        s.assign_flag(StatusFlags::CARRY, false);
        assert_eq!(s.carry_bit(), 0);
        s.assign_flag(StatusFlags::IRQ_DISABLE, false);
        assert_eq!(s.status().bits(), 0x20);
    }
}
