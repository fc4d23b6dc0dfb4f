/*!
rmw.rs - RMW / shift / increment / decrement opcode family handler

Covered Opcodes
---------------
Shifts / Rotates
  ASL: 0x0A (A), 0x06 (zp), 0x16 (zp,X), 0x0E (abs), 0x1E (abs,X)
  LSR: 0x4A (A), 0x46 (zp), 0x56 (zp,X), 0x4E (abs), 0x5E (abs,X)
  ROL: 0x2A (A), 0x26 (zp), 0x36 (zp,X), 0x2E (abs), 0x3E (abs,X)
  ROR: 0x6A (A), 0x66 (zp), 0x76 (zp,X), 0x6E (abs), 0x7E (abs,X)

Memory Increment / Decrement
  INC: 0xE6 (zp), 0xF6 (zp,X), 0xEE (abs), 0xFE (abs,X)
  DEC: 0xC6 (zp), 0xD6 (zp,X), 0xCE (abs), 0xDE (abs,X)

Notes
=====
The accumulator forms never touch memory. Absolute,X forms carry their fix-up
cycle in the base table, so no page-cross penalty applies.
*/

use crate::cpu::execute::{asl, dec_mem, inc_mem, lsr, rmw_memory, rol, ror, shift_acc};
use crate::cpu::instruction::{Instruction, Operand};
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
    let shift: fn(&mut C, u8) -> u8 = match inst.mnemonic() {
        Mnemonic::Asl => asl,
        Mnemonic::Lsr => lsr,
        Mnemonic::Rol => rol,
        Mnemonic::Ror => ror,
        Mnemonic::Inc => {
            inc_mem(cpu, bus, addr);
            return true;
        }
        Mnemonic::Dec => {
            dec_mem(cpu, bus, addr);
            return true;
        }
        _ => return false,
    };

    if inst.operand() == Operand::Accumulator {
        shift_acc(cpu, shift);
    } else {
        rmw_memory(cpu, bus, addr, shift);
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::cpu::flags::StatusFlags;
    use crate::memory::MemoryBus;
    use crate::test_utils::boot;

    #[test]
    fn accumulator_shifts() {
        // LDA #$81; ASL A; LSR A
        let (mut cpu, mut mem) = boot(&[0xA9, 0x81, 0x0A, 0x4A]);
        cpu.step(&mut mem).unwrap();
        assert_eq!(cpu.step(&mut mem).unwrap(), 2);
        assert_eq!(cpu.a(), 0x02);
        assert!(cpu.flag(StatusFlags::CARRY));
        cpu.step(&mut mem).unwrap();
        assert_eq!(cpu.a(), 0x01);
        assert!(!cpu.flag(StatusFlags::CARRY));
    }

    #[test]
    fn memory_rotate_uses_carry() {
        // SEC; ROR $10; ROL $10
        let (mut cpu, mut mem) = boot(&[0x38, 0x66, 0x10, 0x26, 0x10]);
        mem.write(0x0010, 0x01);
        cpu.step(&mut mem).unwrap();
        assert_eq!(cpu.step(&mut mem).unwrap(), 5);
        assert_eq!(mem.peek(0x0010), 0x80);
        assert!(cpu.flag(StatusFlags::CARRY));
        assert!(cpu.flag(StatusFlags::NEGATIVE));
        cpu.step(&mut mem).unwrap();
        assert_eq!(mem.peek(0x0010), 0x01);
        assert!(cpu.flag(StatusFlags::CARRY));
        assert_eq!(cpu.a(), 0x00);
    }

    #[test]
    fn inc_dec_abs_x_fixed_cost() {
        // LDX #$01; INC $02FF,X; DEC $02FF,X
        let (mut cpu, mut mem) = boot(&[0xA2, 0x01, 0xFE, 0xFF, 0x02, 0xDE, 0xFF, 0x02]);
        mem.write(0x0300, 0x7F);
        cpu.step(&mut mem).unwrap();
        assert_eq!(cpu.step(&mut mem).unwrap(), 7);
        assert_eq!(mem.peek(0x0300), 0x80);
        assert!(cpu.flag(StatusFlags::NEGATIVE));
        assert_eq!(cpu.step(&mut mem).unwrap(), 7);
        assert_eq!(mem.peek(0x0300), 0x7F);
    }
}
