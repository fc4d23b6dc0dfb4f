/*!
compare.rs - CMP / CPX / CPY opcode family handler

Flags come from `register - operand` (C set when register >= operand); the
register itself is never written.
*/

use crate::cpu::execute::compare;
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
    let reg = match inst.mnemonic() {
        Mnemonic::Cmp => cpu.a(),
        Mnemonic::Cpx => cpu.x(),
        Mnemonic::Cpy => cpu.y(),
        _ => return false,
    };
    let v = bus.read(addr);
    compare(cpu, reg, v);
    true
}

#[cfg(test)]
mod tests {
    use crate::cpu::flags::StatusFlags;
    use crate::memory::MemoryBus;
    use crate::test_utils::boot;

    #[test]
    fn cmp_immediate_flags() {
        // LDA #$40; CMP #$40; CMP #$41; CMP #$01
        let (mut cpu, mut mem) = boot(&[0xA9, 0x40, 0xC9, 0x40, 0xC9, 0x41, 0xC9, 0x01]);
        cpu.step(&mut mem).unwrap();

        cpu.step(&mut mem).unwrap();
        assert!(cpu.flag(StatusFlags::ZERO));
        assert!(cpu.flag(StatusFlags::CARRY));

        cpu.step(&mut mem).unwrap();
        assert!(!cpu.flag(StatusFlags::CARRY));
        assert!(cpu.flag(StatusFlags::NEGATIVE));

        cpu.step(&mut mem).unwrap();
        assert!(cpu.flag(StatusFlags::CARRY));
        assert!(!cpu.flag(StatusFlags::ZERO));
        assert_eq!(cpu.a(), 0x40);
    }

    #[test]
    fn cpx_cpy_zero_page() {
        // LDX #$05; LDY #$02; CPX $10; CPY $10
        let (mut cpu, mut mem) = boot(&[0xA2, 0x05, 0xA0, 0x02, 0xE4, 0x10, 0xC4, 0x10]);
        mem.write(0x0010, 0x03);
        cpu.step(&mut mem).unwrap();
        cpu.step(&mut mem).unwrap();
        assert_eq!(cpu.step(&mut mem).unwrap(), 3);
        assert!(cpu.flag(StatusFlags::CARRY));
        cpu.step(&mut mem).unwrap();
        assert!(!cpu.flag(StatusFlags::CARRY));
        assert!(cpu.flag(StatusFlags::NEGATIVE));
        assert_eq!((cpu.x(), cpu.y()), (0x05, 0x02));
    }

    #[test]
    fn cmp_abs_y_page_cross_penalty() {
        // LDY #$10; CMP $30F8,Y
        let (mut cpu, mut mem) = boot(&[0xA0, 0x10, 0xD9, 0xF8, 0x30]);
        cpu.step(&mut mem).unwrap();
        assert_eq!(cpu.step(&mut mem).unwrap(), 5);
    }
}
