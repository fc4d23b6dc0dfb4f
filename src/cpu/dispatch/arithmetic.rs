/*!
arithmetic.rs - ADC / SBC opcode family handler

Covers every ADC and SBC encoding, including the undocumented SBC #imm at
$EB. Binary mode only; the decimal flag is carried but never consulted.
*/

use crate::cpu::execute::{adc, sbc};
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
        Mnemonic::Adc => adc(cpu, bus.read(addr)),
        Mnemonic::Sbc => sbc(cpu, bus.read(addr)),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::cpu::flags::StatusFlags;
    use crate::memory::MemoryBus;
    use crate::test_utils::boot;

    #[test]
    fn adc_immediate_overflow() {
        // CLC; LDA #$50; ADC #$50
        let (mut cpu, mut mem) = boot(&[0x18, 0xA9, 0x50, 0x69, 0x50]);
        for _ in 0..3 {
            cpu.step(&mut mem).unwrap();
        }
        assert_eq!(cpu.a(), 0xA0);
        assert!(cpu.flag(StatusFlags::OVERFLOW));
        assert!(cpu.flag(StatusFlags::NEGATIVE));
        assert!(!cpu.flag(StatusFlags::CARRY));
        assert!(!cpu.flag(StatusFlags::ZERO));
    }

    #[test]
    fn sbc_immediate_borrow() {
        // SEC; LDA #$00; SBC #$01
        let (mut cpu, mut mem) = boot(&[0x38, 0xA9, 0x00, 0xE9, 0x01]);
        for _ in 0..3 {
            cpu.step(&mut mem).unwrap();
        }
        assert_eq!(cpu.a(), 0xFF);
        assert!(!cpu.flag(StatusFlags::CARRY));
        assert!(cpu.flag(StatusFlags::NEGATIVE));
    }

    #[test]
    fn adc_abs_x_page_cross_penalty() {
        // LDX #$01; ADC $10FF,X
        let (mut cpu, mut mem) = boot(&[0xA2, 0x01, 0x7D, 0xFF, 0x10]);
        mem.write(0x1100, 0x05);
        cpu.step(&mut mem).unwrap();
        assert_eq!(cpu.step(&mut mem).unwrap(), 5);
        assert_eq!(cpu.a(), 0x05);
    }

    #[test]
    fn sbc_indirect_y_page_cross_penalty() {
        // SEC; LDA #$10; LDY #$01; SBC ($20),Y with pointer $12FF -> $1300
        let (mut cpu, mut mem) = boot(&[0x38, 0xA9, 0x10, 0xA0, 0x01, 0xF1, 0x20]);
        mem.write(0x0020, 0xFF);
        mem.write(0x0021, 0x12);
        mem.write(0x1300, 0x01);
        for _ in 0..3 {
            cpu.step(&mut mem).unwrap();
        }
        assert_eq!(cpu.step(&mut mem).unwrap(), 6);
        assert_eq!(cpu.a(), 0x0F);
    }

    #[test]
    fn undocumented_sbc_matches_official() {
        // SEC; LDA #$10; .byte $EB,$01
        let (mut cpu, mut mem) = boot(&[0x38, 0xA9, 0x10, 0xEB, 0x01]);
        cpu.step(&mut mem).unwrap();
        cpu.step(&mut mem).unwrap();
        assert_eq!(cpu.step(&mut mem).unwrap(), 2);
        assert_eq!(cpu.a(), 0x0F);
        assert!(cpu.flag(StatusFlags::CARRY));
    }
}
