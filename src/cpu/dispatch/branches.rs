/*!
branches.rs - Relative branch opcode handler (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Cycle Rules
===========
Base cost: 2 cycles (charged by the dispatcher).
Taken: +1 cycle.
Taken and the target lies on a different page than the next instruction:
+2 total over base.

The resolved address handed in is already the branch target.
*/

use crate::cpu::cycles::branch_cycles;
use crate::cpu::flags::StatusFlags;
use crate::cpu::instruction::Instruction;
use crate::cpu::opcode::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::memory::MemoryBus;

pub(super) fn handle<C: CpuRegs, M: MemoryBus + ?Sized>(
    inst: &Instruction,
    target: u16,
    cpu: &mut C,
    _bus: &mut M,
    cycles: &mut u64,
) -> bool {
    let take = match inst.mnemonic() {
        Mnemonic::Bpl => !cpu.is_flag_set(StatusFlags::NEGATIVE),
        Mnemonic::Bmi => cpu.is_flag_set(StatusFlags::NEGATIVE),
        Mnemonic::Bvc => !cpu.is_flag_set(StatusFlags::OVERFLOW),
        Mnemonic::Bvs => cpu.is_flag_set(StatusFlags::OVERFLOW),
        Mnemonic::Bcc => !cpu.is_flag_set(StatusFlags::CARRY),
        Mnemonic::Bcs => cpu.is_flag_set(StatusFlags::CARRY),
        Mnemonic::Bne => !cpu.is_flag_set(StatusFlags::ZERO),
        Mnemonic::Beq => cpu.is_flag_set(StatusFlags::ZERO),
        _ => return false,
    };
    if take {
        *cycles += branch_cycles(inst.next_location(), target) as u64;
        cpu.set_pc(target);
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{boot, PROGRAM_START};

    #[test]
    fn branch_not_taken_base_cycles() {
        // BCS +2 with carry clear after reset.
        let (mut cpu, mut mem) = boot(&[0xB0, 0x02, 0xEA]);
        assert_eq!(cpu.step(&mut mem).unwrap(), 2);
        assert_eq!(cpu.pc(), PROGRAM_START + 2);
    }

    #[test]
    fn branch_taken_same_page() {
        // BCC +2 skips the NOP.
        let (mut cpu, mut mem) = boot(&[0x90, 0x02, 0xEA, 0xEA, 0xEA]);
        assert_eq!(cpu.step(&mut mem).unwrap(), 3);
        assert_eq!(cpu.pc(), PROGRAM_START + 4);
    }

    #[test]
    fn branch_taken_page_cross() {
        // BCC at $80FD: next instruction $80FF, target $8100.
        let mut prg = vec![0xEA; 0xFD];
        prg.extend_from_slice(&[0x90, 0x01]);
        let (mut cpu, mut mem) = boot(&prg);
        for _ in 0..0xFD {
            assert_eq!(cpu.step(&mut mem).unwrap(), 2);
        }
        assert_eq!(cpu.step(&mut mem).unwrap(), 4);
        assert_eq!(cpu.pc(), 0x8100);
    }

    #[test]
    fn backward_branch_into_previous_page() {
        // BNE -4 at $8000 (Z clear after reset) lands on $7FFE.
        let (mut cpu, mut mem) = boot(&[0xD0, 0xFC]);
        assert_eq!(cpu.step(&mut mem).unwrap(), 4);
        assert_eq!(cpu.pc(), 0x7FFE);
    }
}
