/*!
control_flow.rs - Control-flow / system opcode family handler

Overview
========
  JMP abs        (0x4C)
  JMP (ind)      (0x6C)  (indirect page-wrap quirk comes from the resolver)
  JSR abs        (0x20)
  RTS            (0x60)
  RTI            (0x40)
  BRK            (0x00)

Behavior Details
================
- JSR pushes (return address - 1), high byte first.
- RTS pulls the return address and adds 1.
- RTI pulls status (B cleared, bit 5 forced) and then PC. No +1.
- BRK skips its padding byte: it pushes the address two past the opcode and
  P with B set, sets I and jumps through $FFFE/$FFFF. Execution continues;
  the core does not halt on BRK.
*/

use crate::cpu::execute::{plp, pop_word, push_status, push_word};
use crate::cpu::flags::StatusFlags;
use crate::cpu::instruction::Instruction;
use crate::cpu::opcode::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::IRQ_VECTOR;
use crate::memory::MemoryBus;

fn op_jsr<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M, target: u16) {
    let ret = cpu.pc().wrapping_sub(1);
    push_word(cpu, bus, ret);
    cpu.set_pc(target);
}

fn op_rts<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M) {
    let ret = pop_word(cpu, bus);
    cpu.set_pc(ret.wrapping_add(1));
}

fn op_rti<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M) {
    plp(cpu, bus);
    let ret = pop_word(cpu, bus);
    cpu.set_pc(ret);
}

fn op_brk<C: CpuRegs, M: MemoryBus + ?Sized>(cpu: &mut C, bus: &mut M) {
    let ret = cpu.pc().wrapping_add(1);
    push_word(cpu, bus, ret);
    push_status(cpu, bus, true);
    cpu.assign_flag(StatusFlags::IRQ_DISABLE, true);
    let target = bus.read16(IRQ_VECTOR);
    cpu.set_pc(target);
}

pub(super) fn handle<C: CpuRegs, M: MemoryBus + ?Sized>(
    inst: &Instruction,
    addr: u16,
    cpu: &mut C,
    bus: &mut M,
    _cycles: &mut u64,
) -> bool {
    match inst.mnemonic() {
        Mnemonic::Jmp => cpu.set_pc(addr),
        Mnemonic::Jsr => op_jsr(cpu, bus, addr),
        Mnemonic::Rts => op_rts(cpu, bus),
        Mnemonic::Rti => op_rti(cpu, bus),
        Mnemonic::Brk => op_brk(cpu, bus),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::cpu::flags::StatusFlags;
    use crate::memory::MemoryBus;
    use crate::test_utils::{boot, PROGRAM_START};

    #[test]
    fn jmp_abs_sets_pc() {
        let (mut cpu, mut mem) = boot(&[0x4C, 0x34, 0x92]);
        assert_eq!(cpu.step(&mut mem).unwrap(), 3);
        assert_eq!(cpu.pc(), 0x9234);
    }

    #[test]
    fn jmp_indirect_page_wrap() {
        let (mut cpu, mut mem) = boot(&[0x6C, 0xFF, 0x02]);
        mem.write(0x02FF, 0x00);
        mem.write(0x0200, 0x90);
        mem.write(0x0300, 0xA0);
        assert_eq!(cpu.step(&mut mem).unwrap(), 5);
        assert_eq!(cpu.pc(), 0x9000);
    }

    #[test]
    fn jsr_then_rts_round_trip() {
        // $8000 JSR $8010 ... $8010 RTS
        let mut prg = vec![0x20, 0x10, 0x80];
        prg.resize(0x10, 0xEA);
        prg.push(0x60);
        let (mut cpu, mut mem) = boot(&prg);

        assert_eq!(cpu.step(&mut mem).unwrap(), 6);
        assert_eq!(cpu.pc(), 0x8010);
        assert_eq!(cpu.sp(), 0xFB);
        assert_eq!(mem.peek(0x01FD), 0x80);
        assert_eq!(mem.peek(0x01FC), 0x02);

        assert_eq!(cpu.step(&mut mem).unwrap(), 6);
        assert_eq!(cpu.pc(), PROGRAM_START + 3);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn brk_then_rti_returns_past_padding() {
        let (mut cpu, mut mem) = boot(&[0x00, 0xFF, 0xEA]);
        mem.set_vector(0xFFFE, 0x9000);
        mem.write(0x9000, 0x40); // RTI

        assert_eq!(cpu.step(&mut mem).unwrap(), 7);
        assert_eq!(cpu.pc(), 0x9000);
        assert!(cpu.flag(StatusFlags::IRQ_DISABLE));
        assert_eq!(mem.peek(0x01FB), 0x34); // P | B | U

        assert_eq!(cpu.step(&mut mem).unwrap(), 6);
        assert_eq!(cpu.pc(), PROGRAM_START + 2);
        assert_eq!(cpu.status().bits(), 0x24);
        assert_eq!(cpu.sp(), 0xFD);
    }
}
