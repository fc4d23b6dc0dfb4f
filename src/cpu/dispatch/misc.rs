/*!
misc.rs - Transfers / Stack / Flag / NOP opcode family handler

Transfers:
  TAX (0xAA), TAY (0xA8), TXA (0x8A), TYA (0x98), TSX (0xBA), TXS (0x9A)

Register increments:
  INX (0xE8), INY (0xC8), DEX (0xCA), DEY (0x88)

Stack:
  PHA (0x48), PLA (0x68), PHP (0x08), PLP (0x28)

Flag operations:
  CLC (0x18), SEC (0x38), CLI (0x58), SEI (0x78),
  CLD (0xD8), SED (0xF8), CLV (0xB8)

NOP (0xEA) and the undocumented NOP family. Multi-byte NOPs only pay their
table cost (and page-cross penalty for abs,X); their operand is never read.
*/

use crate::cpu::execute::{dex, dey, inx, iny, pha, php, pla, plp, tax, tay, tsx, txa, txs, tya};
use crate::cpu::flags::StatusFlags;
use crate::cpu::instruction::Instruction;
use crate::cpu::opcode::Mnemonic;
use crate::cpu::regs::CpuRegs;
use crate::memory::MemoryBus;

pub(super) fn handle<C: CpuRegs, M: MemoryBus + ?Sized>(
    inst: &Instruction,
    _addr: u16,
    cpu: &mut C,
    bus: &mut M,
    _cycles: &mut u64,
) -> bool {
    match inst.mnemonic() {
        Mnemonic::Tax => tax(cpu),
        Mnemonic::Tay => tay(cpu),
        Mnemonic::Txa => txa(cpu),
        Mnemonic::Tya => tya(cpu),
        Mnemonic::Tsx => tsx(cpu),
        Mnemonic::Txs => txs(cpu),
        Mnemonic::Inx => inx(cpu),
        Mnemonic::Iny => iny(cpu),
        Mnemonic::Dex => dex(cpu),
        Mnemonic::Dey => dey(cpu),
        Mnemonic::Pha => pha(cpu, bus),
        Mnemonic::Pla => pla(cpu, bus),
        Mnemonic::Php => php(cpu, bus),
        Mnemonic::Plp => plp(cpu, bus),
        Mnemonic::Clc => cpu.assign_flag(StatusFlags::CARRY, false),
        Mnemonic::Sec => cpu.assign_flag(StatusFlags::CARRY, true),
        Mnemonic::Cli => cpu.assign_flag(StatusFlags::IRQ_DISABLE, false),
        Mnemonic::Sei => cpu.assign_flag(StatusFlags::IRQ_DISABLE, true),
        Mnemonic::Cld => cpu.assign_flag(StatusFlags::DECIMAL, false),
        Mnemonic::Sed => cpu.assign_flag(StatusFlags::DECIMAL, true),
        Mnemonic::Clv => cpu.assign_flag(StatusFlags::OVERFLOW, false),
        Mnemonic::Nop => {}
        _ => return false,
    }
    true
}
