/*!
illegal.rs - Undocumented combined opcode family handler

Each opcode is two documented primitives applied in order to the single
address resolved by the dispatcher:

  LAX = LDA + TAX          SAX = store A & X (no flags)
  DCP = DEC + CMP          ISC = INC + SBC
  SLO = ASL + ORA          RLA = ROL + AND
  SRE = LSR + EOR          RRA = ROR + ADC

Flags end as the second primitive leaves them. For RRA the carry rotated out
by ROR becomes ADC's carry-in.
*/

use crate::cpu::execute::{
    adc, and, asl, compare, dec_mem, eor, inc_mem, lda, lsr, ora, rmw_memory, rol, ror, sbc, tax,
};
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
        Mnemonic::Lax => {
            lda(cpu, bus.read(addr));
            tax(cpu);
        }
        Mnemonic::Sax => {
            let v = cpu.a() & cpu.x();
            bus.write(addr, v);
        }
        Mnemonic::Dcp => {
            let v = dec_mem(cpu, bus, addr);
            let a = cpu.a();
            compare(cpu, a, v);
        }
        Mnemonic::Isc => {
            let v = inc_mem(cpu, bus, addr);
            sbc(cpu, v);
        }
        Mnemonic::Slo => {
            let v = rmw_memory(cpu, bus, addr, asl);
            ora(cpu, v);
        }
        Mnemonic::Rla => {
            let v = rmw_memory(cpu, bus, addr, rol);
            and(cpu, v);
        }
        Mnemonic::Sre => {
            let v = rmw_memory(cpu, bus, addr, lsr);
            eor(cpu, v);
        }
        Mnemonic::Rra => {
            let v = rmw_memory(cpu, bus, addr, ror);
            adc(cpu, v);
        }
        _ => return false,
    }
    true
}
