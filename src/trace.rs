/*!
trace.rs - Fixed-width per-instruction trace lines.

Layout
======
```text
C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD CYC:  0
^PC   ^raw bytes ^text (undocumented opcodes get a leading '*')
                                                ^column 48: register snapshot
```

`CYC` is the PPU dot within the scanline, `(cpu cycles * 3) % 341`, which is
what reference logs print in that column. It is right-aligned in three columns
padded with spaces (`CYC:  1`), as nestest.log prints it, not zero-filled.

The instruction is fetched through the bus, so regions with read side effects
see the same reads `step` is about to make.
*/

use std::fmt::Write as _;

use crate::cpu::Cpu;
use crate::cpu::instruction::Instruction;
use crate::error::CpuError;
use crate::memory::MemoryBus;

const REGISTER_COLUMN: usize = 48;
const BYTES_WIDTH: usize = 9;

/// PPU dots per scanline.
const DOTS_PER_SCANLINE: u64 = 341;

/// Format the trace line for the instruction at the CPU's current PC.
pub fn trace_line<M: MemoryBus + ?Sized>(cpu: &Cpu, bus: &mut M) -> Result<String, CpuError> {
    let inst = Instruction::fetch(bus, cpu.pc())?;
    Ok(format_line(cpu, &inst))
}

fn format_line(cpu: &Cpu, inst: &Instruction) -> String {
    let mut line = format!("{:04X}  ", inst.location());

    let mut bytes = String::with_capacity(BYTES_WIDTH);
    for b in inst.bytes() {
        let _ = write!(bytes, "{b:02X} ");
    }
    let _ = write!(line, "{bytes:<BYTES_WIDTH$}");

    line.push(if inst.is_official() { ' ' } else { '*' });
    let _ = write!(line, "{inst}");

    let _ = write!(
        line,
        "{:pad$}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{:>3}",
        "",
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.status().bits(),
        cpu.sp(),
        (cpu.cycles() * 3) % DOTS_PER_SCANLINE,
        pad = REGISTER_COLUMN.saturating_sub(line.len()),
    );
    line
}
