/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
flags.rs        - `StatusFlags` bit set (N V 1 B D I Z C).
state.rs        - Register file, vectors, reset.
regs.rs         - `CpuRegs` trait the handlers are generic over.
opcode.rs       - Static opcode table: mnemonic, addressing mode, legality.
cycles.rs       - Base / page-cross cycle tables and branch penalty.
instruction.rs  - `Instruction` decode, fetch and assembler text.
addressing.rs   - Effective-address resolution with page-cross report.
execute.rs      - ALU / stack / RMW primitives.
interrupt.rs    - Pending interrupt kinds.
dispatch/       - One step: interrupt entry, decode, cost, family handlers.
core/           - `Cpu` façade (reset, step, run, interrupt requests).
```

Usage:
```rust
use nescpu::{Cpu, CpuBus, Cartridge};

# fn demo(rom: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
let mut bus = CpuBus::with_cartridge(Cartridge::from_ines_bytes(rom)?);
let mut cpu = Cpu::new();
cpu.reset(&mut bus)?;
let cycles = cpu.step(&mut bus)?;
# let _ = cycles;
# Ok(())
# }
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub mod dispatch;
pub mod execute;
pub mod flags;
pub mod instruction;
pub mod interrupt;
pub mod opcode;
pub mod regs;
pub mod state;

pub use self::core::Cpu;
pub use flags::StatusFlags;
pub use instruction::{Instruction, Operand};
pub use interrupt::Interrupt;
pub use opcode::{AddressingMode, Mnemonic};
pub use regs::CpuRegs;
pub use state::CpuState;
