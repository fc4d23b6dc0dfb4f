#![doc = r#"
nescpu library crate.

A MOS 6502 core as wired into the NES: decoder, addressing resolver, cycle
tables and execution engine, plus the minimum memory plumbing to run real
NROM cartridges against it.

Modules:
- bus: `CpuBus` router (internal RAM, PPU/IO register stubs, cartridge mapper)
- cartridge: iNES header parsing and cartridge metadata; constructs a Mapper
- cpu: 6502 CPU core (facade + state + decode + dispatch + execute modules)
- disasm: linear disassembler for byte blobs
- error: `CpuError`, `CartridgeError`, `BusFault`
- mapper: Mapper trait and NROM (mapper 0) implementation
- memory: `MemoryBus` trait the CPU runs against
- trace: fixed-width per-instruction trace lines

In tests, shared iNES builders and a flat 64 KiB bus are available under
`crate::test_utils`.
"#]

pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod disasm;
pub mod error;
pub mod mapper;
pub mod memory;
pub mod trace;

// Re-export commonly used types at the crate root for convenience.
pub use bus::CpuBus;
pub use cartridge::Cartridge;
pub use cpu::Cpu;
pub use error::{BusFault, CartridgeError, CpuError};
pub use memory::MemoryBus;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
