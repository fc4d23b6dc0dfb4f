//! Shared test utilities: in-memory iNES image builders and a flat 64 KiB
//! memory bus.
//!
//! The iNES builders feed the cartridge / router tests; `FlatMemory` lets the
//! CPU handler tests run programs without any cartridge plumbing.
//!
//! Notes on iNES header fields used here:
//! - bytes[0..4] = b"NES\x1A"
//! - byte 4 = PRG ROM size in 16 KiB units
//! - byte 5 = CHR ROM size in 8 KiB units (0 => CHR RAM board)
//! - byte 6 = Flags 6 (mirroring, battery, trainer, mapper low nibble)
//! - byte 7 = Flags 7 (NES 2.0 indicator, mapper high nibble)
//! - byte 8 = PRG RAM size in 8 KiB units
//!
//! Vectors for a 16 KiB PRG bank live at offsets 0x3FFA..=0x3FFF, for 32 KiB
//! at 0x7FFA..=0x7FFF.

#![allow(dead_code)]

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Default load / reset address for test programs.
pub const PROGRAM_START: u16 = 0x8000;

/// Build a minimal iNES (v1) image. PRG is filled with 0xAA, CHR with 0xCC.
pub fn build_ines(
    prg_16k: usize,
    chr_8k: usize,
    flags6: u8,
    flags7: u8,
    prg_ram_8k: u8,
    trainer: Option<&[u8; 512]>,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(
        16 + trainer.map_or(0, |_| 512) + prg_16k * 16 * 1024 + chr_8k * 8 * 1024,
    );

    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(prg_16k as u8);
    bytes.push(chr_8k as u8);
    bytes.push(flags6);
    bytes.push(flags7);
    bytes.push(prg_ram_8k);
    bytes.extend_from_slice(&[0u8; 7]);

    if let Some(t) = trainer {
        bytes.extend_from_slice(t);
    }

    bytes.extend(std::iter::repeat_n(0xAA, prg_16k * 16 * 1024));
    bytes.extend(std::iter::repeat_n(0xCC, chr_8k * 8 * 1024));

    bytes
}

/// Build an NROM-128 image with `prg` at $8000 and the given
/// (reset, nmi, irq) vectors, defaulting all three to $8000.
pub fn build_nrom_with_prg(
    prg: &[u8],
    chr_8k: usize,
    prg_ram_8k: u8,
    vectors: Option<(u16, u16, u16)>,
) -> Vec<u8> {
    assert!(prg.len() <= 16 * 1024, "program must fit a 16 KiB PRG bank");

    let mut rom = build_ines(1, chr_8k, 0, 0, prg_ram_8k, None);
    let prg_start = 16;
    let prg_end = prg_start + 16 * 1024;
    rom[prg_start..prg_start + prg.len()].copy_from_slice(prg);

    let (reset, nmi, irq) = vectors.unwrap_or((PROGRAM_START, PROGRAM_START, PROGRAM_START));
    set_vectors_in_prg(&mut rom[prg_start..prg_end], reset, nmi, irq);
    rom
}

/// Write NMI / RESET / IRQ vectors into a 16 KiB or 32 KiB PRG slice.
pub fn set_vectors_in_prg(prg: &mut [u8], reset: u16, nmi: u16, irq: u16) {
    let base = match prg.len() {
        16384 => 0x3FFA,
        32768 => 0x7FFA,
        other => panic!("unsupported PRG length for vectors: {other}"),
    };
    write_le_u16(prg, base, nmi);
    write_le_u16(prg, base + 2, reset);
    write_le_u16(prg, base + 4, irq);
}

#[inline]
fn write_le_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset] = (value & 0x00FF) as u8;
    buf[offset + 1] = (value >> 8) as u8;
}

/// 64 KiB of plain RAM. Every address is readable and writable.
pub struct FlatMemory {
    data: Vec<u8>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            data: vec![0; 0x1_0000],
        }
    }

    /// Copy `bytes` starting at `addr`.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            self.data[addr.wrapping_add(i as u16) as usize] = *b;
        }
    }

    /// Store a little-endian vector (e.g. $FFFC for RESET).
    pub fn set_vector(&mut self, vector: u16, target: u16) {
        self.data[vector as usize] = target as u8;
        self.data[vector.wrapping_add(1) as usize] = (target >> 8) as u8;
    }

    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }
}

impl MemoryBus for FlatMemory {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// Load `prg` at $8000, point RESET there and return a reset CPU.
pub fn boot(prg: &[u8]) -> (Cpu, FlatMemory) {
    let mut mem = FlatMemory::new();
    mem.load(PROGRAM_START, prg);
    mem.set_vector(0xFFFC, PROGRAM_START);
    let mut cpu = Cpu::new();
    cpu.reset(&mut mem).expect("reset");
    (cpu, mem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_basic_ines() {
        let rom = build_ines(2, 1, 0x01, 0x00, 1, None);
        assert_eq!(&rom[0..4], b"NES\x1A");
        assert_eq!(rom[4], 2);
        assert_eq!(rom[5], 1);
        assert_eq!(rom[8], 1);
        assert_eq!(rom.len(), 16 + 2 * 16 * 1024 + 8 * 1024);
    }

    #[test]
    fn writes_vectors_for_16k_prg() {
        let mut prg = vec![0u8; 16 * 1024];
        set_vectors_in_prg(&mut prg, 0x8123, 0x8456, 0x8ABC);
        assert_eq!(prg[0x3FFA..], [0x56, 0x84, 0x23, 0x81, 0xBC, 0x8A]);
    }

    #[test]
    fn boot_points_pc_at_program() {
        let (cpu, mem) = boot(&[0xEA]);
        assert_eq!(cpu.pc(), PROGRAM_START);
        assert_eq!(mem.peek(PROGRAM_START), 0xEA);
    }
}
