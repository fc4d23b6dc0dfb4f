/*!
mapper.rs - Cartridge mapper contract and the NROM (mapper 0) board.

Overview
========
A mapper owns the cartridge side of the address space:
- CPU $6000..=$7FFF : battery-backed / work PRG RAM
- CPU $8000..=$FFFF : PRG ROM (mirrored when smaller than the 32 KiB window)
- PPU $0000..=$1FFF : CHR ROM (or CHR RAM when the board carries no CHR ROM)

The `CpuBus` router forwards every CPU access at $6000 and above to
`cpu_read` / `cpu_write`. Only mapper 0 is implemented; the loader rejects
everything else with `CartridgeError::UnsupportedMapper`.
*/

/// Start of the PRG RAM window.
pub const PRG_RAM_START: u16 = 0x6000;
/// Start of the PRG ROM window.
pub const PRG_ROM_START: u16 = 0x8000;
/// Default PRG RAM size when the header leaves it unspecified.
pub const DEFAULT_PRG_RAM_SIZE: usize = 8 * 1024;

/// Common interface all cartridge mappers implement.
///
/// All addresses are full, unmasked CPU or PPU addresses.
pub trait Mapper {
    /// iNES mapper number.
    fn mapper_id(&self) -> u8;

    /// CPU read at $6000..=$FFFF.
    fn cpu_read(&mut self, addr: u16) -> u8;

    /// CPU write at $6000..=$FFFF.
    fn cpu_write(&mut self, addr: u16, value: u8);

    /// PPU read at $0000..=$1FFF (pattern tables).
    fn ppu_read(&self, addr: u16) -> u8;

    /// PPU write at $0000..=$1FFF. Ignored for CHR ROM.
    fn ppu_write(&mut self, addr: u16, value: u8);

    /// Per-step bookkeeping hook (scanline counters, IRQ timers).
    fn step(&mut self) {}
}

/// NROM (mapper 0).
///
/// - PRG ROM: 16 KiB (NROM-128, mirrored into $C000) or 32 KiB (NROM-256).
/// - PRG RAM: optional, at $6000..=$7FFF, mirrored if smaller than 8 KiB.
/// - CHR: 8 KiB ROM, or RAM when `chr_is_ram`.
#[derive(Clone, Debug)]
pub struct Nrom {
    prg_rom: Vec<u8>,
    prg_ram: Vec<u8>,
    chr: Vec<u8>,
    chr_is_ram: bool,
}

impl Nrom {
    /// Build an NROM board.
    ///
    /// An empty `chr` is replaced by 8 KiB of CHR RAM.
    pub fn new(prg_rom: Vec<u8>, chr: Vec<u8>, prg_ram_size: usize) -> Self {
        let chr_is_ram = chr.is_empty();
        let chr = if chr_is_ram { vec![0; 0x2000] } else { chr };
        Self {
            prg_rom,
            prg_ram: vec![0; prg_ram_size],
            chr,
            chr_is_ram,
        }
    }

    #[inline]
    fn prg_rom_read(&self, addr: u16) -> u8 {
        let len = self.prg_rom.len();
        if len == 0 {
            return 0;
        }
        let rel = addr.wrapping_sub(PRG_ROM_START) as usize;
        self.prg_rom[rel % len]
    }

    #[inline]
    fn prg_ram_index(&self, addr: u16) -> Option<usize> {
        let len = self.prg_ram.len();
        if len == 0 {
            return None;
        }
        Some(addr.wrapping_sub(PRG_RAM_START) as usize % len)
    }

    /// True for the 16 KiB (mirrored) variant.
    pub fn is_nrom_128(&self) -> bool {
        self.prg_rom.len() <= 0x4000
    }

    pub fn prg_ram(&self) -> &[u8] {
        &self.prg_ram
    }

    pub fn chr_is_ram(&self) -> bool {
        self.chr_is_ram
    }
}

impl Mapper for Nrom {
    #[inline]
    fn mapper_id(&self) -> u8 {
        0
    }

    fn cpu_read(&mut self, addr: u16) -> u8 {
        match addr {
            0x6000..=0x7FFF => self.prg_ram_index(addr).map_or(0, |i| self.prg_ram[i]),
            0x8000..=0xFFFF => self.prg_rom_read(addr),
            _ => 0,
        }
    }

    fn cpu_write(&mut self, addr: u16, value: u8) {
        // PRG ROM has no registers on this board; writes there are dropped.
        if let 0x6000..=0x7FFF = addr {
            if let Some(i) = self.prg_ram_index(addr) {
                self.prg_ram[i] = value;
            }
        }
    }

    fn ppu_read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.chr[(addr as usize) % self.chr.len()],
            _ => 0,
        }
    }

    fn ppu_write(&mut self, addr: u16, value: u8) {
        if self.chr_is_ram && addr <= 0x1FFF {
            let idx = (addr as usize) % self.chr.len();
            self.chr[idx] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PRG_RAM_SIZE, Mapper, Nrom};

    #[test]
    fn nrom_256_reads_direct() {
        let mut prg = vec![0xAA; 32 * 1024];
        prg[0] = 0x01;
        prg[0x7FFF] = 0x02;
        let mut nrom = Nrom::new(prg, vec![0xCC; 8 * 1024], DEFAULT_PRG_RAM_SIZE);

        assert!(!nrom.is_nrom_128());
        assert_eq!(nrom.cpu_read(0x8000), 0x01);
        assert_eq!(nrom.cpu_read(0xC000), 0xAA);
        assert_eq!(nrom.cpu_read(0xFFFF), 0x02);
    }

    #[test]
    fn nrom_128_mirrors_upper_bank() {
        let mut prg = vec![0x00; 16 * 1024];
        prg[0] = 0x12;
        prg[0x3FFF] = 0x34;
        let mut nrom = Nrom::new(prg, vec![0; 8 * 1024], 0);

        assert!(nrom.is_nrom_128());
        assert_eq!(nrom.cpu_read(0x8000), 0x12);
        assert_eq!(nrom.cpu_read(0xBFFF), 0x34);
        assert_eq!(nrom.cpu_read(0xC000), 0x12);
        assert_eq!(nrom.cpu_read(0xFFFF), 0x34);
    }

    #[test]
    fn prg_ram_is_read_write_and_rom_is_not() {
        let mut nrom = Nrom::new(vec![0xEA; 16 * 1024], vec![0; 8 * 1024], DEFAULT_PRG_RAM_SIZE);
        nrom.cpu_write(0x6000, 0x42);
        nrom.cpu_write(0x7FFF, 0x43);
        assert_eq!(nrom.cpu_read(0x6000), 0x42);
        assert_eq!(nrom.cpu_read(0x7FFF), 0x43);
        assert_eq!(nrom.prg_ram()[0], 0x42);

        nrom.cpu_write(0x8000, 0x00);
        assert_eq!(nrom.cpu_read(0x8000), 0xEA);
    }

    #[test]
    fn missing_prg_ram_reads_zero() {
        let mut nrom = Nrom::new(vec![0xEA; 16 * 1024], vec![0; 8 * 1024], 0);
        nrom.cpu_write(0x6000, 0x42);
        assert_eq!(nrom.cpu_read(0x6000), 0);
    }

    #[test]
    fn chr_rom_ignores_writes() {
        let mut nrom = Nrom::new(vec![0; 16 * 1024], vec![0xCC; 8 * 1024], 0);
        assert!(!nrom.chr_is_ram());
        nrom.ppu_write(0x0000, 0x11);
        assert_eq!(nrom.ppu_read(0x0000), 0xCC);
    }

    #[test]
    fn empty_chr_becomes_chr_ram() {
        let mut nrom = Nrom::new(vec![0; 16 * 1024], Vec::new(), 0);
        assert!(nrom.chr_is_ram());
        nrom.ppu_write(0x1FFF, 0x77);
        assert_eq!(nrom.ppu_read(0x1FFF), 0x77);
        // step is a no-op on this board
        nrom.step();
        assert_eq!(nrom.mapper_id(), 0);
    }
}
