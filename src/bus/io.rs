/*!
io.rs - Register-window stubs for the devices outside the CPU core.

The picture processor, audio unit and controller ports are external
collaborators. These stubs give them a place on the bus so programs that
poke the registers behave sanely:

- `PpuRegisters` : $2000-$3FFF, eight registers mirrored every 8 bytes.
  Reads of $2002 return the status latch (top three bits) merged with the
  low five bits of the last value written to any register, then clear the
  vblank bit. Other reads return that last written value.
- `IoRegisters`  : $4000-$5FFF (APU, OAM DMA, controllers, expansion). Reads
  return 0; writes are remembered so a host can inspect them, and a write to
  $4014 records the OAM DMA page.
*/

pub const PPU_REGISTERS_START: u16 = 0x2000;
pub const PPUSTATUS: u16 = 0x2002;
pub const OAM_DMA: u16 = 0x4014;

const VBLANK: u8 = 0x80;

/// Fold $2000-$3FFF onto the eight PPU registers.
#[inline]
pub fn mirror_ppu_reg(addr: u16) -> u16 {
    PPU_REGISTERS_START | (addr & 0x0007)
}

#[derive(Debug, Default, Clone)]
pub struct PpuRegisters {
    regs: [u8; 8],
    status: u8,
    latch: u8,
}

impl PpuRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        match mirror_ppu_reg(addr) {
            PPUSTATUS => {
                let v = (self.status & 0xE0) | (self.latch & 0x1F);
                self.status &= !VBLANK;
                v
            }
            _ => self.latch,
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        let reg = mirror_ppu_reg(addr);
        self.latch = value;
        self.regs[(reg - PPU_REGISTERS_START) as usize] = value;
    }

    /// Last value written to register `index` (0..=7).
    pub fn register(&self, index: usize) -> u8 {
        self.regs[index & 7]
    }

    /// Set the status bits a PPU would drive (vblank, sprite 0, overflow).
    pub fn set_status(&mut self, status: u8) {
        self.status = status;
    }
}

#[derive(Debug, Default, Clone)]
pub struct IoRegisters {
    last_write: Option<(u16, u8)>,
    oam_dma_page: Option<u8>,
}

impl IoRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn read(&mut self, _addr: u16) -> u8 {
        0
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        if addr == OAM_DMA {
            self.oam_dma_page = Some(value);
        }
        self.last_write = Some((addr, value));
    }

    pub fn last_write(&self) -> Option<(u16, u8)> {
        self.last_write
    }

    /// Take the page requested by the most recent $4014 write.
    pub fn take_oam_dma(&mut self) -> Option<u8> {
        self.oam_dma_page.take()
    }
}
