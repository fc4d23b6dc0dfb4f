#![doc = r#"
Bus module: the CPU-visible memory router.

Overview
- `CpuBus` implements `MemoryBus` by dispatching each address to the device
  that owns it. The CPU core never sees the devices directly.

Address map
- $0000-$1FFF : 2 KiB internal RAM, mirrored (`ram`)
- $2000-$3FFF : PPU register window, mirrored every 8 bytes (`io::PpuRegisters`)
- $4000-$5FFF : APU / OAM DMA / controller / expansion stubs (`io::IoRegisters`)
- $6000-$FFFF : cartridge mapper (PRG RAM + PRG ROM)

Faults
- With no cartridge attached, accesses at $6000 and above are unmapped. The
  router returns 0 for such reads, drops such writes, and latches the first
  fault until `take_fault` collects it.
"#]

pub mod io;
pub mod ram;

use log::warn;

use crate::cartridge::Cartridge;
use crate::error::BusFault;
use crate::memory::MemoryBus;

pub use io::{IoRegisters, PpuRegisters};
pub use ram::{CPU_RAM_SIZE, Ram};

/// Router over RAM, register stubs and the cartridge.
#[derive(Debug, Default)]
pub struct CpuBus {
    ram: Ram,
    ppu: PpuRegisters,
    io: IoRegisters,
    cartridge: Option<Cartridge>,
    fault: Option<BusFault>,
}

impl CpuBus {
    /// Bus with no cartridge inserted.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cartridge(cartridge: Cartridge) -> Self {
        let mut bus = Self::new();
        bus.attach_cartridge(cartridge);
        bus
    }

    pub fn attach_cartridge(&mut self, cartridge: Cartridge) {
        self.cartridge = Some(cartridge);
    }

    pub fn detach_cartridge(&mut self) -> Option<Cartridge> {
        self.cartridge.take()
    }

    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    pub fn ppu_registers(&mut self) -> &mut PpuRegisters {
        &mut self.ppu
    }

    pub fn io_registers(&mut self) -> &mut IoRegisters {
        &mut self.io
    }

    /// Run the mapper's per-step hook.
    pub fn step_mapper(&mut self) {
        if let Some(cart) = self.cartridge.as_mut() {
            cart.mapper_mut().step();
        }
    }

    fn latch_fault(&mut self, fault: BusFault) {
        if self.fault.is_none() {
            warn!("{fault}");
            self.fault = Some(fault);
        }
    }
}

impl MemoryBus for CpuBus {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram.read(addr),
            0x2000..=0x3FFF => self.ppu.read(addr),
            0x4000..=0x5FFF => self.io.read(addr),
            0x6000..=0xFFFF => match self.cartridge.as_mut() {
                Some(cart) => cart.mapper_mut().cpu_read(addr),
                None => {
                    self.latch_fault(BusFault::read(addr));
                    0
                }
            },
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram.write(addr, value),
            0x2000..=0x3FFF => self.ppu.write(addr, value),
            0x4000..=0x5FFF => self.io.write(addr, value),
            0x6000..=0xFFFF => match self.cartridge.as_mut() {
                Some(cart) => cart.mapper_mut().cpu_write(addr, value),
                None => self.latch_fault(BusFault::write(addr)),
            },
        }
    }

    fn take_fault(&mut self) -> Option<BusFault> {
        self.fault.take()
    }
}
