/*!
memory.rs - The byte-addressable memory contract consumed by the CPU core.

Overview
========
`MemoryBus` is the only way the CPU touches the outside world. Concrete
implementations (the `CpuBus` router, test doubles) decide how each of the
65,536 addresses is backed; the core only relies on the methods below.

Method Set
==========
- `read` / `write`      : byte primitives (required).
- `read16`              : little-endian word, high byte from `addr + 1`.
- `read16_bug`          : little-endian word reproducing the 6502 indirect
                          page-wrap defect: when the low byte of `addr` is
                          0xFF the high byte comes from `addr & 0xFF00`.
- `take_fault`          : hand over (and clear) the first access that no
                          region covered since the last call.

Caller Requirements
===================
- Reads take `&mut self`: some regions (PPU status, controller ports) have
  read side effects on real hardware.
- The 16-bit helpers are built purely from `read`; implementors normally
  leave the default bodies alone.
*/

use crate::error::BusFault;

/// CPU-visible 16-bit address space.
pub trait MemoryBus {
    /// Read one byte.
    fn read(&mut self, addr: u16) -> u8;

    /// Write one byte.
    fn write(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read (wraps at 0xFFFF).
    #[inline]
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Little-endian 16-bit read with the indirect page-wrap bug.
    #[inline]
    fn read16_bug(&mut self, addr: u16) -> u16 {
        let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
        let lo = self.read(addr) as u16;
        let hi = self.read(hi_addr) as u16;
        (hi << 8) | lo
    }

    /// Return and clear the first unmapped access recorded since the last call.
    #[inline]
    fn take_fault(&mut self) -> Option<BusFault> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryBus;
    use crate::test_utils::FlatMemory;

    #[test]
    fn read16_is_little_endian() {
        let mut m = FlatMemory::new();
        m.write(0x1234, 0xCD);
        m.write(0x1235, 0xAB);
        assert_eq!(m.read16(0x1234), 0xABCD);
    }

    #[test]
    fn read16_wraps_at_top_of_address_space() {
        let mut m = FlatMemory::new();
        m.write(0xFFFF, 0x34);
        m.write(0x0000, 0x12);
        assert_eq!(m.read16(0xFFFF), 0x1234);
    }

    #[test]
    fn read16_bug_stays_on_page() {
        let mut m = FlatMemory::new();
        m.write(0x01FF, 0x00);
        m.write(0x0100, 0x80);
        m.write(0x0200, 0x90);
        // High byte comes from $0100, not $0200.
        assert_eq!(m.read16_bug(0x01FF), 0x8000);
        assert_eq!(m.read16(0x01FF), 0x9000);
    }

    #[test]
    fn read16_bug_matches_read16_off_boundary() {
        let mut m = FlatMemory::new();
        m.write(0x0310, 0x78);
        m.write(0x0311, 0x56);
        assert_eq!(m.read16_bug(0x0310), m.read16(0x0310));
    }
}
