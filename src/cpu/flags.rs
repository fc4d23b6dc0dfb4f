/*!
flags.rs - The processor status register as a bit-flag set.

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (always reads as 1)
  B = BREAK (only exists in pushed copies: PHP/BRK push it set, IRQ/NMI clear)
  D = DECIMAL (toggled by SED/CLD, ignored by the NES ALU)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY

The raw byte is observable (it is pushed to the stack and compared by test
ROMs), so the bit positions are fixed.
*/

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StatusFlags: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const IRQ_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl StatusFlags {
    /// Value loaded by reset: IRQ_DISABLE | UNUSED (0x24).
    pub const POWER_ON: Self = Self::from_bits_retain(0x24);

    /// Byte pushed by PHP / BRK (B set) or by IRQ / NMI entry (B clear).
    #[inline]
    pub fn pushed(self, set_break: bool) -> u8 {
        let mut v = self | Self::UNUSED;
        v.set(Self::BREAK, set_break);
        v.bits()
    }

    /// Status restored from a byte pulled by PLP / RTI.
    #[inline]
    pub fn pulled(byte: u8) -> Self {
        Self::from_bits_retain((byte & !Self::BREAK.bits()) | Self::UNUSED.bits())
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        Self::POWER_ON
    }
}
