/*!
instruction.rs - Decoded 6502 instruction values.

Overview
========
`Instruction` is an immutable snapshot of one encoded instruction: the raw
bytes, the address it was decoded at, its mnemonic and a typed operand.

- `Instruction::decode` is pure: it looks only at the byte slice it is given.
- `Instruction::fetch` pulls exactly as many bytes from a `MemoryBus` as the
  opcode needs, then defers to `decode`.

Neither touches CPU registers.

Display
=======
`Display` renders assembler text (`LDA #$23`, `STA ($86),Y`, `JMP ($FFFC)`).
Relative operands print the absolute branch target rather than the raw
offset, matching the convention of reference trace logs.
*/

use std::fmt;

use crate::cpu::opcode::{self, AddressingMode, Mnemonic};
use crate::error::CpuError;
use crate::memory::MemoryBus;

/// Operand payload, one variant per addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Implied,
    Accumulator,
    Immediate(u8),
    ZeroPage(u8),
    ZeroPageX(u8),
    ZeroPageY(u8),
    Absolute(u16),
    AbsoluteX(u16),
    AbsoluteY(u16),
    Indirect(u16),
    IndexedIndirect(u8),
    IndirectIndexed(u8),
    /// Signed displacement from the end of the branch instruction.
    Relative(u8),
}

impl Operand {
    pub fn mode(&self) -> AddressingMode {
        match self {
            Operand::Implied => AddressingMode::Implied,
            Operand::Accumulator => AddressingMode::Accumulator,
            Operand::Immediate(_) => AddressingMode::Immediate,
            Operand::ZeroPage(_) => AddressingMode::ZeroPage,
            Operand::ZeroPageX(_) => AddressingMode::ZeroPageX,
            Operand::ZeroPageY(_) => AddressingMode::ZeroPageY,
            Operand::Absolute(_) => AddressingMode::Absolute,
            Operand::AbsoluteX(_) => AddressingMode::AbsoluteX,
            Operand::AbsoluteY(_) => AddressingMode::AbsoluteY,
            Operand::Indirect(_) => AddressingMode::Indirect,
            Operand::IndexedIndirect(_) => AddressingMode::IndexedIndirect,
            Operand::IndirectIndexed(_) => AddressingMode::IndirectIndexed,
            Operand::Relative(_) => AddressingMode::Relative,
        }
    }

    fn from_bytes(mode: AddressingMode, bytes: &[u8; 3]) -> Self {
        let b = bytes[1];
        let w = u16::from_le_bytes([bytes[1], bytes[2]]);
        match mode {
            AddressingMode::Implied => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(b),
            AddressingMode::ZeroPage => Operand::ZeroPage(b),
            AddressingMode::ZeroPageX => Operand::ZeroPageX(b),
            AddressingMode::ZeroPageY => Operand::ZeroPageY(b),
            AddressingMode::Absolute => Operand::Absolute(w),
            AddressingMode::AbsoluteX => Operand::AbsoluteX(w),
            AddressingMode::AbsoluteY => Operand::AbsoluteY(w),
            AddressingMode::Indirect => Operand::Indirect(w),
            AddressingMode::IndexedIndirect => Operand::IndexedIndirect(b),
            AddressingMode::IndirectIndexed => Operand::IndirectIndexed(b),
            AddressingMode::Relative => Operand::Relative(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    bytes: [u8; 3],
    size: u8,
    location: u16,
    mnemonic: Mnemonic,
    operand: Operand,
    official: bool,
}

impl Instruction {
    /// Decode the instruction starting at `bytes[0]`, assumed to live at
    /// `location`. Bytes past the encoded length are ignored.
    pub fn decode(bytes: &[u8], location: u16) -> Result<Self, CpuError> {
        let &opcode = bytes.first().ok_or(CpuError::InvalidInstruction)?;
        let info = opcode::lookup(opcode).ok_or(CpuError::UnsupportedOpcode {
            opcode,
            pc: location,
        })?;

        let size = info.mode.len();
        if bytes.len() < size {
            return Err(CpuError::TruncatedInstruction {
                opcode,
                expected: size,
                found: bytes.len(),
            });
        }

        let mut raw = [0u8; 3];
        raw[..size].copy_from_slice(&bytes[..size]);

        Ok(Self {
            bytes: raw,
            size: size as u8,
            location,
            mnemonic: info.mnemonic,
            operand: Operand::from_bytes(info.mode, &raw),
            official: info.official,
        })
    }

    /// Read and decode the instruction at `pc`.
    pub fn fetch<M: MemoryBus + ?Sized>(bus: &mut M, pc: u16) -> Result<Self, CpuError> {
        let opcode = bus.read(pc);
        let info = opcode::lookup(opcode).ok_or(CpuError::UnsupportedOpcode { opcode, pc })?;

        let mut raw = [opcode, 0, 0];
        for (i, slot) in raw.iter_mut().enumerate().take(info.mode.len()).skip(1) {
            *slot = bus.read(pc.wrapping_add(i as u16));
        }
        Self::decode(&raw[..info.mode.len()], pc)
    }

    #[inline]
    pub fn opcode(&self) -> u8 {
        self.bytes[0]
    }

    /// Encoded bytes (1 to 3).
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..self.size as usize]
    }

    #[inline]
    pub fn size(&self) -> u16 {
        self.size as u16
    }

    #[inline]
    pub fn location(&self) -> u16 {
        self.location
    }

    /// Address of the instruction that follows this one.
    #[inline]
    pub fn next_location(&self) -> u16 {
        self.location.wrapping_add(self.size())
    }

    #[inline]
    pub fn mnemonic(&self) -> Mnemonic {
        self.mnemonic
    }

    #[inline]
    pub fn operand(&self) -> Operand {
        self.operand
    }

    #[inline]
    pub fn mode(&self) -> AddressingMode {
        self.operand.mode()
    }

    /// False for undocumented opcodes.
    #[inline]
    pub fn is_official(&self) -> bool {
        self.official
    }

    /// Target of a relative branch; `None` for every other mode.
    pub fn branch_target(&self) -> Option<u16> {
        match self.operand {
            Operand::Relative(off) => {
                Some(self.next_location().wrapping_add(off as i8 as i16 as u16))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.mnemonic;
        match self.operand {
            Operand::Implied => write!(f, "{m}"),
            Operand::Accumulator => write!(f, "{m} A"),
            Operand::Immediate(v) => write!(f, "{m} #${v:02X}"),
            Operand::ZeroPage(v) => write!(f, "{m} ${v:02X}"),
            Operand::ZeroPageX(v) => write!(f, "{m} ${v:02X},X"),
            Operand::ZeroPageY(v) => write!(f, "{m} ${v:02X},Y"),
            Operand::Absolute(w) => write!(f, "{m} ${w:04X}"),
            Operand::AbsoluteX(w) => write!(f, "{m} ${w:04X},X"),
            Operand::AbsoluteY(w) => write!(f, "{m} ${w:04X},Y"),
            Operand::Indirect(w) => write!(f, "{m} (${w:04X})"),
            Operand::IndexedIndirect(v) => write!(f, "{m} (${v:02X},X)"),
            Operand::IndirectIndexed(v) => write!(f, "{m} (${v:02X}),Y"),
            Operand::Relative(_) => {
                let target = self.branch_target().unwrap_or(self.location);
                write!(f, "{m} ${target:04X}")
            }
        }
    }
}
