/*!
error.rs - Typed failures surfaced by the CPU core, the memory router and
the cartridge loader.

Overview
========
Three error families:
- `CpuError`       : raised by the decoder and by `Cpu::step` / `Cpu::reset`.
- `CartridgeError` : raised while parsing an iNES image.
- `BusFault`       : an access that no memory region covers. Buses latch the
                     fault; the engine collects it after each step and wraps it
                     in `CpuError::Bus`.

All three implement `Display` and `std::error::Error` so callers can box them
or bubble them through `?` alongside I/O errors.
*/

use std::fmt;

/// Direction of a faulting bus access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Read,
    Write,
}

/// An access to an address no memory region claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault {
    pub address: u16,
    pub kind: AccessKind,
}

impl BusFault {
    #[inline]
    pub fn read(address: u16) -> Self {
        Self {
            address,
            kind: AccessKind::Read,
        }
    }

    #[inline]
    pub fn write(address: u16) -> Self {
        Self {
            address,
            kind: AccessKind::Write,
        }
    }
}

impl fmt::Display for BusFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.kind {
            AccessKind::Read => "read from",
            AccessKind::Write => "write to",
        };
        write!(f, "unmapped {dir} ${:04X}", self.address)
    }
}

impl std::error::Error for BusFault {}

/// Failures raised by instruction decode and execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// Opcode byte has no table entry and no fallback classification.
    UnsupportedOpcode { opcode: u8, pc: u16 },
    /// The decoder was handed an empty byte window.
    InvalidInstruction,
    /// Fewer bytes than the opcode's encoded length were supplied.
    TruncatedInstruction { opcode: u8, expected: usize, found: usize },
    /// An instruction (or the reset/interrupt sequence) touched unmapped memory.
    Bus(BusFault),
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOpcode { opcode, pc } => {
                write!(f, "unsupported opcode ${opcode:02X} at ${pc:04X}")
            }
            Self::InvalidInstruction => write!(f, "invalid instruction: no bytes to decode"),
            Self::TruncatedInstruction {
                opcode,
                expected,
                found,
            } => write!(
                f,
                "truncated instruction ${opcode:02X}: expected {expected} bytes, found {found}"
            ),
            Self::Bus(fault) => write!(f, "bus fault: {fault}"),
        }
    }
}

impl std::error::Error for CpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bus(fault) => Some(fault),
            _ => None,
        }
    }
}

impl From<BusFault> for CpuError {
    fn from(fault: BusFault) -> Self {
        Self::Bus(fault)
    }
}

/// Failures raised while loading an iNES cartridge image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    /// First four bytes are not `N E S 0x1A`.
    InvalidPreamble,
    /// Mapper number outside the supported set.
    UnsupportedMapper(u8),
    /// The image ends before a section the header promises.
    Truncated {
        section: &'static str,
        expected: usize,
        found: usize,
    },
    /// Reading the image from disk failed.
    Io(String),
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPreamble => write!(f, "invalid iNES preamble (expected \"NES\\x1A\")"),
            Self::UnsupportedMapper(id) => write!(f, "unsupported mapper {id}"),
            Self::Truncated {
                section,
                expected,
                found,
            } => write!(
                f,
                "iNES image truncated in {section}: need {expected} bytes, have {found}"
            ),
            Self::Io(msg) => write!(f, "failed to read cartridge: {msg}"),
        }
    }
}

impl std::error::Error for CartridgeError {}

impl From<std::io::Error> for CartridgeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_include_hex_context() {
        let e = CpuError::UnsupportedOpcode {
            opcode: 0x02,
            pc: 0xC123,
        };
        assert_eq!(e.to_string(), "unsupported opcode $02 at $C123");

        let f = CpuError::Bus(BusFault::write(0x6000));
        assert_eq!(f.to_string(), "bus fault: unmapped write to $6000");
    }

    #[test]
    fn bus_fault_is_error_source() {
        use std::error::Error;
        let e = CpuError::from(BusFault::read(0x8000));
        let src = e.source().expect("source");
        assert_eq!(src.to_string(), "unmapped read from $8000");
        assert!(CpuError::InvalidInstruction.source().is_none());
    }

    #[test]
    fn cartridge_error_display() {
        assert_eq!(
            CartridgeError::UnsupportedMapper(4).to_string(),
            "unsupported mapper 4"
        );
        let t = CartridgeError::Truncated {
            section: "PRG ROM",
            expected: 32768,
            found: 100,
        };
        assert!(t.to_string().contains("PRG ROM"));
    }
}
