//! Linear disassembler for raw 6502 byte blobs.
//!
//! Decoding walks forward one instruction at a time. The first byte that
//! does not decode (unsupported opcode or an instruction cut off by the end
//! of the blob) produces a single `???` line and ends the listing.

use std::fmt;

use crate::cpu::instruction::Instruction;

/// One line of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisassembledLine {
    pub address: u16,
    pub bytes: Vec<u8>,
    /// Assembler text, or `???` for undecodable input.
    pub text: String,
}

impl DisassembledLine {
    pub fn is_unknown(&self) -> bool {
        self.text == UNKNOWN
    }
}

impl fmt::Display for DisassembledLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

const UNKNOWN: &str = "???";

/// Disassemble `bytes` as if loaded at `origin`.
pub fn disassemble(bytes: &[u8], origin: u16) -> Vec<DisassembledLine> {
    let mut lines = Vec::new();
    let mut offset = 0usize;

    while offset < bytes.len() {
        let address = origin.wrapping_add(offset as u16);
        match Instruction::decode(&bytes[offset..], address) {
            Ok(inst) => {
                lines.push(DisassembledLine {
                    address,
                    bytes: inst.bytes().to_vec(),
                    text: inst.to_string(),
                });
                offset += inst.size() as usize;
            }
            Err(_) => {
                lines.push(DisassembledLine {
                    address,
                    bytes: bytes[offset..].iter().take(1).copied().collect(),
                    text: UNKNOWN.to_owned(),
                });
                break;
            }
        }
    }
    lines
}

/// Listing as text, one instruction per line, each terminated by `\n`.
pub fn disassemble_to_string(bytes: &[u8], origin: u16) -> String {
    disassemble(bytes, origin)
        .iter()
        .fold(String::new(), |mut out, line| {
            out.push_str(&line.text);
            out.push('\n');
            out
        })
}
