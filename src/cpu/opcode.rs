/*!
opcode.rs - Static opcode metadata: mnemonic, addressing mode, legality.

Design
------
- Table: `[Option<OpcodeInfo>; 256]`, built in a const block.
- `None` marks bytes the decoder rejects: the KIL/JAM family and the
  unstable combined opcodes (ANC, ALR, ARR, XAA, LXA, AXS, AHX, TAS, SHY,
  SHX, LAS).
- Covered undocumented bytes: the multi-byte NOP family, SBC #imm at $EB and
  the eight combined read-modify-write / load / store opcodes (LAX, SAX, DCP,
  ISC, SLO, RLA, SRE, RRA). These are flagged `official: false` so traces can
  mark them.
- Encoded length is a property of the addressing mode (`AddressingMode::len`).
*/

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    // Undocumented combined operations.
    Lax,
    Sax,
    Dcp,
    Isc,
    Slo,
    Rla,
    Sre,
    Rra,
}

impl Mnemonic {
    pub fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Lax => "LAX",
            Sax => "SAX",
            Dcp => "DCP",
            Isc => "ISB",
            Slo => "SLO",
            Rla => "RLA",
            Sre => "SRE",
            Rra => "RRA",
        }
    }

    /// Conditional branches.
    pub fn is_branch(self) -> bool {
        use Mnemonic::*;
        matches!(self, Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirect,
    IndirectIndexed,
    Relative,
}

impl AddressingMode {
    /// Encoded instruction length (opcode byte included).
    #[inline]
    pub const fn len(self) -> usize {
        use AddressingMode::*;
        match self {
            Implied | Accumulator => 1,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | IndexedIndirect | IndirectIndexed
            | Relative => 2,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub official: bool,
}

/// Metadata for `op`, or `None` for bytes outside the supported set.
#[inline]
pub fn lookup(op: u8) -> Option<OpcodeInfo> {
    OPCODES[op as usize]
}

const fn doc(mnemonic: Mnemonic, mode: AddressingMode) -> Option<OpcodeInfo> {
    Some(OpcodeInfo {
        mnemonic,
        mode,
        official: true,
    })
}

const fn undoc(mnemonic: Mnemonic, mode: AddressingMode) -> Option<OpcodeInfo> {
    Some(OpcodeInfo {
        mnemonic,
        mode,
        official: false,
    })
}

static OPCODES: [Option<OpcodeInfo>; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t: [Option<OpcodeInfo>; 256] = [None; 256];

    // Loads / stores
    t[0xA9] = doc(Lda, Immediate);
    t[0xA5] = doc(Lda, ZeroPage);
    t[0xB5] = doc(Lda, ZeroPageX);
    t[0xAD] = doc(Lda, Absolute);
    t[0xBD] = doc(Lda, AbsoluteX);
    t[0xB9] = doc(Lda, AbsoluteY);
    t[0xA1] = doc(Lda, IndexedIndirect);
    t[0xB1] = doc(Lda, IndirectIndexed);
    t[0xA2] = doc(Ldx, Immediate);
    t[0xA6] = doc(Ldx, ZeroPage);
    t[0xB6] = doc(Ldx, ZeroPageY);
    t[0xAE] = doc(Ldx, Absolute);
    t[0xBE] = doc(Ldx, AbsoluteY);
    t[0xA0] = doc(Ldy, Immediate);
    t[0xA4] = doc(Ldy, ZeroPage);
    t[0xB4] = doc(Ldy, ZeroPageX);
    t[0xAC] = doc(Ldy, Absolute);
    t[0xBC] = doc(Ldy, AbsoluteX);
    t[0x85] = doc(Sta, ZeroPage);
    t[0x95] = doc(Sta, ZeroPageX);
    t[0x8D] = doc(Sta, Absolute);
    t[0x9D] = doc(Sta, AbsoluteX);
    t[0x99] = doc(Sta, AbsoluteY);
    t[0x81] = doc(Sta, IndexedIndirect);
    t[0x91] = doc(Sta, IndirectIndexed);
    t[0x86] = doc(Stx, ZeroPage);
    t[0x96] = doc(Stx, ZeroPageY);
    t[0x8E] = doc(Stx, Absolute);
    t[0x84] = doc(Sty, ZeroPage);
    t[0x94] = doc(Sty, ZeroPageX);
    t[0x8C] = doc(Sty, Absolute);

    // Arithmetic
    t[0x69] = doc(Adc, Immediate);
    t[0x65] = doc(Adc, ZeroPage);
    t[0x75] = doc(Adc, ZeroPageX);
    t[0x6D] = doc(Adc, Absolute);
    t[0x7D] = doc(Adc, AbsoluteX);
    t[0x79] = doc(Adc, AbsoluteY);
    t[0x61] = doc(Adc, IndexedIndirect);
    t[0x71] = doc(Adc, IndirectIndexed);
    t[0xE9] = doc(Sbc, Immediate);
    t[0xE5] = doc(Sbc, ZeroPage);
    t[0xF5] = doc(Sbc, ZeroPageX);
    t[0xED] = doc(Sbc, Absolute);
    t[0xFD] = doc(Sbc, AbsoluteX);
    t[0xF9] = doc(Sbc, AbsoluteY);
    t[0xE1] = doc(Sbc, IndexedIndirect);
    t[0xF1] = doc(Sbc, IndirectIndexed);

    // Logical
    t[0x29] = doc(And, Immediate);
    t[0x25] = doc(And, ZeroPage);
    t[0x35] = doc(And, ZeroPageX);
    t[0x2D] = doc(And, Absolute);
    t[0x3D] = doc(And, AbsoluteX);
    t[0x39] = doc(And, AbsoluteY);
    t[0x21] = doc(And, IndexedIndirect);
    t[0x31] = doc(And, IndirectIndexed);
    t[0x09] = doc(Ora, Immediate);
    t[0x05] = doc(Ora, ZeroPage);
    t[0x15] = doc(Ora, ZeroPageX);
    t[0x0D] = doc(Ora, Absolute);
    t[0x1D] = doc(Ora, AbsoluteX);
    t[0x19] = doc(Ora, AbsoluteY);
    t[0x01] = doc(Ora, IndexedIndirect);
    t[0x11] = doc(Ora, IndirectIndexed);
    t[0x49] = doc(Eor, Immediate);
    t[0x45] = doc(Eor, ZeroPage);
    t[0x55] = doc(Eor, ZeroPageX);
    t[0x4D] = doc(Eor, Absolute);
    t[0x5D] = doc(Eor, AbsoluteX);
    t[0x59] = doc(Eor, AbsoluteY);
    t[0x41] = doc(Eor, IndexedIndirect);
    t[0x51] = doc(Eor, IndirectIndexed);
    t[0x24] = doc(Bit, ZeroPage);
    t[0x2C] = doc(Bit, Absolute);

    // Compare
    t[0xC9] = doc(Cmp, Immediate);
    t[0xC5] = doc(Cmp, ZeroPage);
    t[0xD5] = doc(Cmp, ZeroPageX);
    t[0xCD] = doc(Cmp, Absolute);
    t[0xDD] = doc(Cmp, AbsoluteX);
    t[0xD9] = doc(Cmp, AbsoluteY);
    t[0xC1] = doc(Cmp, IndexedIndirect);
    t[0xD1] = doc(Cmp, IndirectIndexed);
    t[0xE0] = doc(Cpx, Immediate);
    t[0xE4] = doc(Cpx, ZeroPage);
    t[0xEC] = doc(Cpx, Absolute);
    t[0xC0] = doc(Cpy, Immediate);
    t[0xC4] = doc(Cpy, ZeroPage);
    t[0xCC] = doc(Cpy, Absolute);

    // Shifts / rotates / INC / DEC
    t[0x0A] = doc(Asl, Accumulator);
    t[0x06] = doc(Asl, ZeroPage);
    t[0x16] = doc(Asl, ZeroPageX);
    t[0x0E] = doc(Asl, Absolute);
    t[0x1E] = doc(Asl, AbsoluteX);
    t[0x4A] = doc(Lsr, Accumulator);
    t[0x46] = doc(Lsr, ZeroPage);
    t[0x56] = doc(Lsr, ZeroPageX);
    t[0x4E] = doc(Lsr, Absolute);
    t[0x5E] = doc(Lsr, AbsoluteX);
    t[0x2A] = doc(Rol, Accumulator);
    t[0x26] = doc(Rol, ZeroPage);
    t[0x36] = doc(Rol, ZeroPageX);
    t[0x2E] = doc(Rol, Absolute);
    t[0x3E] = doc(Rol, AbsoluteX);
    t[0x6A] = doc(Ror, Accumulator);
    t[0x66] = doc(Ror, ZeroPage);
    t[0x76] = doc(Ror, ZeroPageX);
    t[0x6E] = doc(Ror, Absolute);
    t[0x7E] = doc(Ror, AbsoluteX);
    t[0xE6] = doc(Inc, ZeroPage);
    t[0xF6] = doc(Inc, ZeroPageX);
    t[0xEE] = doc(Inc, Absolute);
    t[0xFE] = doc(Inc, AbsoluteX);
    t[0xC6] = doc(Dec, ZeroPage);
    t[0xD6] = doc(Dec, ZeroPageX);
    t[0xCE] = doc(Dec, Absolute);
    t[0xDE] = doc(Dec, AbsoluteX);

    // Branches
    t[0x10] = doc(Bpl, Relative);
    t[0x30] = doc(Bmi, Relative);
    t[0x50] = doc(Bvc, Relative);
    t[0x70] = doc(Bvs, Relative);
    t[0x90] = doc(Bcc, Relative);
    t[0xB0] = doc(Bcs, Relative);
    t[0xD0] = doc(Bne, Relative);
    t[0xF0] = doc(Beq, Relative);

    // Control flow
    t[0x00] = doc(Brk, Implied);
    t[0x20] = doc(Jsr, Absolute);
    t[0x40] = doc(Rti, Implied);
    t[0x60] = doc(Rts, Implied);
    t[0x4C] = doc(Jmp, Absolute);
    t[0x6C] = doc(Jmp, Indirect);

    // Register transfers / increments
    t[0xAA] = doc(Tax, Implied);
    t[0xA8] = doc(Tay, Implied);
    t[0xBA] = doc(Tsx, Implied);
    t[0x8A] = doc(Txa, Implied);
    t[0x9A] = doc(Txs, Implied);
    t[0x98] = doc(Tya, Implied);
    t[0xE8] = doc(Inx, Implied);
    t[0xC8] = doc(Iny, Implied);
    t[0xCA] = doc(Dex, Implied);
    t[0x88] = doc(Dey, Implied);

    // Stack
    t[0x48] = doc(Pha, Implied);
    t[0x08] = doc(Php, Implied);
    t[0x68] = doc(Pla, Implied);
    t[0x28] = doc(Plp, Implied);

    // Flags
    t[0x18] = doc(Clc, Implied);
    t[0x38] = doc(Sec, Implied);
    t[0x58] = doc(Cli, Implied);
    t[0x78] = doc(Sei, Implied);
    t[0xB8] = doc(Clv, Implied);
    t[0xD8] = doc(Cld, Implied);
    t[0xF8] = doc(Sed, Implied);

    t[0xEA] = doc(Nop, Implied);

    // ---------------- Undocumented ----------------

    // NOP family
    t[0x1A] = undoc(Nop, Implied);
    t[0x3A] = undoc(Nop, Implied);
    t[0x5A] = undoc(Nop, Implied);
    t[0x7A] = undoc(Nop, Implied);
    t[0xDA] = undoc(Nop, Implied);
    t[0xFA] = undoc(Nop, Implied);
    t[0x80] = undoc(Nop, Immediate);
    t[0x82] = undoc(Nop, Immediate);
    t[0x89] = undoc(Nop, Immediate);
    t[0xC2] = undoc(Nop, Immediate);
    t[0xE2] = undoc(Nop, Immediate);
    t[0x04] = undoc(Nop, ZeroPage);
    t[0x44] = undoc(Nop, ZeroPage);
    t[0x64] = undoc(Nop, ZeroPage);
    t[0x14] = undoc(Nop, ZeroPageX);
    t[0x34] = undoc(Nop, ZeroPageX);
    t[0x54] = undoc(Nop, ZeroPageX);
    t[0x74] = undoc(Nop, ZeroPageX);
    t[0xD4] = undoc(Nop, ZeroPageX);
    t[0xF4] = undoc(Nop, ZeroPageX);
    t[0x0C] = undoc(Nop, Absolute);
    t[0x1C] = undoc(Nop, AbsoluteX);
    t[0x3C] = undoc(Nop, AbsoluteX);
    t[0x5C] = undoc(Nop, AbsoluteX);
    t[0x7C] = undoc(Nop, AbsoluteX);
    t[0xDC] = undoc(Nop, AbsoluteX);
    t[0xFC] = undoc(Nop, AbsoluteX);

    t[0xEB] = undoc(Sbc, Immediate);

    // LAX = LDA + TAX
    t[0xA3] = undoc(Lax, IndexedIndirect);
    t[0xA7] = undoc(Lax, ZeroPage);
    t[0xAF] = undoc(Lax, Absolute);
    t[0xB3] = undoc(Lax, IndirectIndexed);
    t[0xB7] = undoc(Lax, ZeroPageY);
    t[0xBF] = undoc(Lax, AbsoluteY);

    // SAX = store A & X
    t[0x83] = undoc(Sax, IndexedIndirect);
    t[0x87] = undoc(Sax, ZeroPage);
    t[0x8F] = undoc(Sax, Absolute);
    t[0x97] = undoc(Sax, ZeroPageY);

    // The six read-modify-write combos share one operand layout per column.
    let combos = [
        (0x00, Slo),
        (0x20, Rla),
        (0x40, Sre),
        (0x60, Rra),
        (0xC0, Dcp),
        (0xE0, Isc),
    ];
    let mut i = 0;
    while i < combos.len() {
        let (base, m) = combos[i];
        t[base + 0x03] = undoc(m, IndexedIndirect);
        t[base + 0x07] = undoc(m, ZeroPage);
        t[base + 0x0F] = undoc(m, Absolute);
        t[base + 0x13] = undoc(m, IndirectIndexed);
        t[base + 0x17] = undoc(m, ZeroPageX);
        t[base + 0x1B] = undoc(m, AbsoluteY);
        t[base + 0x1F] = undoc(m, AbsoluteX);
        i += 1;
    }

    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_expected_number_of_opcodes() {
        let official = (0..=255u8)
            .filter_map(lookup)
            .filter(|i| i.official)
            .count();
        let total = (0..=255u8).filter_map(lookup).count();
        assert_eq!(official, 151);
        assert_eq!(total, 231);
    }

    #[test]
    fn jam_and_unstable_bytes_are_absent() {
        for op in [0x02u8, 0x12, 0x22, 0xF2, 0x0B, 0x4B, 0x6B, 0x8B, 0xAB, 0xCB, 0x9B, 0xBB] {
            assert!(lookup(op).is_none(), "opcode {op:02X} should be unsupported");
        }
    }

    #[test]
    fn combined_opcodes_land_in_expected_slots() {
        let dcp = lookup(0xC7).expect("DCP zp");
        assert_eq!(dcp.mnemonic, Mnemonic::Dcp);
        assert_eq!(dcp.mode, AddressingMode::ZeroPage);
        assert!(!dcp.official);

        let isc = lookup(0xFF).expect("ISC abs,X");
        assert_eq!(isc.mnemonic, Mnemonic::Isc);
        assert_eq!(isc.mode, AddressingMode::AbsoluteX);

        let slo = lookup(0x13).expect("SLO (ind),Y");
        assert_eq!(slo.mode, AddressingMode::IndirectIndexed);
    }

    #[test]
    fn relative_mode_is_exactly_the_branches() {
        for op in 0..=255u8 {
            if let Some(info) = lookup(op) {
                assert_eq!(
                    info.mode == AddressingMode::Relative,
                    info.mnemonic.is_branch(),
                    "opcode {op:02X}"
                );
            }
        }
        assert!(Mnemonic::Bne.is_branch());
        assert!(!Mnemonic::Jmp.is_branch());
    }

    #[test]
    fn mode_lengths() {
        assert_eq!(AddressingMode::Implied.len(), 1);
        assert_eq!(AddressingMode::Relative.len(), 2);
        assert_eq!(AddressingMode::Indirect.len(), 3);
    }
}
