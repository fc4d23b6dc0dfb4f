/*!
cartridge.rs - iNES container loader.

Overview
========
Parses the 16-byte iNES header, slices PRG ROM and CHR ROM out of the image
and builds the mapper that will serve the cartridge window of the CPU bus.

Header Layout
=============
```text
0-3  : "NES" 0x1A
4    : PRG ROM size in 16 KiB units
5    : CHR ROM size in 8 KiB units (0 => board uses 8 KiB CHR RAM)
6    : flags 6 (mirroring, battery, trainer, four-screen, mapper low nibble)
7    : flags 7 (mapper high nibble, NES 2.0 marker)
8    : PRG RAM size in 8 KiB units (0 => 8 KiB by convention; NES 2.0 => 8 KiB)
9-15 : ignored
```

Layout after the header: optional 512-byte trainer, then PRG ROM, then CHR ROM.

Notes
=====
- NES 2.0 images are recognised and loaded through their iNES 1 compatible
  fields; the extended fields are ignored.
- Only mapper 0 builds. Any other mapper number is `UnsupportedMapper`.
*/

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::CartridgeError;
use crate::mapper::{DEFAULT_PRG_RAM_SIZE, Mapper, Nrom};

pub const INES_MAGIC: [u8; 4] = *b"NES\x1A";
pub const HEADER_LEN: usize = 16;
pub const TRAINER_LEN: usize = 512;
pub const PRG_ROM_UNIT: usize = 16 * 1024;
pub const CHR_ROM_UNIT: usize = 8 * 1024;
pub const PRG_RAM_UNIT: usize = 8 * 1024;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InesVersion {
    Ines1,
    Ines2,
}

/// Decoded iNES header fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InesHeader {
    pub prg_rom_units: u8,
    pub chr_rom_units: u8,
    pub mapper_id: u8,
    pub mirroring: Mirroring,
    pub battery: bool,
    pub has_trainer: bool,
    pub prg_ram_units: u8,
    pub version: InesVersion,
}

impl InesHeader {
    /// Decode the first 16 bytes of an iNES image.
    pub fn parse(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < INES_MAGIC.len() || data[..4] != INES_MAGIC {
            return Err(CartridgeError::InvalidPreamble);
        }
        if data.len() < HEADER_LEN {
            return Err(CartridgeError::Truncated {
                section: "header",
                expected: HEADER_LEN,
                found: data.len(),
            });
        }

        let flags6 = data[6];
        let flags7 = data[7];

        let mirroring = if flags6 & 0b0000_1000 != 0 {
            Mirroring::FourScreen
        } else if flags6 & 0b0000_0001 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let version = if flags7 & 0x0C == 0x08 {
            InesVersion::Ines2
        } else {
            InesVersion::Ines1
        };

        Ok(Self {
            prg_rom_units: data[4],
            chr_rom_units: data[5],
            mapper_id: (flags6 >> 4) | (flags7 & 0xF0),
            mirroring,
            battery: flags6 & 0b0000_0010 != 0,
            has_trainer: flags6 & 0b0000_0100 != 0,
            prg_ram_units: data[8],
            version,
        })
    }

    #[inline]
    pub fn prg_rom_len(&self) -> usize {
        self.prg_rom_units as usize * PRG_ROM_UNIT
    }

    #[inline]
    pub fn chr_rom_len(&self) -> usize {
        self.chr_rom_units as usize * CHR_ROM_UNIT
    }

    /// PRG RAM size. Byte 8 only counts 8 KiB units in iNES 1 headers; NES 2.0
    /// reuses it for mapper extension bits, so those images get the default.
    #[inline]
    pub fn prg_ram_len(&self) -> usize {
        match (self.version, self.prg_ram_units) {
            (InesVersion::Ines2, _) | (_, 0) => DEFAULT_PRG_RAM_SIZE,
            (InesVersion::Ines1, n) => n as usize * PRG_RAM_UNIT,
        }
    }
}

/// A loaded cartridge: header metadata plus the mapper serving its memory.
pub struct Cartridge {
    header: InesHeader,
    mapper: Box<dyn Mapper>,
}

impl std::fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cartridge")
            .field("header", &self.header)
            .field("mapper_id", &self.mapper.mapper_id())
            .finish()
    }
}

impl Cartridge {
    /// Load a cartridge from raw iNES bytes.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        let header = InesHeader::parse(data)?;

        let mut offset = HEADER_LEN;
        if header.has_trainer {
            warn!("iNES trainer present; skipping {TRAINER_LEN} bytes");
            offset += TRAINER_LEN;
        }
        if header.version == InesVersion::Ines2 && header.prg_ram_units != 0 {
            warn!(
                "NES 2.0 byte 8 (${:02X}) ignored; using {DEFAULT_PRG_RAM_SIZE} bytes of PRG RAM",
                header.prg_ram_units
            );
        }

        let prg_rom = slice_section(data, offset, header.prg_rom_len(), "PRG ROM")?.to_vec();
        offset += prg_rom.len();
        let chr = slice_section(data, offset, header.chr_rom_len(), "CHR ROM")?.to_vec();

        let mapper: Box<dyn Mapper> = match header.mapper_id {
            0 => Box::new(Nrom::new(prg_rom, chr, header.prg_ram_len())),
            id => return Err(CartridgeError::UnsupportedMapper(id)),
        };

        debug!(
            "cartridge loaded: mapper={} prg={}B chr={}B prg_ram={}B mirroring={:?} battery={}",
            header.mapper_id,
            header.prg_rom_len(),
            header.chr_rom_len(),
            header.prg_ram_len(),
            header.mirroring,
            header.battery
        );

        Ok(Self { header, mapper })
    }

    /// Load a cartridge from a `.nes` file.
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let bytes = fs::read(path)?;
        Self::from_ines_bytes(&bytes)
    }

    pub fn header(&self) -> &InesHeader {
        &self.header
    }

    pub fn mapper_id(&self) -> u8 {
        self.header.mapper_id
    }

    pub fn mirroring(&self) -> Mirroring {
        self.header.mirroring
    }

    pub fn battery_backed(&self) -> bool {
        self.header.battery
    }

    pub fn prg_rom_len(&self) -> usize {
        self.header.prg_rom_len()
    }

    pub fn chr_len(&self) -> usize {
        self.header.chr_rom_len()
    }

    pub fn mapper(&self) -> &dyn Mapper {
        self.mapper.as_ref()
    }

    pub fn mapper_mut(&mut self) -> &mut dyn Mapper {
        self.mapper.as_mut()
    }
}

fn slice_section<'a>(
    data: &'a [u8],
    offset: usize,
    len: usize,
    section: &'static str,
) -> Result<&'a [u8], CartridgeError> {
    data.get(offset..offset + len)
        .ok_or(CartridgeError::Truncated {
            section,
            expected: offset + len,
            found: data.len(),
        })
}
