/*!
RAM module: the 2 KiB CPU work RAM with mirrored access.

CPU address map for internal RAM:
- $0000-$07FF: 2 KiB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)

Owned by `CpuBus`; every index is masked into range, so plain (checked)
slice indexing never fails.
*/

/// Size of CPU internal RAM (in bytes).
pub const CPU_RAM_SIZE: usize = 0x0800;

/// CPU internal RAM, mirrored every 2 KiB through $1FFF.
#[derive(Clone)]
pub struct Ram {
    data: [u8; CPU_RAM_SIZE],
}

impl Default for Ram {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Ram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ram").field("len", &CPU_RAM_SIZE).finish()
    }
}

impl Ram {
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0; CPU_RAM_SIZE],
        }
    }

    /// Clear RAM contents to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Read a byte at a CPU address in $0000-$1FFF.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[Self::mirror_index(addr)]
    }

    /// Write a byte at a CPU address in $0000-$1FFF.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[Self::mirror_index(addr)] = value;
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Physical index for a CPU address.
    #[inline]
    pub fn mirror_index(addr: u16) -> usize {
        (addr as usize) & (CPU_RAM_SIZE - 1)
    }
}
