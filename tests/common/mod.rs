// Shared helpers for integration tests: in-memory iNES image construction.

#![allow(dead_code)]

/// Initialize logging for tests; repeated calls are harmless.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builder for small NROM test images.
///
/// Starts from a one-bank PRG (mirrored across $8000-$FFFF) with the reset
/// vector at $8000, an empty CHR bank, and no interrupt handlers.
pub struct RomBuilder {
    prg: Vec<u8>,
    chr: Vec<u8>,
    prg_banks: u8,
    flags6: u8,
}

impl RomBuilder {
    pub fn new() -> Self {
        let mut builder = RomBuilder {
            prg: vec![0; 16 * 1024],
            chr: vec![0; 8 * 1024],
            prg_banks: 1,
            flags6: 0,
        };
        builder.set_vector(0xFFFC, 0x8000);
        builder
    }

    /// Grow to two PRG banks ($8000-$FFFF mapped linearly)
    pub fn two_banks(mut self) -> Self {
        self.prg = vec![0; 32 * 1024];
        self.prg_banks = 2;
        self.set_vector(0xFFFC, 0x8000);
        self
    }

    /// Use vertical mirroring
    pub fn vertical_mirroring(mut self) -> Self {
        self.flags6 |= 0x01;
        self
    }

    /// Place code or data at a CPU address in $8000-$FFFF
    pub fn code(mut self, addr: u16, bytes: &[u8]) -> Self {
        let offset = self.prg_offset(addr);
        self.prg[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    /// Fill the whole PRG space with one byte. Vectors must be set again
    /// afterwards.
    pub fn fill_prg(mut self, value: u8) -> Self {
        self.prg.fill(value);
        self
    }

    /// Set the reset vector
    pub fn reset_vector(mut self, addr: u16) -> Self {
        self.set_vector(0xFFFC, addr);
        self
    }

    /// Set the NMI vector
    pub fn nmi_vector(mut self, addr: u16) -> Self {
        self.set_vector(0xFFFA, addr);
        self
    }

    /// Set the IRQ/BRK vector
    pub fn irq_vector(mut self, addr: u16) -> Self {
        self.set_vector(0xFFFE, addr);
        self
    }

    /// Fill CHR tile `tile` with a solid color (1-3)
    pub fn solid_tile(mut self, tile: usize, color: u8) -> Self {
        for row in 0..8 {
            self.chr[tile * 16 + row] = if color & 1 != 0 { 0xFF } else { 0x00 };
            self.chr[tile * 16 + row + 8] = if color & 2 != 0 { 0xFF } else { 0x00 };
        }
        self
    }

    /// Produce the iNES image
    pub fn build(self) -> Vec<u8> {
        let mut rom = vec![0u8; 16];
        rom[0..4].copy_from_slice(&[0x4E, 0x45, 0x53, 0x1A]);
        rom[4] = self.prg_banks;
        rom[5] = 1;
        rom[6] = self.flags6;
        rom.extend(&self.prg);
        rom.extend(&self.chr);
        rom
    }

    fn set_vector(&mut self, vector: u16, target: u16) {
        let offset = self.prg_offset(vector);
        self.prg[offset] = (target & 0xFF) as u8;
        self.prg[offset + 1] = (target >> 8) as u8;
    }

    /// CPU address -> PRG offset, honoring single-bank mirroring
    fn prg_offset(&self, addr: u16) -> usize {
        (addr as usize - 0x8000) % self.prg.len()
    }
}

impl Default for RomBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A ROM that spins in place: JMP $8000
pub fn spin_rom() -> Vec<u8> {
    RomBuilder::new().code(0x8000, &[0x4C, 0x00, 0x80]).build()
}
