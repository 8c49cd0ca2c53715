// Mapper 0 (NROM) - the simplest NES mapper, no bank switching
//
// Memory layout:
// - CPU $6000-$7FFF: 8KB PRG-RAM
// - CPU $8000-$FFFF: PRG-ROM; a single 16KB bank is mirrored across the
//   32KB window, two banks fill it linearly
// - PPU $0000-$1FFF: 8KB CHR-ROM, or 8KB CHR-RAM when the image has no
//   CHR banks
//
// NROM has no registers: PRG-ROM writes are dropped and mirroring is fixed
// by the header.

use crate::cartridge::{Cartridge, CartridgeError, Mapper, Mirroring, CHR_BANK_SIZE, PRG_RAM_SIZE};

/// Mapper 0 implementation (NROM)
///
/// Used by the earliest cartridges (Super Mario Bros., Donkey Kong, Balloon
/// Fight). Supports 16KB (NROM-128) and 32KB (NROM-256) PRG images.
pub struct Mapper0 {
    /// PRG-ROM data (16KB or 32KB)
    prg_rom: Vec<u8>,
    /// CHR-ROM or CHR-RAM data (8KB)
    chr: Vec<u8>,
    /// Whether the CHR memory is writable RAM
    chr_is_ram: bool,
    /// 8KB PRG-RAM at $6000-$7FFF
    prg_ram: Vec<u8>,
    /// Mirroring, fixed by the cartridge header
    mirroring: Mirroring,
}

impl Mapper0 {
    /// Build an NROM mapper from a decoded cartridge image.
    ///
    /// An image without CHR banks gets 8KB of writable CHR-RAM instead.
    pub fn new(cartridge: Cartridge) -> Self {
        let chr_is_ram = cartridge.chr_rom.is_empty();
        let chr = if chr_is_ram {
            vec![0; CHR_BANK_SIZE]
        } else {
            cartridge.chr_rom
        };

        Mapper0 {
            prg_rom: cartridge.prg_rom,
            chr,
            chr_is_ram,
            prg_ram: vec![0; PRG_RAM_SIZE],
            mirroring: cartridge.mirroring,
        }
    }
}

impl Mapper for Mapper0 {
    fn read_prg(&self, addr: u16) -> u8 {
        match addr {
            0x6000..=0x7FFF => self.prg_ram[(addr - 0x6000) as usize],
            0x8000..=0xFFFF => {
                // Modulo mirrors a single 16KB bank across the window;
                // a 32KB image maps linearly
                let index = (addr - 0x8000) as usize;
                self.prg_rom[index % self.prg_rom.len()]
            }
            _ => 0,
        }
    }

    fn write_prg(&mut self, addr: u16, value: u8) {
        // Only PRG-RAM is writable; ROM writes are dropped
        if let 0x6000..=0x7FFF = addr {
            self.prg_ram[(addr - 0x6000) as usize] = value;
        }
    }

    fn read_chr(&self, addr: u16) -> Result<u8, CartridgeError> {
        if addr >= 0x2000 {
            return Err(CartridgeError::InvalidChrAddress(addr));
        }
        Ok(self.chr[addr as usize])
    }

    fn write_chr(&mut self, addr: u16, value: u8) -> Result<(), CartridgeError> {
        if addr >= 0x2000 {
            return Err(CartridgeError::InvalidChrAddress(addr));
        }
        if self.chr_is_ram {
            self.chr[addr as usize] = value;
        }
        Ok(())
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a test cartridge with the given PRG size and CHR configuration
    fn create_test_cartridge(prg_banks: u8, chr_banks: u8, mirroring: Mirroring) -> Cartridge {
        Cartridge {
            prg_rom: vec![0xAA; prg_banks as usize * 16 * 1024],
            chr_rom: vec![0xBB; chr_banks as usize * 8 * 1024],
            prg_banks,
            chr_banks,
            mapper: 0,
            mirroring,
            has_battery: false,
            has_trainer: false,
        }
    }

    #[test]
    fn test_prg_read_16kb_mirroring() {
        let mut cartridge = create_test_cartridge(1, 1, Mirroring::Horizontal);
        for (i, byte) in cartridge.prg_rom.iter_mut().enumerate() {
            *byte = (i & 0xFF) as u8;
        }
        let mapper = Mapper0::new(cartridge);

        // First window
        assert_eq!(mapper.read_prg(0x8000), 0x00);
        assert_eq!(mapper.read_prg(0x8001), 0x01);
        assert_eq!(mapper.read_prg(0xBFFF), 0xFF);

        // $C000-$FFFF mirrors $8000-$BFFF
        assert_eq!(mapper.read_prg(0xC000), mapper.read_prg(0x8000));
        assert_eq!(mapper.read_prg(0xFFFC), mapper.read_prg(0xBFFC));
        assert_eq!(mapper.read_prg(0xFFFF), mapper.read_prg(0xBFFF));
    }

    #[test]
    fn test_prg_read_32kb_linear() {
        let mut cartridge = create_test_cartridge(2, 1, Mirroring::Horizontal);
        cartridge.prg_rom[0x0000] = 0x11;
        cartridge.prg_rom[0x4000] = 0x22;
        let mapper = Mapper0::new(cartridge);

        assert_eq!(mapper.read_prg(0x8000), 0x11);
        assert_eq!(mapper.read_prg(0xC000), 0x22);
    }

    #[test]
    fn test_prg_rom_writes_dropped() {
        let mapper_cart = create_test_cartridge(1, 1, Mirroring::Horizontal);
        let mut mapper = Mapper0::new(mapper_cart);

        let original = mapper.read_prg(0x8000);
        mapper.write_prg(0x8000, !original);
        assert_eq!(mapper.read_prg(0x8000), original);
    }

    #[test]
    fn test_prg_ram_read_write() {
        let mut mapper = Mapper0::new(create_test_cartridge(1, 1, Mirroring::Horizontal));

        mapper.write_prg(0x6000, 0x42);
        mapper.write_prg(0x7FFF, 0x99);
        assert_eq!(mapper.read_prg(0x6000), 0x42);
        assert_eq!(mapper.read_prg(0x7FFF), 0x99);
    }

    #[test]
    fn test_unmapped_prg_reads_zero() {
        let mapper = Mapper0::new(create_test_cartridge(1, 1, Mirroring::Horizontal));
        assert_eq!(mapper.read_prg(0x4020), 0);
        assert_eq!(mapper.read_prg(0x5FFF), 0);
    }

    #[test]
    fn test_chr_rom_read() {
        let mut cartridge = create_test_cartridge(1, 1, Mirroring::Horizontal);
        cartridge.chr_rom[0x0000] = 0x12;
        cartridge.chr_rom[0x1FFF] = 0x34;
        let mapper = Mapper0::new(cartridge);

        assert_eq!(mapper.read_chr(0x0000).unwrap(), 0x12);
        assert_eq!(mapper.read_chr(0x1FFF).unwrap(), 0x34);
    }

    #[test]
    fn test_chr_rom_writes_dropped() {
        let mut cartridge = create_test_cartridge(1, 1, Mirroring::Horizontal);
        cartridge.chr_rom[0] = 0xAA;
        let mut mapper = Mapper0::new(cartridge);

        mapper.write_chr(0x0000, 0x55).unwrap();
        assert_eq!(mapper.read_chr(0x0000).unwrap(), 0xAA);
    }

    #[test]
    fn test_chr_ram_read_write() {
        // No CHR banks in the image: mapper allocates writable CHR-RAM
        let mut mapper = Mapper0::new(create_test_cartridge(1, 0, Mirroring::Vertical));

        mapper.write_chr(0x0000, 0x42).unwrap();
        mapper.write_chr(0x1FFF, 0x99).unwrap();
        assert_eq!(mapper.read_chr(0x0000).unwrap(), 0x42);
        assert_eq!(mapper.read_chr(0x1FFF).unwrap(), 0x99);
    }

    #[test]
    fn test_chr_address_out_of_range() {
        let mut mapper = Mapper0::new(create_test_cartridge(1, 1, Mirroring::Horizontal));

        assert!(matches!(
            mapper.read_chr(0x2000),
            Err(CartridgeError::InvalidChrAddress(0x2000))
        ));
        assert!(matches!(
            mapper.write_chr(0x3F00, 0),
            Err(CartridgeError::InvalidChrAddress(0x3F00))
        ));
    }

    #[test]
    fn test_mirroring_reported_from_header() {
        let mapper = Mapper0::new(create_test_cartridge(1, 1, Mirroring::Vertical));
        assert_eq!(mapper.mirroring(), Mirroring::Vertical);

        let mapper = Mapper0::new(create_test_cartridge(1, 1, Mirroring::FourScreen));
        assert_eq!(mapper.mirroring(), Mirroring::FourScreen);
    }

    #[test]
    fn test_mirror_vram_via_mapper() {
        let mapper = Mapper0::new(create_test_cartridge(1, 1, Mirroring::Vertical));
        assert_eq!(mapper.mirror_vram(0x2000), 0x000);
        assert_eq!(mapper.mirror_vram(0x2400), 0x400);
        assert_eq!(mapper.mirror_vram(0x2800), 0x000);
        assert_eq!(mapper.mirror_vram(0x2C00), 0x400);
    }
}
