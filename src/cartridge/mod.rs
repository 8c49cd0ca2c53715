// Cartridge module - iNES parsing and the mapper abstraction
//
// A cartridge enters the system as a raw iNES byte image. Parsing produces a
// `Cartridge` (the decoded image: PRG/CHR data plus header attributes), and
// `mappers::create_mapper` wraps it in a `Mapper` trait object that owns the
// cartridge-side memories (PRG-RAM, CHR-RAM) and serves all bus traffic.
//
// # iNES layout
//
// ```text
// bytes 0-3   magic "NES\x1A"
// byte  4     PRG bank count (16 KiB units)
// byte  5     CHR bank count (8 KiB units, 0 = cartridge uses CHR-RAM)
// byte  6     flags: mirroring, battery, trainer, four-screen, mapper low nibble
// byte  7     flags: mapper high nibble
// bytes 8-15  ignored by this core
// body        optional 512-byte trainer, PRG banks, CHR banks
// ```

pub mod mappers;

use log::info;

/// Size of one PRG-ROM bank in bytes (16 KiB)
pub const PRG_BANK_SIZE: usize = 16 * 1024;

/// Size of one CHR bank in bytes (8 KiB)
pub const CHR_BANK_SIZE: usize = 8 * 1024;

/// Size of the cartridge PRG-RAM window at $6000-$7FFF (8 KiB)
pub const PRG_RAM_SIZE: usize = 8 * 1024;

/// iNES magic number: "NES" followed by MS-DOS EOF
const INES_MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

/// Length of the iNES header in bytes
const HEADER_LEN: usize = 16;

/// Length of the optional trainer blob between header and PRG data
const TRAINER_LEN: usize = 512;

/// Errors produced while constructing a cartridge or accessing CHR space
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    /// The image does not begin with the iNES magic number
    InvalidHeader,
    /// The image is shorter than the header-declared PRG/CHR/trainer lengths
    Truncated { expected: usize, actual: usize },
    /// The mapper id in the header is not implemented
    UnsupportedMapper(u8),
    /// A CHR access was made outside the pattern-table window (< $2000)
    InvalidChrAddress(u16),
}

impl std::fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartridgeError::InvalidHeader => {
                write!(f, "not an iNES image (bad magic number)")
            }
            CartridgeError::Truncated { expected, actual } => {
                write!(
                    f,
                    "iNES image truncated: header declares {} bytes, got {}",
                    expected, actual
                )
            }
            CartridgeError::UnsupportedMapper(num) => {
                write!(f, "mapper {} is not supported", num)
            }
            CartridgeError::InvalidChrAddress(addr) => {
                write!(f, "CHR address ${:04X} is outside $0000-$1FFF", addr)
            }
        }
    }
}

impl std::error::Error for CartridgeError {}

/// Nametable mirroring arrangement
///
/// The PPU address space exposes four 1 KiB nametables at $2000-$2FFF, but
/// the console only has 2 KiB of physical VRAM. The cartridge decides how the
/// four logical tables fold onto the physical banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    /// Tables {0,1} share bank A, {2,3} share bank B ($2000=$2400)
    Horizontal,
    /// Tables {0,2} share bank A, {1,3} share bank B ($2000=$2800)
    Vertical,
    /// All four tables collapse onto bank A
    SingleScreenLow,
    /// All four tables collapse onto bank B
    SingleScreenHigh,
    /// No folding; the cartridge supplies the two extra banks
    FourScreen,
}

impl Mirroring {
    /// Fold a nametable address ($2000-$2FFF) onto a physical VRAM offset.
    ///
    /// This is a pure function of the mirroring mode and the address. The
    /// returned offset is in 0..0x1000; modes other than `FourScreen` only
    /// ever produce offsets below 0x800 (the console's 2 KiB).
    pub fn mirror_vram(self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / 0x400;
        let offset = addr & 0x3FF;

        let physical = match self {
            Mirroring::Horizontal => table / 2,
            Mirroring::Vertical => table % 2,
            Mirroring::SingleScreenLow => 0,
            Mirroring::SingleScreenHigh => 1,
            Mirroring::FourScreen => table,
        };

        physical * 0x400 + offset
    }
}

/// A decoded iNES image
///
/// Holds the raw PRG/CHR data and the header attributes. This is the input to
/// the mapper factory; the mapper takes ownership of the data and serves it
/// through the `Mapper` trait.
pub struct Cartridge {
    /// PRG-ROM data (bank count × 16 KiB)
    pub prg_rom: Vec<u8>,
    /// CHR-ROM data (bank count × 8 KiB); empty when the cartridge uses CHR-RAM
    pub chr_rom: Vec<u8>,
    /// Number of 16 KiB PRG banks declared by the header
    pub prg_banks: u8,
    /// Number of 8 KiB CHR banks declared by the header (0 = CHR-RAM)
    pub chr_banks: u8,
    /// Mapper id: (flag7 & 0xF0) | (flag6 >> 4)
    pub mapper: u8,
    /// Nametable mirroring arrangement
    pub mirroring: Mirroring,
    /// Cartridge has battery-backed PRG-RAM
    pub has_battery: bool,
    /// Image carried a 512-byte trainer (skipped during parsing)
    pub has_trainer: bool,
}

impl Cartridge {
    /// Parse a cartridge from a raw iNES byte image.
    ///
    /// # Errors
    ///
    /// - `InvalidHeader` when the first four bytes are not `NES\x1A`
    /// - `Truncated` when the header-declared trainer/PRG/CHR lengths exceed
    ///   the slice
    pub fn from_bytes(data: &[u8]) -> Result<Cartridge, CartridgeError> {
        if data.len() < HEADER_LEN || data[0..4] != INES_MAGIC {
            return Err(CartridgeError::InvalidHeader);
        }

        let prg_banks = data[4];
        let chr_banks = data[5];
        let flags6 = data[6];
        let flags7 = data[7];

        let has_trainer = flags6 & 0x04 != 0;
        let has_battery = flags6 & 0x02 != 0;
        let four_screen = flags6 & 0x08 != 0;
        let mapper = (flags7 & 0xF0) | (flags6 >> 4);

        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if flags6 & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let trainer_len = if has_trainer { TRAINER_LEN } else { 0 };
        let prg_len = prg_banks as usize * PRG_BANK_SIZE;
        let chr_len = chr_banks as usize * CHR_BANK_SIZE;

        let expected = HEADER_LEN + trainer_len + prg_len + chr_len;
        if data.len() < expected {
            return Err(CartridgeError::Truncated {
                expected,
                actual: data.len(),
            });
        }

        let prg_start = HEADER_LEN + trainer_len;
        let chr_start = prg_start + prg_len;

        info!(
            "iNES image: {} x 16K PRG, {} x 8K CHR, mapper {}, {:?} mirroring{}{}",
            prg_banks,
            chr_banks,
            mapper,
            mirroring,
            if has_battery { ", battery" } else { "" },
            if has_trainer { ", trainer" } else { "" },
        );

        Ok(Cartridge {
            prg_rom: data[prg_start..prg_start + prg_len].to_vec(),
            chr_rom: data[chr_start..chr_start + chr_len].to_vec(),
            prg_banks,
            chr_banks,
            mapper,
            mirroring,
            has_battery,
            has_trainer,
        })
    }
}

/// Interface between the bus/PPU and the cartridge hardware.
///
/// Implementations own the cartridge memories and decide how CPU and PPU
/// addresses map onto them. Adding a mapper means adding an implementation
/// and a factory arm; callers never change.
pub trait Mapper {
    /// Read from CPU cartridge space ($4020-$FFFF).
    ///
    /// Unmapped addresses read as 0.
    fn read_prg(&self, addr: u16) -> u8;

    /// Write to CPU cartridge space ($4020-$FFFF).
    ///
    /// Writes to read-only regions are dropped; mappers with registers decode
    /// them here.
    fn write_prg(&mut self, addr: u16, value: u8);

    /// Read from the pattern-table window.
    ///
    /// # Errors
    ///
    /// `InvalidChrAddress` when `addr` is not below $2000.
    fn read_chr(&self, addr: u16) -> Result<u8, CartridgeError>;

    /// Write to the pattern-table window. CHR-ROM writes are dropped.
    ///
    /// # Errors
    ///
    /// `InvalidChrAddress` when `addr` is not below $2000.
    fn write_chr(&mut self, addr: u16, value: u8) -> Result<(), CartridgeError>;

    /// Current nametable mirroring arrangement.
    ///
    /// Fixed for simple cartridges; mappers with a mirroring register report
    /// the live value here.
    fn mirroring(&self) -> Mirroring;

    /// Fold a nametable address ($2000-$2FFF) onto a physical VRAM offset.
    fn mirror_vram(&self, addr: u16) -> usize {
        self.mirroring().mirror_vram(addr)
    }
}
