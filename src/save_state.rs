// Save states
//
// Snapshot and restore of the machine state, serialized as JSON. The
// snapshot captures everything needed to resume execution at an
// instruction boundary: CPU registers, internal RAM, PRG-RAM, and the
// PPU's registers and memories. The in-flight background shifters are
// not captured; they refill within one 8-dot fetch group.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::clock::Clock;

/// PRG-RAM window captured through the cartridge
const PRG_RAM_RANGE: std::ops::Range<u16> = 0x6000..0x8000;

/// Errors from save-state operations
#[derive(Debug)]
pub enum SaveStateError {
    /// I/O failure reading or writing the state file
    Io(io::Error),

    /// Serialization or deserialization failure
    Serialization(serde_json::Error),
}

impl std::fmt::Display for SaveStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveStateError::Io(e) => write!(f, "save state I/O error: {}", e),
            SaveStateError::Serialization(e) => write!(f, "save state serialization error: {}", e),
        }
    }
}

impl std::error::Error for SaveStateError {}

impl From<io::Error> for SaveStateError {
    fn from(e: io::Error) -> Self {
        SaveStateError::Io(e)
    }
}

impl From<serde_json::Error> for SaveStateError {
    fn from(e: serde_json::Error) -> Self {
        SaveStateError::Serialization(e)
    }
}

/// CPU register snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuSnapshot {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    pub cycles: u64,
}

/// PPU snapshot: registers, loopy state, and memories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpuSnapshot {
    pub ppuctrl: u8,
    pub ppumask: u8,
    pub ppustatus: u8,
    pub oam_addr: u8,
    pub v: u16,
    pub t: u16,
    pub fine_x: u8,
    pub write_latch: bool,
    pub read_buffer: u8,
    pub vram: Vec<u8>,
    pub palette_ram: Vec<u8>,
    pub oam: Vec<u8>,
    pub dot: u16,
    pub scanline: u16,
    pub frame: u64,
}

/// A complete machine snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveState {
    pub cpu: CpuSnapshot,
    pub ram: Vec<u8>,
    pub prg_ram: Vec<u8>,
    pub ppu: PpuSnapshot,
}

impl SaveState {
    /// Capture the machine state at an instruction boundary.
    ///
    /// Takes `&mut Clock` because RAM and PRG-RAM are read through the bus.
    pub fn capture(clock: &mut Clock) -> SaveState {
        let cpu = CpuSnapshot {
            a: clock.cpu.a,
            x: clock.cpu.x,
            y: clock.cpu.y,
            sp: clock.cpu.sp,
            pc: clock.cpu.pc,
            status: clock.cpu.status,
            cycles: clock.cpu.cycles,
        };

        let ram: Vec<u8> = (0x0000..0x0800).map(|addr| clock.bus.read(addr)).collect();
        let prg_ram: Vec<u8> = PRG_RAM_RANGE.map(|addr| clock.bus.read(addr)).collect();

        let ppu = &clock.bus.ppu;
        let ppu = PpuSnapshot {
            ppuctrl: ppu.ppuctrl,
            ppumask: ppu.ppumask,
            ppustatus: ppu.ppustatus,
            oam_addr: ppu.oam_addr,
            v: ppu.v,
            t: ppu.t,
            fine_x: ppu.fine_x,
            write_latch: ppu.write_latch,
            read_buffer: ppu.read_buffer,
            vram: ppu.vram.to_vec(),
            palette_ram: ppu.palette_ram.to_vec(),
            oam: ppu.oam.to_vec(),
            dot: ppu.dot,
            scanline: ppu.scanline,
            frame: ppu.frame,
        };

        SaveState {
            cpu,
            ram,
            prg_ram,
            ppu,
        }
    }

    /// Restore this snapshot into a machine built from the same ROM
    pub fn restore(&self, clock: &mut Clock) {
        clock.cpu.a = self.cpu.a;
        clock.cpu.x = self.cpu.x;
        clock.cpu.y = self.cpu.y;
        clock.cpu.sp = self.cpu.sp;
        clock.cpu.pc = self.cpu.pc;
        clock.cpu.status = self.cpu.status;
        clock.cpu.cycles = self.cpu.cycles;

        for (offset, &value) in self.ram.iter().enumerate() {
            clock.bus.write(offset as u16, value);
        }
        for (offset, &value) in self.prg_ram.iter().enumerate() {
            clock.bus.write(PRG_RAM_RANGE.start + offset as u16, value);
        }

        let ppu = &mut clock.bus.ppu;
        ppu.ppuctrl = self.ppu.ppuctrl;
        ppu.ppumask = self.ppu.ppumask;
        ppu.ppustatus = self.ppu.ppustatus;
        ppu.oam_addr = self.ppu.oam_addr;
        ppu.v = self.ppu.v;
        ppu.t = self.ppu.t;
        ppu.fine_x = self.ppu.fine_x;
        ppu.write_latch = self.ppu.write_latch;
        ppu.read_buffer = self.ppu.read_buffer;
        ppu.vram.copy_from_slice(&self.ppu.vram);
        ppu.palette_ram.copy_from_slice(&self.ppu.palette_ram);
        ppu.oam.copy_from_slice(&self.ppu.oam);
        ppu.dot = self.ppu.dot;
        ppu.scanline = self.ppu.scanline;
        ppu.frame = self.ppu.frame;
    }

    /// Write this snapshot to `<dir>/state_<slot>.json`
    pub fn save_to_file(&self, slot: u8, dir: &Path) -> Result<PathBuf, SaveStateError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("state_{}.json", slot));
        let json = serde_json::to_string(self)?;
        fs::write(&path, json)?;
        debug!("save state written to {}", path.display());
        Ok(path)
    }

    /// Load a snapshot from `<dir>/state_<slot>.json`
    pub fn load_from_file(slot: u8, dir: &Path) -> Result<SaveState, SaveStateError> {
        let path = dir.join(format!("state_{}.json", slot));
        let json = fs::read_to_string(&path)?;
        debug!("save state read from {}", path.display());
        Ok(serde_json::from_str(&json)?)
    }
}
