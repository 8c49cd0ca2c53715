// famicore - a cycle-oriented NES emulation core
//
// Co-simulates a 6502 CPU and a dot-accurate PPU over a shared bus, fed by
// an iNES cartridge parser. The host hands `Clock::new` a ROM image and
// calls `run_frame` once per display frame; each call returns a finished
// 256x240 RGBA buffer.

// Public modules
pub mod bus;
pub mod cartridge;
pub mod clock;
pub mod config;
pub mod cpu;
pub mod ppu;
pub mod save_state;
pub mod screenshot;

// Re-export the main types
pub use bus::Bus;
pub use cartridge::{Cartridge, CartridgeError, Mapper, Mirroring};
pub use clock::Clock;
pub use config::EmulatorConfig;
pub use cpu::{Cpu, CpuError};
pub use ppu::{Ppu, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use save_state::{SaveState, SaveStateError};
pub use screenshot::{save_screenshot, ScreenshotError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _config = EmulatorConfig::default();
    }
}
