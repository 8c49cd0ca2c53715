// Clock module - drives the CPU and PPU at the fixed 1:3 ratio
//
// The clock owns the CPU and the bus (which owns the PPU and cartridge),
// so the two sides never alias: the CPU borrows the bus per instruction,
// then the clock runs the PPU for three dots per consumed CPU cycle and
// forwards any NMI edge at the next instruction boundary.

use log::trace;

use crate::bus::Bus;
use crate::cartridge::{mappers::create_mapper, Cartridge, CartridgeError};
use crate::config::EmulatorConfig;
use crate::cpu::{Cpu, CpuError};

/// The system clock and component aggregate.
///
/// Constructed from an iNES image; one `run_frame` call emulates exactly
/// one video frame (262 scanlines, ~29,781 CPU cycles) and returns the
/// finished RGBA buffer.
pub struct Clock {
    pub cpu: Cpu,
    pub bus: Bus,
    config: EmulatorConfig,
}

impl Clock {
    /// Build a machine from a raw iNES image and reset it.
    ///
    /// # Errors
    ///
    /// Propagates iNES parse failures and unsupported mapper ids.
    pub fn new(rom: &[u8]) -> Result<Self, CartridgeError> {
        Self::with_config(rom, EmulatorConfig::default())
    }

    /// Build a machine with an explicit configuration.
    pub fn with_config(rom: &[u8], config: EmulatorConfig) -> Result<Self, CartridgeError> {
        let cartridge = Cartridge::from_bytes(rom)?;
        let mapper = create_mapper(cartridge)?;

        let mut clock = Clock {
            cpu: Cpu::new(),
            bus: Bus::new(mapper),
            config,
        };
        clock.cpu.reset(&mut clock.bus);
        Ok(clock)
    }

    /// Reset the machine: CPU re-reads the reset vector, pending interrupts
    /// clear, and the PPU returns to its power-on state.
    pub fn reset(&mut self) {
        self.bus.ppu.reset();
        self.cpu.reset(&mut self.bus);
    }

    /// Run until exactly one frame has elapsed and return the RGBA buffer.
    ///
    /// Per iteration: forward a pending PPU NMI edge to the CPU, execute one
    /// CPU instruction (or interrupt service), then run the PPU three dots
    /// per consumed CPU cycle. OAM DMA stalls are charged the same way. The
    /// frame boundary is the PPU frame counter, which increments exactly
    /// once per 262 scanlines.
    ///
    /// # Errors
    ///
    /// `CpuError::UnimplementedOpcode` is fatal to the session; the host is
    /// expected to stop calling `run_frame`.
    pub fn run_frame(&mut self) -> Result<&[u8], CpuError> {
        let frame = self.bus.ppu.frame_count();

        while self.bus.ppu.frame_count() == frame {
            if self.bus.ppu.take_nmi() {
                self.cpu.set_nmi_pending();
            }

            if self.config.debug.trace_cpu {
                trace!("{}", self.cpu.trace(&mut self.bus));
            }

            let cycles = self.cpu.step(&mut self.bus)? as u32;
            let cycles = cycles + self.bus.take_dma_stall();
            self.bus.tick(cycles);
        }

        Ok(self.bus.ppu.frame())
    }

    /// The most recently completed RGBA frame buffer
    pub fn frame(&self) -> &[u8] {
        self.bus.ppu.frame()
    }

    /// The active configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }
}
