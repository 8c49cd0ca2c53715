// Configuration management
//
// User-facing emulator settings with TOML persistence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default configuration file path
const CONFIG_FILE: &str = "emulator_config.toml";

/// Emulator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmulatorConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Debug settings
    pub debug: DebugConfig,

    /// Save state settings
    pub save_state: SaveStateConfig,

    /// Screenshot settings
    pub screenshot: ScreenshotConfig,
}

/// Video configuration (consumed by the host; the core only renders)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Window scale factor
    pub scale: u32,

    /// Target frames per second (60 for NTSC)
    pub fps: u32,

    /// Enable VSync in the host
    pub vsync: bool,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DebugConfig {
    /// Emit a per-instruction trace line at `log::trace!` level
    pub trace_cpu: bool,
}

/// Save state configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveStateConfig {
    /// Number of save slots
    pub slots: u8,

    /// Directory save states are written to
    pub save_directory: PathBuf,
}

/// Screenshot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotConfig {
    /// Directory screenshots are written to
    pub screenshot_directory: PathBuf,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            scale: 3,
            fps: 60,
            vsync: true,
        }
    }
}

impl Default for SaveStateConfig {
    fn default() -> Self {
        SaveStateConfig {
            slots: 10,
            save_directory: PathBuf::from("saves"),
        }
    }
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        ScreenshotConfig {
            screenshot_directory: PathBuf::from("screenshots"),
        }
    }
}

impl EmulatorConfig {
    /// Load the configuration from the default path, falling back to
    /// defaults when the file is missing or malformed.
    pub fn load_or_default() -> Self {
        Self::load(Path::new(CONFIG_FILE)).unwrap_or_default()
    }

    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save the configuration as TOML
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, contents)
    }
}
