// Screenshots
//
// Dumps the RGBA frame buffer to a timestamped PNG file.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ppu::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Errors from screenshot operations
#[derive(Debug)]
pub enum ScreenshotError {
    /// I/O error
    Io(io::Error),

    /// PNG encoding error
    PngEncoding(png::EncodingError),
}

impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::Io(e) => write!(f, "I/O error: {}", e),
            ScreenshotError::PngEncoding(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<io::Error> for ScreenshotError {
    fn from(e: io::Error) -> Self {
        ScreenshotError::Io(e)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(e: png::EncodingError) -> Self {
        ScreenshotError::PngEncoding(e)
    }
}

/// Save an RGBA frame buffer as `screenshot_<timestamp>.png` under `dir`.
///
/// Returns the path of the written file.
pub fn save_screenshot(frame: &[u8], dir: &Path) -> Result<PathBuf, ScreenshotError> {
    fs::create_dir_all(dir)?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("screenshot_{}.png", timestamp));

    write_png(&path, frame)?;
    debug!("screenshot written to {}", path.display());
    Ok(path)
}

/// Encode the frame as a PNG at the given path
fn write_png(path: &Path, frame: &[u8]) -> Result<(), ScreenshotError> {
    let file = fs::File::create(path)?;
    let writer = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(frame)?;
    Ok(())
}
