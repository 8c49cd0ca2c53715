// PPU constants

/// Nametable VRAM size in bytes.
/// 4 KiB so the four-screen identity mapping has physical backing; every
/// other mirroring mode only indexes the low 2 KiB.
pub(super) const VRAM_SIZE: usize = 4096;

/// Palette RAM size in bytes
pub(super) const PALETTE_SIZE: usize = 32;

/// Primary OAM size in bytes (64 sprites x 4 bytes)
pub(super) const OAM_SIZE: usize = 256;

/// Maximum sprites the hardware renders per scanline
pub(super) const SPRITES_PER_LINE: usize = 8;

/// Screen width in pixels
pub const SCREEN_WIDTH: usize = 256;

/// Screen height in pixels
pub const SCREEN_HEIGHT: usize = 240;

/// Bytes per output pixel (RGBA8)
pub(super) const BYTES_PER_PIXEL: usize = 4;

/// Output frame buffer size in bytes
pub(super) const FRAME_BUFFER_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT * BYTES_PER_PIXEL;

// ========================================
// PPU Timing Constants (NTSC)
// ========================================

/// Dots per scanline
pub(super) const DOTS_PER_SCANLINE: u16 = 341;

/// Scanlines per frame
pub(super) const SCANLINES_PER_FRAME: u16 = 262;

/// First visible scanline
pub(super) const FIRST_VISIBLE_SCANLINE: u16 = 0;

/// Last visible scanline
pub(super) const LAST_VISIBLE_SCANLINE: u16 = 239;

/// Post-render scanline (idle)
pub(super) const POSTRENDER_SCANLINE: u16 = 240;

/// First VBlank scanline; the VBlank flag is raised at dot 1
pub(super) const FIRST_VBLANK_SCANLINE: u16 = 241;

/// Last VBlank scanline
pub(super) const LAST_VBLANK_SCANLINE: u16 = 260;

/// Pre-render scanline (the "-1" line); flags clear at dot 1
pub(super) const PRERENDER_SCANLINE: u16 = 261;
