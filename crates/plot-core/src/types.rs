// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (raster density, default sizes, paddings).

/// Raster density for saved figures, in pixels per plotting inch.
pub const DPI: f64 = 150.0;

/// Default figure width in plotting inches.
pub const DEFAULT_WIDTH_IN: f64 = 10.0;
/// Default figure height in plotting inches.
pub const DEFAULT_HEIGHT_IN: f64 = 6.0;

/// Default surface width in pixels (DEFAULT_WIDTH_IN at DPI).
pub const WIDTH: i32 = 1500;
/// Default surface height in pixels (DEFAULT_HEIGHT_IN at DPI).
pub const HEIGHT: i32 = 900;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(96, 32, 56, 72)
    }
}
