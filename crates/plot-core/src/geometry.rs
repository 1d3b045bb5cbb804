// File: crates/plot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for layout math.

/// Axis-aligned rectangle in mathematical coordinates (y grows upward,
/// so `top >= bottom` for a non-empty rect).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    /// Unit square [0,1] x [0,1].
    pub const fn unit() -> Self {
        Self { left: 0.0, top: 1.0, right: 1.0, bottom: 0.0 }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.top - self.bottom }
    /// True when (x, y) lies inside or on the boundary.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.bottom && y <= self.top
    }
}
