//! Density-independent lengths.

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    /// Whole device pixels at `density`, rounded to nearest.
    pub fn round_to_px(&self, density: f32) -> i32 {
        (self.0 * density).round() as i32
    }
}
