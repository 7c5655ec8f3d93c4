//! Easing curves and tween specifications.

/// Linear interpolation towards a target value.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Maps linear progress in [0, 1] to interpolated time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Starts fast and decelerates: `1 - (1 - t)^(2 * factor)`.
    ///
    /// A factor of 1.0 is the plain quadratic ease-out; larger factors
    /// front-load more of the motion.
    Decelerate { factor: f32 },
}

impl Easing {
    pub const fn decelerate(factor: f32) -> Self {
        Easing::Decelerate { factor }
    }

    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => fraction,
            Easing::Decelerate { factor } => {
                let remaining = 1.0 - fraction;
                if factor == 1.0 {
                    1.0 - remaining * remaining
                } else {
                    1.0 - remaining.powf(2.0 * factor)
                }
            }
        }
    }
}

/// Duration and easing of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
