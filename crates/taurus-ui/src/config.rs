//! Construction-time configuration.

use std::fmt;
use taurus_foundation::{DEFAULT_TOUCH_SLOP, DRAG_MAX_DISTANCE};
use taurus_ui_graphics::Dp;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullToRefreshConfig {
    /// Display density (device pixels per logical pixel).
    pub density: f32,
    /// Touch slop in device pixels.
    pub touch_slop: f32,
    /// Pull distance that arms a refresh, before density scaling.
    pub drag_max_distance: Dp,
}

impl PullToRefreshConfig {
    /// Config for a display density, with the touch slop scaled to match.
    pub fn for_density(density: f32) -> Self {
        Self {
            density,
            touch_slop: DEFAULT_TOUCH_SLOP * density,
            drag_max_distance: DRAG_MAX_DISTANCE,
        }
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_drag_max_distance(mut self, distance: Dp) -> Self {
        self.drag_max_distance = distance;
        self
    }

    /// Total drag distance in device pixels, rounded to nearest.
    pub fn total_drag_distance(&self) -> i32 {
        self.drag_max_distance.round_to_px(self.density)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(ConfigError::InvalidTouchSlop(self.touch_slop));
        }
        let distance = self.drag_max_distance.0;
        if !distance.is_finite() || self.total_drag_distance() <= 0 {
            return Err(ConfigError::InvalidDragDistance(distance));
        }
        Ok(())
    }
}

impl Default for PullToRefreshConfig {
    fn default() -> Self {
        Self::for_density(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidDensity(f32),
    InvalidTouchSlop(f32),
    InvalidDragDistance(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDensity(density) => {
                write!(f, "display density must be positive and finite, got {density}")
            }
            ConfigError::InvalidTouchSlop(slop) => {
                write!(f, "touch slop must be non-negative and finite, got {slop}")
            }
            ConfigError::InvalidDragDistance(distance) => {
                write!(
                    f,
                    "drag distance must scale to at least one pixel, got {distance}dp"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
