//! Pure math/data for layout & units in Taurus
//!
//! Geometry primitives and density-aware unit types shared by the
//! gesture, animation and control crates.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::unit::Dp;
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
