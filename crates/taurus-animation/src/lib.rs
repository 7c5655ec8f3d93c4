//! Animation system for Taurus
//!
//! Easing curves, tween specifications and a frame-clock driven tween runner.

mod animation;
mod tween;

pub use animation::{AnimationSpec, Easing, Lerp};
pub use tween::{TweenAnimation, TweenFrame};

pub mod prelude {
    pub use crate::animation::{AnimationSpec, Easing, Lerp};
    pub use crate::tween::{TweenAnimation, TweenFrame};
}
