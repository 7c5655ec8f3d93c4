//! Foundation layer for Taurus: pointer input values, the pull gesture
//! tracker and the tension curve that turns finger travel into an offset.

pub mod gesture_constants;
pub mod input;
pub mod pull_curve;

pub use gesture_constants::*;
pub use input::gestures::{DragSession, DragUpdate, GestureTracker};
pub use input::{PointerEvent, PointerEventKind, PointerId, PointerSample};
pub use pull_curve::{max_pull_offset, pull_offset, tension_percent, PullOffset};
pub use taurus_ui_graphics::{Dp, Point};

pub mod prelude {
    pub use crate::gesture_constants::{DEFAULT_TOUCH_SLOP, DRAG_MAX_DISTANCE, DRAG_RATE};
    pub use crate::input::gestures::{DragSession, DragUpdate, GestureTracker};
    pub use crate::input::{PointerEvent, PointerEventKind, PointerId, PointerSample};
    pub use crate::pull_curve::{pull_offset, PullOffset};
}
