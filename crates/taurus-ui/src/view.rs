//! Collaborators the control drives.
//!
//! Implementations are called while the control holds its internal borrow,
//! so they must not call back into the control.

use std::rc::Rc;
use taurus_ui_graphics::{Rect, Size};

/// The scrollable content wrapped by the control.
pub trait ContentView {
    /// Whether the content can still scroll towards its top. A pull only
    /// starts when this is `false`.
    fn can_scroll_up(&self) -> bool;

    /// Current top edge in device pixels.
    fn top(&self) -> i32;

    /// Moves the content vertically by `dy` pixels.
    fn offset_top_and_bottom(&mut self, dy: i32);

    fn measure(&mut self, available: Size);

    fn layout(&mut self, frame: Rect);
}

/// The refresh indicator drawn behind the content.
pub trait RefreshIndicator {
    /// Pull progress; 1.0 is a full pull, larger values are overscroll.
    fn set_percent(&mut self, percent: f32);

    fn start(&mut self);

    fn stop(&mut self);

    fn set_end_of_refreshing(&mut self, end_of_refreshing: bool);

    /// Moves the indicator in lockstep with the content.
    fn offset_top_and_bottom(&mut self, dy: i32);

    fn measure(&mut self, _available: Size) {}

    fn layout(&mut self, _frame: Rect) {}
}

/// Called once a user-triggered refresh has settled into place.
pub type OnRefreshListener = Rc<dyn Fn()>;
