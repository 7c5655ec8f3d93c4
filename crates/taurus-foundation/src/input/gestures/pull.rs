//! Vertical pull gesture recogniser.
//!
//! Tracks one active pointer from down to up, confirms the drag once the
//! finger passes the touch slop, and maps its travel onto the pull curve.
//! Preconditions that depend on the surrounding control (enabled, content
//! scrolled to top, not refreshing) are checked by the caller.

use crate::gesture_constants::DRAG_RATE;
use crate::input::types::{PointerEvent, PointerId};
use crate::pull_curve::pull_offset;

/// Transient state of one pull, alive between pointer down and up/cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub active_pointer_id: PointerId,
    pub initial_y: f32,
    pub is_dragging: bool,
    /// Last computed drag percent; negative while the finger is above its
    /// starting point.
    pub drag_percent: f32,
    pub applied_offset: i32,
}

/// Visual update produced by a confirmed drag move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    pub scroll_top: f32,
    pub percent: f32,
    pub target_offset: i32,
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    touch_slop: f32,
    total_drag_distance: i32,
    session: Option<DragSession>,
}

impl GestureTracker {
    pub fn new(touch_slop: f32, total_drag_distance: i32) -> Self {
        Self {
            touch_slop,
            total_drag_distance,
            session: None,
        }
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn total_drag_distance(&self) -> i32 {
        self.total_drag_distance
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some_and(|session| session.is_dragging)
    }

    pub fn active_pointer_id(&self) -> Option<PointerId> {
        self.session.map(|session| session.active_pointer_id)
    }

    /// Starts a session on the event's first pointer, replacing any previous one.
    ///
    /// Returns `false` when the event carries no pointer.
    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> bool {
        let Some(sample) = event.pointer(0) else {
            self.session = None;
            return false;
        };
        self.session = Some(DragSession {
            active_pointer_id: sample.id,
            initial_y: sample.position.y,
            is_dragging: false,
            drag_percent: 0.0,
            applied_offset: 0,
        });
        log::trace!(
            "pull session started: pointer {} at y={}",
            sample.id,
            sample.position.y
        );
        true
    }

    /// Confirms the drag once the active pointer passes the touch slop,
    /// without producing a visual update. Returns whether the drag is confirmed.
    pub fn observe_move(&mut self, event: &PointerEvent) -> bool {
        let touch_slop = self.touch_slop;
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(y) = event.y_of(session.active_pointer_id) else {
            log::trace!("move without active pointer {}", session.active_pointer_id);
            return session.is_dragging;
        };
        let y_diff = y - session.initial_y;
        if y_diff > touch_slop && !session.is_dragging {
            session.is_dragging = true;
            log::debug!("pull drag confirmed: y_diff={y_diff} slop={touch_slop}");
        }
        session.is_dragging
    }

    /// Handles a move of the active pointer.
    ///
    /// Returns `None` while the drag is unconfirmed, when the active pointer
    /// is missing from the event, or when the finger is above its start.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> Option<DragUpdate> {
        if !self.observe_move(event) {
            return None;
        }
        let total = self.total_drag_distance as f32;
        let session = self.session.as_mut()?;
        let y = event.y_of(session.active_pointer_id)?;
        let y_diff = y - session.initial_y;
        session.drag_percent = y_diff * DRAG_RATE / total;

        let pull = pull_offset(y_diff, total)?;
        session.applied_offset = pull.target_offset;
        log::trace!(
            "pull move: y={y} y_diff={y_diff} scroll_top={} percent={} tension={} extra_move={} target={}",
            pull.scroll_top,
            pull.percent,
            pull.tension_percent,
            pull.extra_move,
            pull.target_offset
        );
        Some(DragUpdate {
            scroll_top: pull.scroll_top,
            percent: pull.percent,
            target_offset: pull.target_offset,
        })
    }

    /// A further pointer went down mid-drag; it becomes the active pointer.
    pub fn on_secondary_pointer_down(&mut self, event: &PointerEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(id) = event.action_pointer_id() {
            session.active_pointer_id = id;
        }
    }

    /// A non-primary pointer lifted. If it was the active one, tracking moves
    /// to a pointer that is still down.
    pub fn on_secondary_pointer_up(&mut self, event: &PointerEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let index = event.action_index();
        let Some(lifted) = event.pointer(index) else {
            return;
        };
        if lifted.id != session.active_pointer_id {
            return;
        }
        let new_index = if index == 0 { 1 } else { 0 };
        if let Some(sample) = event.pointer(new_index) {
            log::trace!(
                "active pointer {} lifted, tracking pointer {}",
                lifted.id,
                sample.id
            );
            session.active_pointer_id = sample.id;
        }
    }

    /// Ends the session on pointer up or cancel.
    ///
    /// Returns the release overscroll `(y - initial_y) * DRAG_RATE`, or `None`
    /// when there was no session or the active pointer is missing.
    pub fn on_pointer_up(&mut self, event: &PointerEvent) -> Option<f32> {
        let session = self.session.take()?;
        let y = event.y_of(session.active_pointer_id)?;
        Some((y - session.initial_y) * DRAG_RATE)
    }

    /// Drops the session without evaluating a release.
    pub fn reset(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
#[path = "../../tests/pull_gesture_tests.rs"]
mod tests;
