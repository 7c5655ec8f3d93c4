//! Frame callback registry.
//!
//! Callbacks are one-shot: each registration fires on the next drained frame
//! and is then forgotten. Repeating animations re-register from inside their
//! own callback, which lands them on the following frame.

use crate::platform::{DefaultScheduler, FrameScheduler};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct FrameClockInner {
    scheduler: Rc<dyn FrameScheduler>,
    callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_id: Cell<FrameCallbackId>,
}

impl FrameClockInner {
    fn register(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let was_idle = {
            let mut callbacks = self.callbacks.borrow_mut();
            let was_idle = callbacks.is_empty();
            callbacks.push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
            was_idle
        };
        if was_idle {
            self.scheduler.schedule_frame();
        }
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        let mut callbacks = self.callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
    }
}

/// Shared handle to the frame callback registry. Cloning is cheap.
#[derive(Clone)]
pub struct FrameClock {
    inner: Rc<FrameClockInner>,
}

impl FrameClock {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            inner: Rc::new(FrameClockInner {
                scheduler,
                callbacks: RefCell::new(VecDeque::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    /// Registers a callback for the next frame. Dropping the returned
    /// registration cancels it.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.inner.register(Box::new(callback));
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Runs every callback registered before this call with `frame_time_nanos`.
    ///
    /// Callbacks registered while draining are kept for the next frame.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let pending: Vec<Box<dyn FnOnce(u64) + 'static>> = {
            let mut callbacks = self.inner.callbacks.borrow_mut();
            callbacks
                .drain(..)
                .filter_map(|mut entry| entry.callback.take())
                .collect()
        };
        log::trace!(
            "draining {} frame callbacks at {}ns",
            pending.len(),
            frame_time_nanos
        );
        for callback in pending {
            callback(frame_time_nanos);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.inner.callbacks.borrow().is_empty()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Rc::new(DefaultScheduler))
    }
}

pub struct FrameCallbackRegistration {
    clock: Weak<FrameClockInner>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(clock) = self.clock.upgrade() {
                clock.cancel(id);
            }
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
