//! Robot harness that plays a host view around a [`PullToRefresh`].
//!
//! The rule routes pointer events the way a view hierarchy does: every event
//! goes through [`PullToRefresh::on_intercept_event`] until it claims the
//! gesture, after which the rest of the gesture goes to
//! [`PullToRefresh::on_event`]. Frames are driven by hand on a private
//! [`FrameClock`].
//!
//! # Example
//!
//! ```
//! use taurus_testing::PullTestRule;
//!
//! let mut rule = PullTestRule::new().unwrap();
//! rule.pull(0.0, 400.0);
//! rule.release(400.0);
//! rule.run_until_idle();
//! assert_eq!(rule.refresh_count(), 1);
//! ```

use crate::fakes::{ContentRecord, FakeContentView, IndicatorRecord, RecordingIndicator};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use taurus_core::FrameClock;
use taurus_foundation::{PointerEvent, PointerEventKind, PointerId, PointerSample};
use taurus_ui::{ConfigError, PullToRefresh, PullToRefreshConfig};

/// Frame interval used by [`PullTestRule::run_until_idle`].
pub const FRAME_MILLIS: u64 = 16;

const MAX_IDLE_FRAMES: usize = 10_000;

pub struct PullTestRule {
    control: PullToRefresh,
    clock: FrameClock,
    content: FakeContentView,
    indicator: Rc<RefCell<IndicatorRecord>>,
    refreshes: Rc<Cell<usize>>,
    /// Whether the control has claimed the current gesture.
    intercepted: bool,
    /// Pointers currently down, in event order.
    pointers: Vec<PointerSample>,
    now_nanos: u64,
}

impl PullTestRule {
    /// A control at density 1.0 with content attached and a counting listener.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config(PullToRefreshConfig::default())
    }

    pub fn with_config(config: PullToRefreshConfig) -> Result<Self, ConfigError> {
        let clock = FrameClock::default();
        let indicator = RecordingIndicator::new();
        let indicator_record = indicator.record();
        let control = PullToRefresh::new(config, indicator, &clock)?;
        let content = FakeContentView::new();
        control.set_content(content.clone());

        let refreshes = Rc::new(Cell::new(0));
        let counter = refreshes.clone();
        control.set_on_refresh_listener(move || counter.set(counter.get() + 1));

        Ok(Self {
            control,
            clock,
            content,
            indicator: indicator_record,
            refreshes,
            intercepted: false,
            pointers: Vec::new(),
            now_nanos: 0,
        })
    }

    pub fn control(&self) -> &PullToRefresh {
        &self.control
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn content(&self) -> &FakeContentView {
        &self.content
    }

    pub fn content_record(&self) -> Ref<'_, ContentRecord> {
        self.content.record_ref()
    }

    pub fn indicator(&self) -> Ref<'_, IndicatorRecord> {
        self.indicator.borrow()
    }

    /// Times the refresh listener installed by the rule has fired.
    pub fn refresh_count(&self) -> usize {
        self.refreshes.get()
    }

    pub fn offset(&self) -> i32 {
        self.control.current_offset_top()
    }

    /// Whether the control has claimed the current gesture.
    pub fn is_intercepted(&self) -> bool {
        self.intercepted
    }

    /// Routes one event through intercept or touch handling; returns what
    /// the receiving handler returned.
    pub fn dispatch(&mut self, event: &PointerEvent) -> bool {
        let handled = if self.intercepted {
            self.control.on_event(event)
        } else {
            self.intercepted = self.control.on_intercept_event(event);
            self.intercepted
        };
        if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.intercepted = false;
        }
        handled
    }

    pub fn pointer_down(&mut self, y: f32) -> bool {
        self.pointers = vec![PointerSample::at_y(0, y)];
        let event = PointerEvent::new(PointerEventKind::Down, self.pointers.clone());
        self.dispatch(&event)
    }

    /// Moves the first pointer down to `y`.
    pub fn move_to(&mut self, y: f32) -> bool {
        let Some(first) = self.pointers.first().map(|sample| sample.id) else {
            return false;
        };
        self.move_pointer(first, y)
    }

    pub fn move_pointer(&mut self, id: PointerId, y: f32) -> bool {
        for sample in self.pointers.iter_mut().filter(|sample| sample.id == id) {
            sample.position.y = y;
        }
        let event = PointerEvent::new(PointerEventKind::Move, self.pointers.clone());
        self.dispatch(&event)
    }

    /// Puts down an additional pointer.
    pub fn secondary_down(&mut self, id: PointerId, y: f32) -> bool {
        self.pointers.push(PointerSample::at_y(id, y));
        let index = self.pointers.len() - 1;
        let event = PointerEvent::new(PointerEventKind::PointerDown { index }, self.pointers.clone());
        self.dispatch(&event)
    }

    /// Lifts one of several pointers.
    pub fn secondary_up(&mut self, id: PointerId) -> bool {
        let Some(index) = self.pointers.iter().position(|sample| sample.id == id) else {
            return false;
        };
        let event = PointerEvent::new(PointerEventKind::PointerUp { index }, self.pointers.clone());
        let handled = self.dispatch(&event);
        self.pointers.remove(index);
        handled
    }

    /// Lifts the last pointer at `y`.
    pub fn release(&mut self, y: f32) -> bool {
        self.end_gesture(PointerEventKind::Up, y)
    }

    pub fn cancel(&mut self, y: f32) -> bool {
        self.end_gesture(PointerEventKind::Cancel, y)
    }

    /// Down at `from_y`, then two moves to `to_y`: the first one is claimed
    /// by interception, the second one moves the content.
    pub fn pull(&mut self, from_y: f32, to_y: f32) {
        self.pointer_down(from_y);
        self.move_to(to_y);
        self.move_to(to_y);
    }

    /// Drains one frame `millis` after the previous one.
    pub fn advance_frame(&mut self, millis: u64) {
        self.now_nanos += millis * 1_000_000;
        self.clock.drain_frame_callbacks(self.now_nanos);
    }

    /// Drains frames at [`FRAME_MILLIS`] until nothing is scheduled.
    /// Returns the number of frames drained.
    pub fn run_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.clock.has_frame_callbacks() && frames < MAX_IDLE_FRAMES {
            self.advance_frame(FRAME_MILLIS);
            frames += 1;
        }
        if frames == MAX_IDLE_FRAMES {
            log::warn!("frame clock still busy after {frames} frames");
        }
        frames
    }

    fn end_gesture(&mut self, kind: PointerEventKind, y: f32) -> bool {
        let Some(sample) = self.pointers.last_mut() else {
            return false;
        };
        sample.position.y = y;
        let event = PointerEvent::new(kind, self.pointers.clone());
        self.pointers.clear();
        self.dispatch(&event)
    }
}
