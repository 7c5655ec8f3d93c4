//! Frame-driven tween runner.
//!
//! A [`TweenAnimation`] samples its [`AnimationSpec`] once per frame from the
//! shared [`FrameClock`] and hands the eased progress to a callback. The final
//! frame is delivered with `finished == true` and `interpolated_time == 1.0`,
//! which stands in for an "animation ended" listener. Dropping or cancelling
//! the handle stops further frames without a finishing frame.

use crate::animation::AnimationSpec;
use std::cell::RefCell;
use std::rc::Rc;
use taurus_core::{FrameCallbackRegistration, FrameClock};

/// One sampled frame of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenFrame {
    /// Linear fraction of the duration that has elapsed, in [0, 1].
    pub linear_progress: f32,
    /// Eased progress, in [0, 1] for the built-in curves.
    pub interpolated_time: f32,
    /// Nanoseconds since the first frame of the tween.
    pub play_time_nanos: u64,
    pub finished: bool,
}

impl TweenFrame {
    /// Samples `spec` at `play_time_nanos` after the tween's first frame.
    pub fn sample(spec: &AnimationSpec, play_time_nanos: u64) -> Self {
        let duration_nanos = spec.duration_millis.saturating_mul(1_000_000);
        let linear_progress = if duration_nanos == 0 {
            1.0
        } else {
            (play_time_nanos as f64 / duration_nanos as f64).clamp(0.0, 1.0) as f32
        };
        let finished = linear_progress >= 1.0;
        let interpolated_time = if finished {
            1.0
        } else {
            spec.easing.transform(linear_progress)
        };

        Self {
            linear_progress,
            interpolated_time,
            play_time_nanos,
            finished,
        }
    }
}

struct TweenState {
    spec: AnimationSpec,
    clock: FrameClock,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_frame: Option<Box<dyn FnMut(TweenFrame) + 'static>>,
    cancelled: bool,
    finished: bool,
}

/// Handle to a running tween. The tween stops when the handle is dropped.
pub struct TweenAnimation {
    state: Rc<RefCell<TweenState>>,
}

impl TweenAnimation {
    /// Starts a tween; the first callback arrives on the next drained frame.
    pub fn start(
        clock: &FrameClock,
        spec: AnimationSpec,
        on_frame: impl FnMut(TweenFrame) + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(TweenState {
            spec,
            clock: clock.clone(),
            start_time_nanos: None,
            registration: None,
            on_frame: Some(Box::new(on_frame)),
            cancelled: false,
            finished: false,
        }));
        Self::schedule_frame(&state);
        Self { state }
    }

    pub fn is_running(&self) -> bool {
        let state = self.state.borrow();
        !state.cancelled && !state.finished
    }

    /// Stops the tween without delivering a finishing frame.
    pub fn cancel(self) {
        drop(self);
    }

    fn schedule_frame(this: &Rc<RefCell<TweenState>>) {
        let clock = {
            let state = this.borrow();
            if state.registration.is_some() {
                return;
            }
            state.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<TweenState>>, frame_time_nanos: u64) {
        let (frame, mut callback) = {
            let mut state = this.borrow_mut();
            state.registration = None;
            if state.cancelled {
                return;
            }
            let start_time = *state.start_time_nanos.get_or_insert(frame_time_nanos);
            let frame = TweenFrame::sample(&state.spec, frame_time_nanos.saturating_sub(start_time));
            let Some(callback) = state.on_frame.take() else {
                return;
            };
            if frame.finished {
                state.finished = true;
            }
            (frame, callback)
        };

        // The callback may cancel this tween or start a new one, so no borrow
        // is held while it runs.
        callback(frame);

        let should_continue = {
            let mut state = this.borrow_mut();
            if frame.finished || state.cancelled {
                false
            } else {
                state.on_frame = Some(callback);
                true
            }
        };
        if should_continue {
            Self::schedule_frame(this);
        }
    }
}

impl Drop for TweenAnimation {
    fn drop(&mut self) {
        let registration = {
            let mut state = self.state.borrow_mut();
            state.cancelled = true;
            state.registration.take()
        };
        if registration.is_some() && !self.state.borrow().finished {
            log::trace!("tween cancelled before completion");
        }
        drop(registration);
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
