//! The pull-to-refresh control.
//!
//! Pointer events go through [`PullToRefresh::on_intercept_event`] first; once
//! that reports a confirmed pull the host routes the rest of the gesture to
//! [`PullToRefresh::on_event`]. Animations run on the shared [`FrameClock`];
//! the host drains it once per frame.

use crate::config::{ConfigError, PullToRefreshConfig};
use crate::offset_animation::AnimationJob;
use crate::refresh_state::{RefreshAction, RefreshEvent, RefreshState};
use crate::view::{ContentView, OnRefreshListener, RefreshIndicator};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use taurus_animation::{TweenAnimation, TweenFrame};
use taurus_core::FrameClock;
use taurus_foundation::{GestureTracker, PointerEvent, PointerEventKind};
use taurus_ui_graphics::{EdgeInsets, Rect, Size};

/// Scale of the settle animations; the actual duration is this times the
/// drag percent they start from.
pub const MAX_OFFSET_ANIMATION_DURATION: u64 = 700;

/// Duration of the animation that parks the indicator at the drag distance.
pub const RESTORE_ANIMATION_DURATION: u64 = 2350;

pub const DECELERATE_INTERPOLATION_FACTOR: f32 = 2.0;

/// Offset that persists across pull sessions.
#[derive(Clone, Copy, Debug)]
struct OffsetState {
    current_offset_top: i32,
    total_drag_distance: i32,
}

struct RunningJob {
    job: AnimationJob,
    generation: u64,
    _tween: TweenAnimation,
}

struct PullToRefreshInner {
    clock: FrameClock,
    content: Option<Box<dyn ContentView>>,
    indicator: Box<dyn RefreshIndicator>,
    tracker: GestureTracker,
    offset: OffsetState,
    state: RefreshState,
    current_drag_percent: f32,
    enabled: bool,
    padding: EdgeInsets,
    listener: Option<OnRefreshListener>,
    running: Option<RunningJob>,
    jobs_started: u64,
    weak_self: Weak<RefCell<PullToRefreshInner>>,
}

/// Shared handle to a pull-to-refresh control. Cloning is cheap.
#[derive(Clone)]
pub struct PullToRefresh {
    inner: Rc<RefCell<PullToRefreshInner>>,
}

/// Non-owning handle, for listeners that need to reach back into the control.
#[derive(Clone)]
pub struct WeakPullToRefresh {
    inner: Weak<RefCell<PullToRefreshInner>>,
}

impl WeakPullToRefresh {
    pub fn upgrade(&self) -> Option<PullToRefresh> {
        self.inner.upgrade().map(|inner| PullToRefresh { inner })
    }
}

impl PullToRefresh {
    pub fn new(
        config: PullToRefreshConfig,
        indicator: impl RefreshIndicator + 'static,
        clock: &FrameClock,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let total_drag_distance = config.total_drag_distance();
        log::debug!(
            "pull-to-refresh: density={} total drag distance={}px touch slop={}px",
            config.density,
            total_drag_distance,
            config.touch_slop
        );
        let inner = Rc::new_cyclic(|weak_self| {
            RefCell::new(PullToRefreshInner {
                clock: clock.clone(),
                content: None,
                indicator: Box::new(indicator),
                tracker: GestureTracker::new(config.touch_slop, total_drag_distance),
                offset: OffsetState {
                    current_offset_top: 0,
                    total_drag_distance,
                },
                state: RefreshState::Idle,
                current_drag_percent: 0.0,
                enabled: true,
                padding: EdgeInsets::ZERO,
                listener: None,
                running: None,
                jobs_started: 0,
                weak_self: weak_self.clone(),
            })
        });
        Ok(Self { inner })
    }

    pub fn downgrade(&self) -> WeakPullToRefresh {
        WeakPullToRefresh {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Attaches the content view, returning the previous one.
    pub fn set_content(
        &self,
        content: impl ContentView + 'static,
    ) -> Option<Box<dyn ContentView>> {
        self.inner.borrow_mut().content.replace(Box::new(content))
    }

    pub fn take_content(&self) -> Option<Box<dyn ContentView>> {
        self.inner.borrow_mut().content.take()
    }

    pub fn has_content(&self) -> bool {
        self.inner.borrow().content.is_some()
    }

    /// Replaces the refresh listener.
    pub fn set_on_refresh_listener(&self, listener: impl Fn() + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn clear_on_refresh_listener(&self) {
        self.inner.borrow_mut().listener = None;
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().enabled
    }

    pub fn set_padding(&self, padding: EdgeInsets) {
        self.inner.borrow_mut().padding = padding;
    }

    pub fn padding(&self) -> EdgeInsets {
        self.inner.borrow().padding
    }

    pub fn total_drag_distance(&self) -> i32 {
        self.inner.borrow().offset.total_drag_distance
    }

    pub fn state(&self) -> RefreshState {
        self.inner.borrow().state
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.borrow().state.is_refreshing()
    }

    pub fn is_being_dragged(&self) -> bool {
        self.inner.borrow().tracker.is_dragging()
    }

    pub fn current_offset_top(&self) -> i32 {
        self.inner.borrow().offset.current_offset_top
    }

    pub fn current_drag_percent(&self) -> f32 {
        self.inner.borrow().current_drag_percent
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().running.is_some()
    }

    /// The job currently in flight, if any.
    pub fn running_animation(&self) -> Option<AnimationJob> {
        self.inner.borrow().running.as_ref().map(|running| running.job)
    }

    /// Number of animation jobs started since construction.
    pub fn started_animation_count(&self) -> u64 {
        self.inner.borrow().jobs_started
    }

    /// Starts or ends a refresh from outside. Never notifies the listener;
    /// a call matching the current refreshing flag does nothing.
    pub fn set_refreshing(&self, refreshing: bool) {
        self.inner.borrow_mut().dispatch(RefreshEvent::SetRefreshing {
            refreshing,
            notify: false,
        });
    }

    /// Decides whether the control takes over the gesture.
    ///
    /// Only confirms the pull; moves are not applied here.
    pub fn on_intercept_event(&self, event: &PointerEvent) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.can_start_pull() {
            return false;
        }

        match event.kind {
            PointerEventKind::Down => {
                if !inner.begin_pull(event) {
                    return false;
                }
            }
            PointerEventKind::Move => {
                if !inner.tracker.has_session() {
                    return false;
                }
                inner.tracker.observe_move(event);
                inner.sync_drag_started();
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let was_dragging = inner.tracker.is_dragging();
                inner.tracker.reset();
                if was_dragging {
                    // The release was never routed to touch handling; settle
                    // back without measuring it.
                    let threshold = inner.offset.total_drag_distance as f32;
                    inner.dispatch(RefreshEvent::Released {
                        overscroll_top: None,
                        threshold,
                    });
                }
            }
            PointerEventKind::PointerUp { .. } => {
                inner.tracker.on_secondary_pointer_up(event);
            }
            PointerEventKind::PointerDown { .. } => {}
        }

        inner.tracker.is_dragging()
    }

    /// Drives the pull. Returns whether the event was consumed.
    pub fn on_event(&self, event: &PointerEvent) -> bool {
        let listener = {
            let mut inner = self.inner.borrow_mut();
            match event.kind {
                PointerEventKind::Down => {
                    return inner.can_start_pull() && inner.begin_pull(event);
                }
                PointerEventKind::Move => return inner.drag_to(event),
                PointerEventKind::PointerDown { .. } => {
                    inner.tracker.on_secondary_pointer_down(event);
                    return inner.tracker.has_session();
                }
                PointerEventKind::PointerUp { .. } => {
                    inner.tracker.on_secondary_pointer_up(event);
                    return inner.tracker.has_session();
                }
                PointerEventKind::Up | PointerEventKind::Cancel => {
                    if !inner.tracker.has_session() {
                        return false;
                    }
                    let was_dragging = inner.tracker.is_dragging();
                    let overscroll_top = inner.tracker.on_pointer_up(event);
                    if !was_dragging {
                        return false;
                    }
                    log::debug!(
                        "pull released: overscroll={:?} threshold={}",
                        overscroll_top,
                        inner.offset.total_drag_distance
                    );
                    let threshold = inner.offset.total_drag_distance as f32;
                    inner.dispatch(RefreshEvent::Released {
                        overscroll_top,
                        threshold,
                    })
                }
            }
        };
        if let Some(listener) = listener {
            listener();
        }
        true
    }

    /// Measures content and indicator with the padded size.
    pub fn measure(&self, width: f32, height: f32) {
        let mut inner = self.inner.borrow_mut();
        let available = Size::new(width, height).deflate(inner.padding);
        let PullToRefreshInner {
            content, indicator, ..
        } = &mut *inner;
        let Some(content) = content.as_mut() else {
            return;
        };
        content.measure(available);
        indicator.measure(available);
    }

    /// Places the indicator at rest and the content shifted by the current offset.
    pub fn layout(&self, frame: Rect) {
        let mut inner = self.inner.borrow_mut();
        let rest = frame.inset(inner.padding);
        let offset = inner.offset.current_offset_top as f32;
        let PullToRefreshInner {
            content, indicator, ..
        } = &mut *inner;
        let Some(content) = content.as_mut() else {
            return;
        };
        log::trace!("layout: rest={rest:?} content offset={offset}");
        content.layout(rest.translate(0.0, offset));
        indicator.layout(rest);
    }

    fn on_animation_frame(&self, generation: u64, frame: TweenFrame) {
        let listener = {
            let mut inner = self.inner.borrow_mut();
            let Some(job) = inner
                .running
                .as_ref()
                .filter(|running| running.generation == generation)
                .map(|running| running.job)
            else {
                log::warn!("frame for superseded animation job {generation} dropped");
                return;
            };

            let sample = job.sample(frame.interpolated_time);
            let offset = sample.target_top - inner.offset.current_offset_top;
            inner.current_drag_percent = sample.percent;
            inner.indicator.set_percent(sample.percent);
            inner.set_target_offset_top(offset);

            if !frame.finished {
                return;
            }
            inner.running = None;
            log::debug!(
                "{:?} finished at offset {}",
                job.target,
                inner.offset.current_offset_top
            );
            let listener = inner.dispatch(RefreshEvent::AnimationFinished(job.target));
            listener.filter(|_| job.notify)
        };
        if let Some(listener) = listener {
            log::debug!("notifying refresh listener");
            listener();
        }
    }
}

impl PullToRefreshInner {
    fn can_start_pull(&self) -> bool {
        let Some(content) = self.content.as_ref() else {
            return false;
        };
        self.enabled && !content.can_scroll_up() && !self.state.is_refreshing()
    }

    fn begin_pull(&mut self, event: &PointerEvent) -> bool {
        self.dispatch(RefreshEvent::PointerReset);
        self.tracker.on_pointer_down(event)
    }

    fn sync_drag_started(&mut self) {
        if self.tracker.is_dragging() && self.state == RefreshState::Idle {
            self.dispatch(RefreshEvent::DragStarted);
        }
    }

    fn drag_to(&mut self, event: &PointerEvent) -> bool {
        let Some(active) = self.tracker.active_pointer_id() else {
            return false;
        };
        if event.y_of(active).is_none() {
            log::trace!("move without active pointer {active}");
            return false;
        }
        let update = self.tracker.on_pointer_move(event);
        self.sync_drag_started();
        let Some(update) = update else {
            return !self.tracker.is_dragging();
        };
        if self.state != RefreshState::Dragging {
            return false;
        }
        self.current_drag_percent = update.percent;
        self.indicator.set_percent(update.percent);
        let offset = update.target_offset - self.offset.current_offset_top;
        self.set_target_offset_top(offset);
        true
    }

    /// Moves content and indicator together by `offset` pixels.
    fn set_target_offset_top(&mut self, offset: i32) {
        let Some(content) = self.content.as_mut() else {
            return;
        };
        if offset == 0 {
            return;
        }
        content.offset_top_and_bottom(offset);
        self.indicator.offset_top_and_bottom(offset);
        self.offset.current_offset_top += offset;
        log::trace!(
            "offset by {offset}: offset top={} content top={}",
            self.offset.current_offset_top,
            content.top()
        );
    }

    /// Applies a state transition; returns the listener when a refresh must
    /// be delivered, so the caller can invoke it after releasing the borrow.
    fn dispatch(&mut self, event: RefreshEvent) -> Option<OnRefreshListener> {
        let transition = self.state.transition(event);
        if transition.state != self.state {
            log::debug!(
                "refresh state {:?} -> {:?} on {:?}",
                self.state,
                transition.state,
                event
            );
        }
        self.state = transition.state;
        let action = transition.action?;
        self.perform(action)
    }

    fn perform(&mut self, action: RefreshAction) -> Option<OnRefreshListener> {
        let from_offset = self.offset.current_offset_top;
        let from_percent = self.current_drag_percent;
        match action {
            RefreshAction::AnimateToStart => {
                self.start_job(AnimationJob::to_start(from_offset, from_percent));
            }
            RefreshAction::StartRefresh { notify } => {
                self.tracker.reset();
                self.indicator.set_end_of_refreshing(false);
                self.indicator.set_percent(1.0);
                self.start_job(AnimationJob::to_correct_position(
                    from_offset,
                    from_percent,
                    self.offset.total_drag_distance,
                    notify,
                ));
                self.indicator.start();
            }
            RefreshAction::FinishRefresh => {
                self.indicator.set_end_of_refreshing(true);
                self.start_job(AnimationJob::to_end(from_offset, from_percent));
            }
            RefreshAction::StopIndicator => {
                self.indicator.stop();
            }
            RefreshAction::DeliverRefresh => {
                return self.listener.clone();
            }
            RefreshAction::ResetToStart { stop_indicator } => {
                if self.running.take().is_some() {
                    log::debug!("pointer down cancelled running animation");
                }
                if stop_indicator {
                    self.indicator.stop();
                }
                if from_offset != 0 || from_percent != 0.0 {
                    self.current_drag_percent = 0.0;
                    self.indicator.set_percent(0.0);
                    self.set_target_offset_top(-from_offset);
                }
            }
        }
        None
    }

    /// Starts `job`, replacing whatever job is in flight.
    fn start_job(&mut self, job: AnimationJob) {
        self.jobs_started += 1;
        let generation = self.jobs_started;
        let weak = self.weak_self.clone();
        let tween = TweenAnimation::start(&self.clock, job.spec, move |frame| {
            if let Some(inner) = weak.upgrade() {
                PullToRefresh { inner }.on_animation_frame(generation, frame);
            }
        });
        log::debug!(
            "animation job {generation}: {:?} from offset {} percent {} over {}ms",
            job.target,
            job.from_offset,
            job.from_percent,
            job.duration_millis()
        );
        self.running = Some(RunningJob {
            job,
            generation,
            _tween: tween,
        });
    }
}

#[cfg(test)]
#[path = "tests/pull_to_refresh_tests.rs"]
mod tests;
