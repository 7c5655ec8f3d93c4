use super::*;
use crate::platform::FrameTimeSource;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct CountingScheduler {
    requests: Cell<usize>,
}

impl FrameScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[test]
fn callback_runs_once_with_frame_time() {
    let clock = FrameClock::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _registration = clock.with_frame_nanos(move |time| sink.borrow_mut().push(time));

    clock.drain_frame_callbacks(16_000_000);
    clock.drain_frame_callbacks(32_000_000);

    assert_eq!(seen.borrow().as_slice(), &[16_000_000]);
    assert!(!clock.has_frame_callbacks());
}

#[test]
fn dropping_registration_cancels_callback() {
    let clock = FrameClock::default();
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    let registration = clock.with_frame_nanos(move |_| flag.set(true));
    assert!(clock.has_frame_callbacks());

    drop(registration);
    clock.drain_frame_callbacks(1);

    assert!(!fired.get());
    assert!(!clock.has_frame_callbacks());
}

#[test]
fn callbacks_registered_while_draining_wait_for_next_frame() {
    let clock = FrameClock::default();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let keep = Rc::new(RefCell::new(Vec::new()));

    {
        let clock_for_cb = clock.clone();
        let frames = Rc::clone(&frames);
        let keep_inner = Rc::clone(&keep);
        let registration = clock.with_frame_nanos(move |time| {
            frames.borrow_mut().push(("first", time));
            let frames = Rc::clone(&frames);
            let next = clock_for_cb.with_frame_nanos(move |time| {
                frames.borrow_mut().push(("second", time));
            });
            keep_inner.borrow_mut().push(next);
        });
        keep.borrow_mut().push(registration);
    }

    clock.drain_frame_callbacks(10);
    assert_eq!(frames.borrow().as_slice(), &[("first", 10)]);
    assert!(clock.has_frame_callbacks());

    clock.drain_frame_callbacks(20);
    assert_eq!(frames.borrow().as_slice(), &[("first", 10), ("second", 20)]);
}

#[test]
fn scheduler_is_asked_for_a_frame_only_when_idle() {
    let scheduler = Rc::new(CountingScheduler::default());
    let clock = FrameClock::new(scheduler.clone());

    let _a = clock.with_frame_nanos(|_| {});
    let _b = clock.with_frame_nanos(|_| {});
    assert_eq!(scheduler.requests.get(), 1);

    clock.drain_frame_callbacks(1);
    let _c = clock.with_frame_nanos(|_| {});
    assert_eq!(scheduler.requests.get(), 2);
}

#[test]
fn frame_time_source_maps_earlier_instants_to_zero() {
    let source = FrameTimeSource::new();
    let before = web_time::Instant::now() - web_time::Duration::from_millis(5);
    assert_eq!(source.nanos_at(before), 0);
    assert!(source.now_nanos() < u64::MAX);
}
