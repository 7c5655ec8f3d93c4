//! Recording stand-ins for the views the control drives.
//!
//! Each fake shares its record through an `Rc<RefCell<_>>`, so a test keeps a
//! handle after the fake itself has been moved into the control.

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use taurus_ui::{ContentView, RefreshIndicator};
use taurus_ui_graphics::{Rect, Size};

#[derive(Debug, Default)]
pub struct ContentRecord {
    pub top: i32,
    pub can_scroll_up: bool,
    pub measured: Option<Size>,
    pub frame: Option<Rect>,
    /// Every `offset_top_and_bottom` delta, in order.
    pub offsets: Vec<i32>,
}

#[derive(Clone, Default)]
pub struct FakeContentView {
    record: Rc<RefCell<ContentRecord>>,
}

impl FakeContentView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> Rc<RefCell<ContentRecord>> {
        self.record.clone()
    }

    pub fn record_ref(&self) -> Ref<'_, ContentRecord> {
        self.record.borrow()
    }

    pub fn set_can_scroll_up(&self, can_scroll_up: bool) {
        self.record.borrow_mut().can_scroll_up = can_scroll_up;
    }
}

impl ContentView for FakeContentView {
    fn can_scroll_up(&self) -> bool {
        self.record.borrow().can_scroll_up
    }

    fn top(&self) -> i32 {
        self.record.borrow().top
    }

    fn offset_top_and_bottom(&mut self, dy: i32) {
        let mut record = self.record.borrow_mut();
        record.top += dy;
        record.offsets.push(dy);
    }

    fn measure(&mut self, available: Size) {
        self.record.borrow_mut().measured = Some(available);
    }

    fn layout(&mut self, frame: Rect) {
        self.record.borrow_mut().frame = Some(frame);
    }
}

/// One call made on a [`RecordingIndicator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IndicatorCall {
    SetPercent(f32),
    Start,
    Stop,
    SetEndOfRefreshing(bool),
    Offset(i32),
}

#[derive(Debug, Default)]
pub struct IndicatorRecord {
    pub top: i32,
    pub percent: f32,
    pub running: bool,
    pub frame: Option<Rect>,
    pub calls: Vec<IndicatorCall>,
}

impl IndicatorRecord {
    pub fn count(&self, matches: impl Fn(&IndicatorCall) -> bool) -> usize {
        self.calls.iter().filter(|call| matches(call)).count()
    }

    pub fn starts(&self) -> usize {
        self.count(|call| *call == IndicatorCall::Start)
    }

    pub fn stops(&self) -> usize {
        self.count(|call| *call == IndicatorCall::Stop)
    }

    /// The values passed to `set_end_of_refreshing`, in order.
    pub fn end_of_refreshing(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                IndicatorCall::SetEndOfRefreshing(flag) => Some(*flag),
                _ => None,
            })
            .collect()
    }
}

#[derive(Clone, Default)]
pub struct RecordingIndicator {
    record: Rc<RefCell<IndicatorRecord>>,
}

impl RecordingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> Rc<RefCell<IndicatorRecord>> {
        self.record.clone()
    }
}

impl RefreshIndicator for RecordingIndicator {
    fn set_percent(&mut self, percent: f32) {
        let mut record = self.record.borrow_mut();
        record.percent = percent;
        record.calls.push(IndicatorCall::SetPercent(percent));
    }

    fn start(&mut self) {
        let mut record = self.record.borrow_mut();
        record.running = true;
        record.calls.push(IndicatorCall::Start);
    }

    fn stop(&mut self) {
        let mut record = self.record.borrow_mut();
        record.running = false;
        record.calls.push(IndicatorCall::Stop);
    }

    fn set_end_of_refreshing(&mut self, end_of_refreshing: bool) {
        self.record
            .borrow_mut()
            .calls
            .push(IndicatorCall::SetEndOfRefreshing(end_of_refreshing));
    }

    fn offset_top_and_bottom(&mut self, dy: i32) {
        let mut record = self.record.borrow_mut();
        record.top += dy;
        record.calls.push(IndicatorCall::Offset(dy));
    }

    fn layout(&mut self, frame: Rect) {
        self.record.borrow_mut().frame = Some(frame);
    }
}
