//! Drives one pull-to-refresh session in real time: a pull past the
//! threshold, the settle into the refreshing position, a simulated load and
//! the return to rest. Run with `RUST_LOG=debug` to see state transitions.

use anyhow::Context;
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;
use taurus_core::{FrameClock, FrameTimeSource};
use taurus_ui::{
    ContentView, PointerEvent, PullToRefresh, PullToRefreshConfig, Rect, RefreshIndicator,
    RefreshState, Size,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const LOAD_MILLIS: u64 = 600;

struct ListContent {
    top: i32,
}

impl ContentView for ListContent {
    fn can_scroll_up(&self) -> bool {
        false
    }

    fn top(&self) -> i32 {
        self.top
    }

    fn offset_top_and_bottom(&mut self, dy: i32) {
        self.top += dy;
    }

    fn measure(&mut self, available: Size) {
        log::info!("content measured at {}x{}", available.width, available.height);
    }

    fn layout(&mut self, frame: Rect) {
        log::info!("content placed at y={}", frame.y);
    }
}

#[derive(Default)]
struct SpinnerIndicator {
    percent: f32,
}

impl RefreshIndicator for SpinnerIndicator {
    fn set_percent(&mut self, percent: f32) {
        if (percent - self.percent).abs() >= 0.05 || percent == 0.0 || percent == 1.0 {
            log::info!("indicator at {:.0}%", percent * 100.0);
        }
        self.percent = percent;
    }

    fn start(&mut self) {
        log::info!("spinner started");
    }

    fn stop(&mut self) {
        log::info!("spinner stopped");
    }

    fn set_end_of_refreshing(&mut self, end_of_refreshing: bool) {
        log::debug!("end of refreshing: {end_of_refreshing}");
    }

    fn offset_top_and_bottom(&mut self, _dy: i32) {}
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let clock = FrameClock::default();
    let time = FrameTimeSource::new();
    let control = PullToRefresh::new(
        PullToRefreshConfig::for_density(2.0),
        SpinnerIndicator::default(),
        &clock,
    )
    .context("building pull-to-refresh control")?;
    control.set_content(ListContent { top: 0 });
    control.measure(720.0, 1280.0);

    let refreshed_at = Rc::new(Cell::new(None));
    let on_refresh = refreshed_at.clone();
    let frames = time;
    control.set_on_refresh_listener(move || {
        log::info!("refresh requested, loading");
        on_refresh.set(Some(frames.now_nanos()));
    });

    log::info!(
        "pulling; refresh arms past {}px",
        control.total_drag_distance()
    );
    let down = PointerEvent::down(0, 100.0);
    control.on_intercept_event(&down);
    for step in 1..=20 {
        let event = PointerEvent::moved(0, 100.0 + step as f32 * 30.0);
        if control.is_being_dragged() {
            control.on_event(&event);
        } else {
            control.on_intercept_event(&event);
        }
        log::info!("pull offset {}px", control.current_offset_top());
        thread::sleep(FRAME_INTERVAL);
    }
    control.on_event(&PointerEvent::up(0, 700.0));
    control.layout(Rect::new(0.0, 0.0, 720.0, 1280.0));

    loop {
        thread::sleep(FRAME_INTERVAL);
        let now = time.now_nanos();
        clock.drain_frame_callbacks(now);

        if let Some(started) = refreshed_at.get() {
            if now.saturating_sub(started) >= LOAD_MILLIS * 1_000_000 {
                log::info!("load finished");
                refreshed_at.set(None);
                control.set_refreshing(false);
            }
        }

        if control.state() == RefreshState::Idle && !clock.has_frame_callbacks() {
            break;
        }
    }

    log::info!(
        "back at rest after {} animations, offset {}px",
        control.started_animation_count(),
        control.current_offset_top()
    );
    Ok(())
}
