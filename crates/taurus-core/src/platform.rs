//! Platform abstraction for frame scheduling.
//!
//! The host owns the event loop. It is told when a frame is wanted through
//! [`FrameScheduler`] and answers by draining the [`FrameClock`](crate::FrameClock)
//! with the frame time of the next vsync.

use web_time::{Duration, Instant};

/// Requests frames from the host.
pub trait FrameScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

#[derive(Default)]
pub struct DefaultScheduler;

impl FrameScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Converts wall-clock instants into monotonically increasing frame times.
///
/// Frame times are nanoseconds since the source was created.
#[derive(Clone, Copy, Debug)]
pub struct FrameTimeSource {
    origin: Instant,
}

impl FrameTimeSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Frame time for "now".
    pub fn now_nanos(&self) -> u64 {
        self.nanos_at(Instant::now())
    }

    /// Frame time for an arbitrary instant; instants before the origin map to zero.
    pub fn nanos_at(&self, instant: Instant) -> u64 {
        let elapsed = instant
            .checked_duration_since(self.origin)
            .unwrap_or(Duration::ZERO);
        u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}

impl Default for FrameTimeSource {
    fn default() -> Self {
        Self::new()
    }
}
