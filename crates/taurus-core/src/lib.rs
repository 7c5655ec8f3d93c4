//! Core runtime pieces for Taurus: the frame clock that animation jobs
//! register against, and the platform hooks a host implements to drive it.

mod frame_clock;
mod platform;

pub use frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
pub use platform::{DefaultScheduler, FrameScheduler, FrameTimeSource};

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::platform::{FrameScheduler, FrameTimeSource};
}
