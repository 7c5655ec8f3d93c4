//! Pull-to-refresh control for Taurus
//!
//! [`PullToRefresh`] wraps a scrollable [`ContentView`] and a
//! [`RefreshIndicator`]. Pointer events pulled down from the top of the
//! content move both by the tension-curve offset; releasing past the total
//! drag distance starts a refresh and, once the indicator has settled into
//! place, notifies the refresh listener.

mod config;
mod offset_animation;
mod pull_to_refresh;
mod refresh_state;
mod view;

pub use config::{ConfigError, PullToRefreshConfig};
pub use offset_animation::{AnimationJob, AnimationTarget, OffsetFrame};
pub use pull_to_refresh::{
    PullToRefresh, WeakPullToRefresh, DECELERATE_INTERPOLATION_FACTOR,
    MAX_OFFSET_ANIMATION_DURATION, RESTORE_ANIMATION_DURATION,
};
pub use refresh_state::{RefreshAction, RefreshEvent, RefreshState, Transition};
pub use view::{ContentView, OnRefreshListener, RefreshIndicator};

pub use taurus_core::FrameClock;
pub use taurus_foundation::{PointerEvent, PointerEventKind, PointerId, PointerSample};
pub use taurus_ui_graphics::{Dp, EdgeInsets, Rect, Size};

pub mod prelude {
    pub use crate::config::{ConfigError, PullToRefreshConfig};
    pub use crate::pull_to_refresh::PullToRefresh;
    pub use crate::refresh_state::RefreshState;
    pub use crate::view::{ContentView, RefreshIndicator};
    pub use taurus_core::FrameClock;
    pub use taurus_foundation::{PointerEvent, PointerEventKind, PointerSample};
}
