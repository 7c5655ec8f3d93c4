//! Shared gesture constants for the pull gesture.
//!
//! Distances are in logical pixels unless typed as [`Dp`]; the control scales
//! them by the display density at construction.

use taurus_ui_graphics::Dp;

/// Fraction of raw finger travel that turns into pull distance.
///
/// Halving the travel keeps the indicator from tracking every jitter of the
/// finger one-to-one.
pub const DRAG_RATE: f32 = 0.5;

/// Pull distance, before density scaling, at which a release triggers a refresh.
pub const DRAG_MAX_DISTANCE: Dp = Dp(120.0);

/// Touch slop in logical pixels.
///
/// A pull is only confirmed once the finger has travelled strictly more than
/// this distance downwards from where it went down. Matches Android's
/// `ViewConfiguration` default of 8dp at baseline density.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Upper bound of the slingshot fraction fed into the tension polynomial.
///
/// At 1.0 the tension term saturates at 0.375, which keeps the pull offset
/// within `1.1875` times the total drag distance however far the finger goes.
pub const MAX_SLINGSHOT_PERCENT: f32 = 1.0;
