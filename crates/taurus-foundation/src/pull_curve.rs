//! Tension curve for the pull gesture.
//!
//! Up to the total drag distance the offset follows the pull one-to-one.
//! Past it, a quadratic "slingshot" term adds a decelerating give that
//! saturates, so the offset stays bounded no matter how far the finger goes.

use crate::gesture_constants::{DRAG_RATE, MAX_SLINGSHOT_PERCENT};

/// Result of mapping a vertical finger travel onto the pull curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullOffset {
    /// Finger travel scaled by [`DRAG_RATE`].
    pub scroll_top: f32,
    /// `scroll_top / total_drag_distance`; may exceed 1.
    pub percent: f32,
    /// `percent` clamped to at most 1.
    pub bounded_percent: f32,
    /// Saturating slingshot fraction of the overscroll, in [0, 1].
    pub tension_slingshot_percent: f32,
    /// Quadratic tension term, in [0, 0.375].
    pub tension_percent: f32,
    /// Extra pixels added beyond the total drag distance.
    pub extra_move: f32,
    /// Offset to apply to the content, in whole pixels.
    pub target_offset: i32,
}

/// Maps a finger travel `y_diff` onto the pull curve.
///
/// Returns `None` when the travel is upwards (negative percent); such moves
/// never produce a visual change.
pub fn pull_offset(y_diff: f32, total_drag_distance: f32) -> Option<PullOffset> {
    if total_drag_distance <= 0.0 {
        return None;
    }
    let scroll_top = y_diff * DRAG_RATE;
    let percent = scroll_top / total_drag_distance;
    if percent < 0.0 || percent.is_nan() {
        return None;
    }

    let bounded_percent = percent.abs().min(1.0);
    let slingshot = tension_slingshot_percent(scroll_top, total_drag_distance);
    let tension = tension_polynomial(slingshot);
    let extra_move = total_drag_distance * tension / 2.0;
    let raw_offset = (total_drag_distance * bounded_percent + extra_move).round();
    let target_offset = (raw_offset as i32).min(max_pull_offset(total_drag_distance));

    Some(PullOffset {
        scroll_top,
        percent,
        bounded_percent,
        tension_slingshot_percent: slingshot,
        tension_percent: tension,
        extra_move,
        target_offset,
    })
}

/// Tension term for a given pull distance (already scaled by the drag rate).
pub fn tension_percent(scroll_top: f32, total_drag_distance: f32) -> f32 {
    if total_drag_distance <= 0.0 {
        return 0.0;
    }
    tension_polynomial(tension_slingshot_percent(scroll_top, total_drag_distance))
}

/// Largest offset the curve can produce for a drag distance.
pub fn max_pull_offset(total_drag_distance: f32) -> i32 {
    let ceiling = total_drag_distance
        + total_drag_distance * tension_polynomial(MAX_SLINGSHOT_PERCENT) / 2.0;
    ceiling.floor() as i32
}

fn tension_slingshot_percent(scroll_top: f32, total_drag_distance: f32) -> f32 {
    let extra_overscroll = (scroll_top.abs() - total_drag_distance).max(0.0);
    let slingshot = extra_overscroll.min(total_drag_distance * 2.0) / total_drag_distance;
    slingshot.clamp(0.0, MAX_SLINGSHOT_PERCENT)
}

fn tension_polynomial(slingshot: f32) -> f32 {
    let quarter = slingshot / 4.0;
    (quarter - quarter.powi(2)) * 2.0
}

#[cfg(test)]
#[path = "tests/pull_curve_tests.rs"]
mod tests;
