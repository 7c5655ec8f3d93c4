//! Offset/percent transitions run by the control.
//!
//! A job captures where the content and indicator were when it started and
//! maps interpolated time onto a target top and a drag percent. Offsets are
//! truncated toward zero on every frame.

use crate::pull_to_refresh::{
    DECELERATE_INTERPOLATION_FACTOR, MAX_OFFSET_ANIMATION_DURATION, RESTORE_ANIMATION_DURATION,
};
use taurus_animation::{AnimationSpec, Easing, Lerp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationTarget {
    /// Back to rest after a release below the threshold; percent shrinks to 0.
    ToStart,
    /// Back to rest after a refresh ends; percent keeps growing.
    ToEnd,
    /// To the full drag distance where the refreshing indicator sits.
    ToCorrectPosition,
}

/// Target top and indicator percent for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetFrame {
    pub target_top: i32,
    pub percent: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationJob {
    pub target: AnimationTarget,
    pub from_offset: i32,
    pub from_percent: f32,
    pub end_offset: i32,
    pub spec: AnimationSpec,
    /// Whether completing this job notifies the refresh listener.
    pub notify: bool,
}

impl AnimationJob {
    pub fn to_start(from_offset: i32, from_percent: f32) -> Self {
        Self {
            target: AnimationTarget::ToStart,
            from_offset,
            from_percent,
            end_offset: 0,
            spec: decelerate(proportional_duration(from_percent)),
            notify: false,
        }
    }

    pub fn to_end(from_offset: i32, from_percent: f32) -> Self {
        Self {
            target: AnimationTarget::ToEnd,
            ..Self::to_start(from_offset, from_percent)
        }
    }

    pub fn to_correct_position(
        from_offset: i32,
        from_percent: f32,
        total_drag_distance: i32,
        notify: bool,
    ) -> Self {
        Self {
            target: AnimationTarget::ToCorrectPosition,
            from_offset,
            from_percent,
            end_offset: total_drag_distance,
            spec: decelerate(RESTORE_ANIMATION_DURATION),
            notify,
        }
    }

    pub fn duration_millis(&self) -> u64 {
        self.spec.duration_millis
    }

    pub fn sample(&self, interpolated_time: f32) -> OffsetFrame {
        let t = interpolated_time;
        match self.target {
            AnimationTarget::ToStart => OffsetFrame {
                target_top: self.from_offset - (self.from_offset as f32 * t) as i32,
                percent: self.from_percent * (1.0 - t),
            },
            AnimationTarget::ToEnd => OffsetFrame {
                target_top: self.from_offset - (self.from_offset as f32 * t) as i32,
                percent: self.from_percent * (1.0 + t),
            },
            AnimationTarget::ToCorrectPosition => OffsetFrame {
                target_top: self.from_offset
                    + ((self.end_offset - self.from_offset) as f32 * t) as i32,
                percent: self.from_percent.lerp(&1.0, t),
            },
        }
    }
}

/// Settle duration scaled by how far the indicator was pulled.
fn proportional_duration(from_percent: f32) -> u64 {
    (MAX_OFFSET_ANIMATION_DURATION as f32 * from_percent).abs() as u64
}

fn decelerate(duration_millis: u64) -> AnimationSpec {
    AnimationSpec::tween(
        duration_millis,
        Easing::decelerate(DECELERATE_INTERPOLATION_FACTOR),
    )
}

#[cfg(test)]
#[path = "tests/offset_animation_tests.rs"]
mod tests;
