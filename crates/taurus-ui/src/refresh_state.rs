//! Lifecycle of the control as an explicit transition function.
//!
//! [`RefreshState::transition`] is pure: it returns the next state and the
//! side effect the control has to perform. Events that make no sense in the
//! current state leave it unchanged and request nothing.

use crate::offset_animation::AnimationTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Dragging,
    SettlingToIdle,
    Refreshing,
    SettlingFromRefresh,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RefreshEvent {
    /// The gesture tracker confirmed a pull.
    DragStarted,
    /// The pull ended. `overscroll_top` is `None` when the release could not
    /// be measured (the active pointer was missing from the event).
    Released {
        overscroll_top: Option<f32>,
        threshold: f32,
    },
    SetRefreshing {
        refreshing: bool,
        notify: bool,
    },
    AnimationFinished(AnimationTarget),
    /// A new pointer went down and the offset must return to rest.
    PointerReset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshAction {
    /// Animate offset and percent back to zero.
    AnimateToStart,
    /// Set the indicator to full, start it and animate to the drag distance.
    StartRefresh { notify: bool },
    /// Mark the indicator as ending and animate back to zero.
    FinishRefresh,
    StopIndicator,
    /// The triggering animation completed; notify if it was user-initiated.
    DeliverRefresh,
    /// Drop any running job and snap the offset back to zero.
    ResetToStart { stop_indicator: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: RefreshState,
    pub action: Option<RefreshAction>,
}

impl Transition {
    fn to(state: RefreshState, action: RefreshAction) -> Self {
        Self {
            state,
            action: Some(action),
        }
    }

    fn stay(state: RefreshState) -> Self {
        Self {
            state,
            action: None,
        }
    }
}

impl RefreshState {
    pub fn is_refreshing(self) -> bool {
        self == RefreshState::Refreshing
    }

    pub fn is_settling(self) -> bool {
        matches!(
            self,
            RefreshState::SettlingToIdle | RefreshState::SettlingFromRefresh
        )
    }

    pub fn transition(self, event: RefreshEvent) -> Transition {
        use RefreshState::*;

        match (self, event) {
            (Idle, RefreshEvent::DragStarted) => Transition::stay(Dragging),

            (Dragging, RefreshEvent::Released { overscroll_top, threshold }) => {
                match overscroll_top {
                    Some(overscroll) if overscroll > threshold => {
                        Transition::to(Refreshing, RefreshAction::StartRefresh { notify: true })
                    }
                    _ => Transition::to(SettlingToIdle, RefreshAction::AnimateToStart),
                }
            }

            (state, RefreshEvent::SetRefreshing { refreshing, notify }) => {
                if state.is_refreshing() == refreshing {
                    Transition::stay(state)
                } else if refreshing {
                    Transition::to(Refreshing, RefreshAction::StartRefresh { notify })
                } else {
                    Transition::to(SettlingFromRefresh, RefreshAction::FinishRefresh)
                }
            }

            (SettlingToIdle, RefreshEvent::AnimationFinished(AnimationTarget::ToStart))
            | (SettlingFromRefresh, RefreshEvent::AnimationFinished(AnimationTarget::ToEnd)) => {
                Transition::to(Idle, RefreshAction::StopIndicator)
            }
            (Refreshing, RefreshEvent::AnimationFinished(AnimationTarget::ToCorrectPosition)) => {
                Transition::to(Refreshing, RefreshAction::DeliverRefresh)
            }

            (Refreshing, RefreshEvent::PointerReset) => Transition::stay(Refreshing),
            (state, RefreshEvent::PointerReset) => Transition::to(
                Idle,
                RefreshAction::ResetToStart {
                    stop_indicator: state.is_settling(),
                },
            ),

            (state, _) => Transition::stay(state),
        }
    }
}

#[cfg(test)]
#[path = "tests/refresh_state_tests.rs"]
mod tests;
