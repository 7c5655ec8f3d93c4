use super::*;

fn released(overscroll: f32) -> RefreshEvent {
    RefreshEvent::Released {
        overscroll_top: Some(overscroll),
        threshold: 120.0,
    }
}

fn set_refreshing(refreshing: bool) -> RefreshEvent {
    RefreshEvent::SetRefreshing {
        refreshing,
        notify: false,
    }
}

#[test]
fn confirmed_drag_leaves_idle() {
    let transition = RefreshState::Idle.transition(RefreshEvent::DragStarted);
    assert_eq!(transition, Transition::stay(RefreshState::Dragging));
}

#[test]
fn release_past_threshold_starts_a_notifying_refresh() {
    let transition = RefreshState::Dragging.transition(released(121.0));
    assert_eq!(transition.state, RefreshState::Refreshing);
    assert_eq!(
        transition.action,
        Some(RefreshAction::StartRefresh { notify: true })
    );
}

#[test]
fn release_at_or_below_threshold_settles() {
    for overscroll in [0.0, 60.0, 120.0] {
        let transition = RefreshState::Dragging.transition(released(overscroll));
        assert_eq!(transition.state, RefreshState::SettlingToIdle);
        assert_eq!(transition.action, Some(RefreshAction::AnimateToStart));
    }
}

#[test]
fn unmeasured_release_settles() {
    let transition = RefreshState::Dragging.transition(RefreshEvent::Released {
        overscroll_top: None,
        threshold: 120.0,
    });
    assert_eq!(transition.state, RefreshState::SettlingToIdle);
}

#[test]
fn release_outside_a_drag_is_ignored() {
    let transition = RefreshState::Idle.transition(released(500.0));
    assert_eq!(transition, Transition::stay(RefreshState::Idle));
}

#[test]
fn programmatic_refresh_never_notifies() {
    let transition = RefreshState::Idle.transition(set_refreshing(true));
    assert_eq!(transition.state, RefreshState::Refreshing);
    assert_eq!(
        transition.action,
        Some(RefreshAction::StartRefresh { notify: false })
    );
}

#[test]
fn set_refreshing_is_idempotent() {
    let transition = RefreshState::Refreshing.transition(set_refreshing(true));
    assert_eq!(transition, Transition::stay(RefreshState::Refreshing));
    for state in [
        RefreshState::Idle,
        RefreshState::Dragging,
        RefreshState::SettlingToIdle,
        RefreshState::SettlingFromRefresh,
    ] {
        assert_eq!(
            state.transition(set_refreshing(false)),
            Transition::stay(state)
        );
    }
}

#[test]
fn ending_a_refresh_settles_from_refresh() {
    let transition = RefreshState::Refreshing.transition(set_refreshing(false));
    assert_eq!(transition.state, RefreshState::SettlingFromRefresh);
    assert_eq!(transition.action, Some(RefreshAction::FinishRefresh));
}

#[test]
fn settle_completion_returns_to_idle() {
    let to_start = RefreshState::SettlingToIdle
        .transition(RefreshEvent::AnimationFinished(AnimationTarget::ToStart));
    assert_eq!(to_start.state, RefreshState::Idle);
    assert_eq!(to_start.action, Some(RefreshAction::StopIndicator));

    let to_end = RefreshState::SettlingFromRefresh
        .transition(RefreshEvent::AnimationFinished(AnimationTarget::ToEnd));
    assert_eq!(to_end.state, RefreshState::Idle);
}

#[test]
fn triggering_animation_completion_delivers_refresh() {
    let transition = RefreshState::Refreshing.transition(RefreshEvent::AnimationFinished(
        AnimationTarget::ToCorrectPosition,
    ));
    assert_eq!(transition.state, RefreshState::Refreshing);
    assert_eq!(transition.action, Some(RefreshAction::DeliverRefresh));
}

#[test]
fn stale_completion_is_ignored() {
    let transition = RefreshState::Idle
        .transition(RefreshEvent::AnimationFinished(AnimationTarget::ToCorrectPosition));
    assert_eq!(transition, Transition::stay(RefreshState::Idle));
}

#[test]
fn pointer_reset_interrupts_settling_but_not_refreshing() {
    let settling = RefreshState::SettlingToIdle.transition(RefreshEvent::PointerReset);
    assert_eq!(settling.state, RefreshState::Idle);
    assert_eq!(
        settling.action,
        Some(RefreshAction::ResetToStart {
            stop_indicator: true
        })
    );

    let idle = RefreshState::Idle.transition(RefreshEvent::PointerReset);
    assert_eq!(
        idle.action,
        Some(RefreshAction::ResetToStart {
            stop_indicator: false
        })
    );

    let refreshing = RefreshState::Refreshing.transition(RefreshEvent::PointerReset);
    assert_eq!(refreshing, Transition::stay(RefreshState::Refreshing));
}
