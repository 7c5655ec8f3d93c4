use super::*;

const TOTAL: f32 = 120.0;

#[test]
fn upward_travel_is_rejected() {
    assert_eq!(pull_offset(-1.0, TOTAL), None);
    assert_eq!(pull_offset(-400.0, TOTAL), None);
}

#[test]
fn zero_travel_is_a_zero_offset() {
    let pull = pull_offset(0.0, TOTAL).unwrap();
    assert_eq!(pull.percent, 0.0);
    assert_eq!(pull.target_offset, 0);
}

#[test]
fn linear_region_has_no_tension() {
    for y_diff in (0..=240).step_by(7) {
        let y_diff = y_diff as f32;
        let pull = pull_offset(y_diff, TOTAL).unwrap();
        assert!(pull.scroll_top <= TOTAL);
        assert_eq!(pull.extra_move, 0.0);
        let expected = (TOTAL * pull.percent.min(1.0)).round() as i32;
        assert_eq!(pull.target_offset, expected, "y_diff = {y_diff}");
    }
}

#[test]
fn percent_is_monotonic_in_travel() {
    let mut previous = -1.0f32;
    let mut previous_offset = -1;
    for y_diff in 0..4_000 {
        let pull = pull_offset(y_diff as f32, TOTAL).unwrap();
        assert!(pull.percent >= previous);
        assert!(pull.target_offset >= previous_offset);
        previous = pull.percent;
        previous_offset = pull.target_offset;
    }
}

#[test]
fn pull_within_distance_matches_reference_scenario() {
    let pull = pull_offset(200.0, TOTAL).unwrap();
    assert_eq!(pull.scroll_top, 100.0);
    assert!((pull.percent - 0.8333).abs() < 1e-3);
    assert_eq!(pull.target_offset, 100);
}

#[test]
fn overscroll_adds_slingshot_tension() {
    let pull = pull_offset(400.0, TOTAL).unwrap();
    assert_eq!(pull.scroll_top, 200.0);
    assert_eq!(pull.bounded_percent, 1.0);
    assert!((pull.tension_slingshot_percent - 0.6667).abs() < 1e-3);
    assert!((pull.tension_percent - 0.2778).abs() < 1e-3);
    assert!((pull.extra_move - 16.67).abs() < 1e-2);
    assert_eq!(pull.target_offset, 137);
}

#[test]
fn far_overscroll_saturates() {
    let pull = pull_offset(TOTAL * 10.0 / DRAG_RATE, TOTAL).unwrap();
    assert_eq!(pull.tension_slingshot_percent, 1.0);
    assert_eq!(pull.tension_percent, 0.375);
    assert_eq!(pull.extra_move, TOTAL * 0.375 / 2.0);
    assert!(pull.target_offset as f32 <= TOTAL * 1.1875);
}

#[test]
fn offset_is_bounded_for_any_travel() {
    for total in [1.0f32, 42.0, 120.0, 315.0] {
        let ceiling = total * 1.1875;
        for y_diff in [0.0f32, 10.0, 1e3, 1e5, 1e7] {
            let pull = pull_offset(y_diff, total).unwrap();
            assert!(
                pull.target_offset as f32 <= ceiling,
                "total {total} y_diff {y_diff} gave {}",
                pull.target_offset
            );
        }
        assert_eq!(max_pull_offset(total), ceiling.floor() as i32);
    }
}

#[test]
fn tension_term_stays_within_bounds() {
    for scroll_top in [0.0f32, 60.0, 120.0, 180.0, 240.0, 360.0, 10_000.0] {
        let tension = tension_percent(scroll_top, TOTAL);
        assert!((0.0..=0.5).contains(&tension));
    }
    assert_eq!(tension_percent(100.0, 0.0), 0.0);
}

#[test]
fn degenerate_drag_distance_is_rejected() {
    assert_eq!(pull_offset(100.0, 0.0), None);
}
