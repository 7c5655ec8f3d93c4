use super::*;

#[test]
fn default_config_is_baseline_density() {
    let config = PullToRefreshConfig::default();
    assert_eq!(config.density, 1.0);
    assert_eq!(config.touch_slop, DEFAULT_TOUCH_SLOP);
    assert_eq!(config.total_drag_distance(), 120);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn total_drag_distance_scales_with_density() {
    assert_eq!(PullToRefreshConfig::for_density(2.0).total_drag_distance(), 240);
    assert_eq!(PullToRefreshConfig::for_density(2.625).total_drag_distance(), 315);
    assert_eq!(PullToRefreshConfig::for_density(0.75).total_drag_distance(), 90);
}

#[test]
fn for_density_scales_touch_slop() {
    let config = PullToRefreshConfig::for_density(3.0);
    assert_eq!(config.touch_slop, 24.0);
}

#[test]
fn invalid_density_is_rejected() {
    for density in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let result = PullToRefreshConfig::default().with_density(density).validate();
        assert!(matches!(result, Err(ConfigError::InvalidDensity(_))));
    }
}

#[test]
fn invalid_touch_slop_is_rejected() {
    let result = PullToRefreshConfig::default()
        .with_touch_slop(-2.0)
        .validate();
    assert_eq!(result, Err(ConfigError::InvalidTouchSlop(-2.0)));
}

#[test]
fn drag_distance_must_cover_a_pixel() {
    let result = PullToRefreshConfig::default()
        .with_drag_max_distance(Dp(0.2))
        .validate();
    assert_eq!(result, Err(ConfigError::InvalidDragDistance(0.2)));
}

#[test]
fn errors_describe_the_offending_value() {
    let message = ConfigError::InvalidDensity(-1.0).to_string();
    assert!(message.contains("-1"));
}
