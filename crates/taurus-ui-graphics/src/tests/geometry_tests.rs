use super::*;

#[test]
fn rect_inset_removes_padding_from_each_edge() {
    let frame = Rect::new(0.0, 0.0, 400.0, 800.0);
    let inner = frame.inset(EdgeInsets::new(10.0, 20.0, 30.0, 40.0));
    assert_eq!(inner, Rect::new(10.0, 20.0, 360.0, 740.0));
}

#[test]
fn rect_translate_keeps_size() {
    let moved = Rect::new(5.0, 5.0, 100.0, 50.0).translate(0.0, -12.0);
    assert_eq!(moved, Rect::new(5.0, -7.0, 100.0, 50.0));
}

#[test]
fn size_deflate_never_goes_negative() {
    let size = Size::new(10.0, 10.0).deflate(EdgeInsets::uniform(8.0));
    assert_eq!(size, Size::new(0.0, 0.0));
}

#[test]
fn symmetric_insets_pair_opposite_edges() {
    let insets = EdgeInsets::symmetric(4.0, 9.0);
    assert_eq!(insets, EdgeInsets::new(4.0, 9.0, 4.0, 9.0));
}

#[test]
fn dp_rounds_to_nearest_pixel() {
    assert_eq!(Dp(120.0).round_to_px(1.0), 120);
    assert_eq!(Dp(120.0).round_to_px(2.625), 315);
    assert_eq!(Dp(120.0).round_to_px(1.33), 160);
}
