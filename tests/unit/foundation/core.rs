use super::*;

#[test]
fn icon_size_rejects_zero_and_oversized() {
    assert!(matches!(IconSize::new(0), Err(IconError::Validation(_))));
    assert!(IconSize::new(MAX_ICON_SIZE + 1).is_err());
    assert_eq!(IconSize::new(1).unwrap().get(), 1);
    assert_eq!(IconSize::new(MAX_ICON_SIZE).unwrap().get(), MAX_ICON_SIZE);
}

#[test]
fn icon_size_serde_goes_through_validation() {
    let s: IconSize = serde_json::from_str("128").unwrap();
    assert_eq!(s.get(), 128);
    assert_eq!(serde_json::to_string(&s).unwrap(), "128");
    assert!(serde_json::from_str::<IconSize>("0").is_err());
}

#[test]
fn rgba8_array_order_is_rgba() {
    assert_eq!(BADGE_BLUE.to_array(), [52, 152, 219, 255]);
    assert_eq!(Rgba8::from_array([255, 255, 255, 255]), ARROW_WHITE);
    assert_eq!(TRANSPARENT.a, 0);
}

#[test]
fn pixel_rect_bounds_are_inclusive() {
    let r = PixelRect::new(4, 4, 28, 28);
    assert_eq!(r.width(), 25);
    assert_eq!(r.height(), 25);
    assert!(r.contains(PixelPoint::new(4, 4)));
    assert!(r.contains(PixelPoint::new(28, 28)));
    assert!(!r.contains(PixelPoint::new(29, 28)));
    assert!(!r.is_empty());

    let empty = PixelRect::new(3, 0, 2, 0);
    assert!(empty.is_empty());
    assert_eq!(empty.width(), 0);
}
