use super::*;
use crate::foundation::core::TRANSPARENT;

fn render(px: u32) -> IconImage {
    render_icon(IconSize::new(px).unwrap())
}

#[test]
fn size_32_sample_points() {
    let img = render(32);
    assert_eq!((img.width, img.height), (32, 32));

    // Outside the badge.
    assert_eq!(img.pixel(0, 0), Some(TRANSPARENT));
    assert_eq!(img.pixel(3, 16), Some(TRANSPARENT));
    assert_eq!(img.pixel(29, 16), Some(TRANSPARENT));
    // Clipped by the rounded corner.
    assert_eq!(img.pixel(4, 4), Some(TRANSPARENT));
    // Straight edges, inclusive on both sides.
    assert_eq!(img.pixel(4, 16), Some(BADGE_BLUE));
    assert_eq!(img.pixel(28, 16), Some(BADGE_BLUE));
    assert_eq!(img.pixel(16, 4), Some(BADGE_BLUE));
    assert_eq!(img.pixel(16, 28), Some(BADGE_BLUE));
    // Arrow.
    assert_eq!(img.pixel(16, 16), Some(ARROW_WHITE));
    assert_eq!(img.pixel(16, 13), Some(ARROW_WHITE));
    assert_eq!(img.pixel(16, 12), Some(BADGE_BLUE));
    assert_eq!(img.pixel(12, 19), Some(ARROW_WHITE));
    assert_eq!(img.pixel(20, 19), Some(ARROW_WHITE));
    assert_eq!(img.count(ARROW_WHITE), 31);
}

#[test]
fn only_three_colors_are_ever_written() {
    let img = render(128);
    let total = (img.width * img.height) as usize;
    assert_eq!(
        img.count(TRANSPARENT) + img.count(BADGE_BLUE) + img.count(ARROW_WHITE),
        total
    );
    assert!(img.count(BADGE_BLUE) > img.count(ARROW_WHITE));
}

#[test]
fn renderer_struct_and_free_fn_agree() {
    let size = IconSize::new(64).unwrap();
    assert_eq!(IconRenderer.render(size), render_icon(size));
}

#[test]
fn tiny_sizes_render_without_panicking() {
    for px in 1..=7 {
        let img = render(px);
        assert_eq!(img.data.len(), (px * px * 4) as usize);
    }
}
