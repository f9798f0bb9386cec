//! Integration tests for outer and inner rounded rectangle construction.

use bevel_geometry::{CornerRadii, EdgeSizes, Rect, RoundedRect, Size, WritingMode};

const HORIZONTAL: WritingMode = WritingMode::HorizontalTb;

#[test]
fn test_outer_snaps_box_and_keeps_radii() {
    let outer = RoundedRect::build_outer(
        Rect::new(10.4, 20.6, 99.8, 50.0),
        CornerRadii::circular(8.0),
    );
    assert_eq!(outer.rect, Rect::new(10.0, 21.0, 100.0, 50.0));
    assert_eq!(outer.radii, CornerRadii::circular(8.0));
}

#[test]
fn test_outer_without_radii_is_square() {
    let outer = RoundedRect::build_outer(Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::ZERO);
    assert!(!outer.is_rounded());
}

#[test]
fn test_outer_constrains_overlapping_radii() {
    let outer = RoundedRect::build_outer(
        Rect::new(0.0, 0.0, 40.0, 100.0),
        CornerRadii::circular(40.0),
    );
    // 40 + 40 along a width of 40 -> factor 0.5.
    assert_eq!(outer.radii, CornerRadii::circular(20.0));
}

#[test]
fn test_inner_with_zero_widths_equals_outer() {
    let border_box = Rect::new(5.0, 5.0, 120.0, 80.0);
    let radii = CornerRadii::new(
        Size::new(10.0, 12.0),
        Size::new(4.0, 4.0),
        Size::new(0.0, 0.0),
        Size::new(30.0, 20.0),
    );
    let outer = RoundedRect::build_outer(border_box, radii);
    let inner = RoundedRect::build_inner(border_box, EdgeSizes::ZERO, radii, HORIZONTAL, true, true);
    assert_eq!(inner, outer);
}

#[test]
fn test_inner_insets_box_by_widths() {
    let inner = RoundedRect::build_inner(
        Rect::new(0.0, 0.0, 100.0, 60.0),
        EdgeSizes::new(1.0, 2.0, 3.0, 4.0),
        CornerRadii::ZERO,
        HORIZONTAL,
        true,
        true,
    );
    assert_eq!(inner.rect, Rect::new(4.0, 1.0, 94.0, 56.0));
    assert!(!inner.is_rounded());
}

#[test]
fn test_inner_radii_shrink_by_adjacent_widths() {
    let inner = RoundedRect::build_inner(
        Rect::new(0.0, 0.0, 100.0, 100.0),
        EdgeSizes::new(2.0, 4.0, 6.0, 8.0),
        CornerRadii::circular(10.0),
        HORIZONTAL,
        true,
        true,
    );
    assert_eq!(inner.radii.top_left, Size::new(2.0, 8.0));
    assert_eq!(inner.radii.top_right, Size::new(6.0, 8.0));
    assert_eq!(inner.radii.bottom_left, Size::new(2.0, 4.0));
    assert_eq!(inner.radii.bottom_right, Size::new(6.0, 4.0));
}

#[test]
fn test_inner_corner_squares_when_width_exceeds_radius() {
    let inner = RoundedRect::build_inner(
        Rect::new(0.0, 0.0, 100.0, 100.0),
        EdgeSizes::uniform(12.0),
        CornerRadii::circular(10.0),
        HORIZONTAL,
        true,
        true,
    );
    assert_eq!(inner.rect, Rect::new(12.0, 12.0, 76.0, 76.0));
    assert!(!inner.is_rounded());
}

#[test]
fn test_inner_excluded_logical_edges_get_no_inset() {
    // Horizontal fragment in the middle of a line: no left/right border.
    let inner = RoundedRect::build_inner(
        Rect::new(0.0, 0.0, 100.0, 40.0),
        EdgeSizes::uniform(5.0),
        CornerRadii::ZERO,
        HORIZONTAL,
        false,
        false,
    );
    assert_eq!(inner.rect, Rect::new(0.0, 5.0, 100.0, 30.0));
}

#[test]
fn test_inner_vertical_excluded_edges_are_top_and_bottom() {
    let inner = RoundedRect::build_inner(
        Rect::new(0.0, 0.0, 40.0, 100.0),
        EdgeSizes::uniform(5.0),
        CornerRadii::ZERO,
        WritingMode::VerticalRl,
        true,
        false,
    );
    // Top (logical left) is included, bottom (logical right) is not.
    assert_eq!(inner.rect, Rect::new(5.0, 5.0, 30.0, 95.0));
}

#[test]
fn test_inner_drops_radii_of_excluded_corners() {
    let inner = RoundedRect::build_inner(
        Rect::new(0.0, 0.0, 100.0, 40.0),
        EdgeSizes::uniform(2.0),
        CornerRadii::circular(10.0),
        HORIZONTAL,
        true,
        false,
    );
    assert_eq!(inner.radii.top_left, Size::new(8.0, 8.0));
    assert_eq!(inner.radii.bottom_left, Size::new(8.0, 8.0));
    assert_eq!(inner.radii.top_right, Size::ZERO);
    assert_eq!(inner.radii.bottom_right, Size::ZERO);
}

#[test]
fn test_outer_for_fragment_drops_radii_of_excluded_corners() {
    let outer = RoundedRect::build_outer_for_fragment(
        Rect::new(0.0, 0.0, 100.0, 40.0),
        CornerRadii::circular(10.0),
        HORIZONTAL,
        false,
        true,
    );
    assert_eq!(outer.radii.top_left, Size::ZERO);
    assert_eq!(outer.radii.bottom_left, Size::ZERO);
    assert_eq!(outer.radii.top_right, Size::new(10.0, 10.0));
    assert_eq!(outer.radii.bottom_right, Size::new(10.0, 10.0));
}

#[test]
fn test_inner_collapses_when_widths_exceed_box() {
    let inner = RoundedRect::build_inner(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        EdgeSizes::uniform(8.0),
        CornerRadii::circular(5.0),
        HORIZONTAL,
        true,
        true,
    );
    assert_eq!(inner.rect.width, 0.0);
    assert_eq!(inner.rect.height, 0.0);
    assert_eq!(inner.radii, CornerRadii::ZERO);
}

#[test]
fn test_inner_constrains_against_inner_box() {
    // The top-right radius floors at zero under the 20px right border while
    // the top-left keeps its 90px width, which no longer fits the 80px wide
    // inner box.
    let radii = CornerRadii::new(
        Size::new(90.0, 10.0),
        Size::new(10.0, 10.0),
        Size::ZERO,
        Size::ZERO,
    );
    let inner = RoundedRect::build_inner(
        Rect::new(0.0, 0.0, 100.0, 100.0),
        EdgeSizes::new(2.0, 20.0, 2.0, 0.0),
        radii,
        HORIZONTAL,
        true,
        true,
    );
    assert_eq!(inner.rect, Rect::new(0.0, 2.0, 80.0, 96.0));
    assert_eq!(inner.radii.top_right, Size::ZERO);
    assert!(inner.radii.top_left.width <= 80.0 + 1e-4);
    assert!(inner.radii.top_left.height < 8.0);
}

#[test]
fn test_constrain_radii_on_degenerate_rect() {
    let rounded = RoundedRect::new(Rect::new(0.0, 0.0, 0.0, 0.0), CornerRadii::circular(3.0));
    assert_eq!(rounded.constrain_radii().radii, CornerRadii::ZERO);
}
