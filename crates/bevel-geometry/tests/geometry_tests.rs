//! Integration tests for line intersection and rectangle helpers.

use bevel_geometry::{EdgeSizes, Point, Rect, find_intersection};

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
}

#[test]
fn test_crossing_diagonals_meet_in_the_middle() {
    let hit = find_intersection(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
    )
    .expect("diagonals intersect");
    assert!(approx(hit, Point::new(5.0, 5.0)));
}

#[test]
fn test_parallel_lines_do_not_intersect() {
    let hit = find_intersection(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 5.0),
        Point::new(10.0, 5.0),
    );
    assert_eq!(hit, None);
}

#[test]
fn test_coincident_lines_report_no_intersection() {
    let hit = find_intersection(
        Point::new(0.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(1.0, 1.0),
        Point::new(3.0, 3.0),
    );
    assert_eq!(hit, None);
}

#[test]
fn test_intersection_outside_segments() {
    // Lines are infinite: x = 0 and y = 20 meet at (0, 20).
    let hit = find_intersection(
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(5.0, 20.0),
        Point::new(6.0, 20.0),
    )
    .expect("perpendicular lines intersect");
    assert!(approx(hit, Point::new(0.0, 20.0)));
}

#[test]
fn test_rect_accessors() {
    let rect = Rect::new(2.0, 3.0, 10.0, 20.0);
    assert_eq!(rect.max_x(), 12.0);
    assert_eq!(rect.max_y(), 23.0);
    assert_eq!(rect.origin(), Point::new(2.0, 3.0));
    assert!(!rect.is_empty());
    assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
    assert_eq!(rect.translated(1.0, -1.0), Rect::new(3.0, 2.0, 10.0, 20.0));
}

#[test]
fn test_expanded_by_positive_outsets_grows() {
    let rect = Rect::new(10.0, 10.0, 10.0, 10.0).expanded(EdgeSizes::uniform(2.0));
    assert_eq!(rect, Rect::new(8.0, 8.0, 14.0, 14.0));
}
