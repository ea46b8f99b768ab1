use seatplan_designer::{
    alignment_points_of, bounds_of, AlignmentPointKind, Element, ElementId, ElementShape,
    LineShape,
};
use seatplan_core::Point;

fn find(points: &[seatplan_designer::AlignmentPoint], kind: AlignmentPointKind) -> Point {
    points
        .iter()
        .find(|p| p.kind == kind)
        .map(|p| p.position())
        .unwrap()
}

fn close(a: Point, b: Point) -> bool {
    a.distance_to(&b) < 1e-9
}

#[test]
fn test_six_points_from_visual_box() {
    let table = Element::round_table("t", 400.0, 300.0, 50.0);
    let bounds = bounds_of(&table).unwrap();
    let points = alignment_points_of(&bounds, &table.id, false);

    assert_eq!(points.len(), 6);
    assert!(points.iter().all(|p| p.element_id == table.id));
    assert_eq!(find(&points, AlignmentPointKind::Left), Point::new(310.0, 300.0));
    assert_eq!(find(&points, AlignmentPointKind::Right), Point::new(490.0, 300.0));
    assert_eq!(find(&points, AlignmentPointKind::Top), Point::new(400.0, 210.0));
    assert_eq!(find(&points, AlignmentPointKind::Bottom), Point::new(400.0, 390.0));
    assert_eq!(find(&points, AlignmentPointKind::CenterX), Point::new(400.0, 300.0));
    assert_eq!(find(&points, AlignmentPointKind::CenterY), Point::new(400.0, 300.0));
}

#[test]
fn test_corners_are_appended_when_enabled() {
    let table = Element::rectangle_table("r", 0.0, 0.0, 100.0, 50.0);
    let bounds = bounds_of(&table).unwrap();
    let points = alignment_points_of(&bounds, &table.id, true);

    assert_eq!(points.len(), 10);
    assert!(points[..6].iter().all(|p| !p.kind.is_corner()));
    assert!(points[6..].iter().all(|p| p.kind.is_corner()));
    assert_eq!(
        find(&points, AlignmentPointKind::BottomRight),
        Point::new(bounds.visual_right, bounds.visual_bottom)
    );
}

#[test]
fn test_points_rotate_about_origin() {
    // Visual box of a 100x50 table with chairs on the long sides only.
    let table = Element::rectangle_table("r", 0.0, 0.0, 100.0, 50.0).with_rotation(90.0);
    let bounds = bounds_of(&table).unwrap();
    let points = alignment_points_of(&bounds, &table.id, false);

    // Left midpoint (visual_left, 0) turns onto the negative y axis.
    let left = find(&points, AlignmentPointKind::Left);
    assert!(close(left, Point::new(0.0, bounds.visual_left)));
    // The center sits on the rotation origin and does not move.
    assert!(close(find(&points, AlignmentPointKind::CenterX), Point::new(0.0, 0.0)));
}

#[test]
fn test_line_points_use_derived_rotation() {
    let line = Element::new(
        "l",
        0.0,
        0.0,
        ElementShape::Line(LineShape::new(Point::new(0.0, 100.0))),
    );
    let bounds = bounds_of(&line).unwrap();
    assert!((bounds.rotation - 90.0).abs() < 1e-9);
    let points = alignment_points_of(&bounds, &ElementId::from("l"), false);
    // Top midpoint (0, -5) rotated 90 degrees about the anchor.
    assert!(close(find(&points, AlignmentPointKind::Top), Point::new(5.0, 0.0)));
}

#[test]
fn test_axis_membership() {
    use AlignmentPointKind::*;
    for kind in [Left, Right, CenterX] {
        assert!(kind.aligns_on_x());
        assert!(!kind.aligns_on_y());
    }
    for kind in [Top, Bottom, CenterY] {
        assert!(kind.aligns_on_y());
        assert!(!kind.aligns_on_x());
    }
    for kind in [TopLeft, TopRight, BottomLeft, BottomRight] {
        assert!(kind.aligns_on_x() && kind.aligns_on_y());
    }
    assert_eq!(CenterX.to_string(), "center-x");
    assert_eq!(BottomLeft.as_str(), "bottom-left");
}
