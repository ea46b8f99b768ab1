use proptest::prelude::*;
use seatplan_core::{LayoutError, Point};
use seatplan_designer::model::{CHAIR_PADDING, EXTRA_MARGIN};
use seatplan_designer::{
    bounds_at_position, bounds_of, Element, ElementShape, PolygonShape, RectangleTable, RowSegment,
    SegmentedRow, DEFAULT_ELEMENT_SIZE,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_round_table_visual_contains_core() {
    let table = Element::round_table("t", 400.0, 300.0, 50.0);
    let b = bounds_of(&table).unwrap();
    assert!(b.visual_left < b.left);
    assert!(b.visual_top < b.top);
    assert!(b.visual_right > b.right);
    assert!(b.visual_bottom > b.bottom);
    assert_eq!(b.visual_right - b.right, CHAIR_PADDING);
}

#[test]
fn test_rectangle_table_without_chairs_keeps_margin() {
    let table = Element::new(
        "r",
        0.0,
        0.0,
        ElementShape::RectangleTable(RectangleTable::new(200.0, 80.0).with_seats(0, 0)),
    );
    let b = bounds_of(&table).unwrap();
    assert_eq!(b.left - b.visual_left, EXTRA_MARGIN);
    assert_eq!(b.top - b.visual_top, EXTRA_MARGIN);
}

#[test]
fn test_rotation_carried_with_anchor_origin() {
    let table = Element::rectangle_table("r", 100.0, 50.0, 120.0, 60.0).with_rotation(45.0);
    let b = bounds_of(&table).unwrap();
    assert_eq!(b.rotation, 45.0);
    assert_eq!(b.rotation_origin, Point::new(100.0, 50.0));
    // The core box stays axis aligned.
    assert_eq!(b.width, 120.0);
    assert_eq!(b.height, 60.0);
}

#[test]
fn test_segmented_row_origin_is_envelope_center() {
    let row = Element::new(
        "s",
        50.0,
        50.0,
        ElementShape::SegmentedRow(SegmentedRow::new(vec![RowSegment::new(
            Point::new(0.0, 0.0),
            Point::new(200.0, 100.0),
        )])),
    );
    let b = bounds_of(&row).unwrap();
    assert_eq!(b.rotation_origin, Point::new(150.0, 100.0));
    assert_ne!(b.rotation_origin, row.position());
}

#[test]
fn test_empty_polygon_uses_default_box() {
    let poly = Element::new(
        "p",
        10.0,
        20.0,
        ElementShape::Polygon(PolygonShape::default()),
    )
    .with_rotation(30.0);
    let b = bounds_of(&poly).unwrap();
    assert_eq!(b.width, DEFAULT_ELEMENT_SIZE);
    assert_eq!(b.height, DEFAULT_ELEMENT_SIZE);
    assert_eq!(b.center(), Point::new(10.0, 20.0));
    assert_eq!(b.rotation, 0.0);
}

#[test]
fn test_line_rotation_follows_direction() {
    let line = Element::line("l", 0.0, 0.0, 100.0, 100.0).with_rotation(10.0);
    let b = bounds_of(&line).unwrap();
    assert!(approx(b.rotation, 45.0));
}

#[test]
fn test_text_bounds_from_char_count() {
    let label = Element::text("txt", 100.0, 100.0, "Table 12");
    let b = bounds_of(&label).unwrap();
    assert_eq!(b.width, 64.0);
    assert_eq!(b.center(), Point::new(100.0, 100.0));
}

#[test]
fn test_bounds_at_position_translates_everything() {
    let row = Element::seating_row("row", 100.0, 100.0, 4).with_rotation(20.0);
    let here = bounds_of(&row).unwrap();
    let there = bounds_at_position(&row, 150.0, 80.0).unwrap();
    assert!(approx(there.left, here.left + 50.0));
    assert!(approx(there.visual_left, here.visual_left + 50.0));
    assert!(approx(there.top, here.top - 20.0));
    assert!(approx(there.center_x, here.center_x + 50.0));
    assert_eq!(there.rotation_origin, Point::new(150.0, 80.0));
    assert_eq!(there.width, here.width);
    // The element itself is untouched.
    assert_eq!(row.position(), Point::new(100.0, 100.0));
}

#[test]
fn test_unsupported_shape_error() {
    let json = r#"{"id":"stage-1","x":0,"y":0,"shape":{"type":"stage","width":300}}"#;
    let element: Element = serde_json::from_str(json).unwrap();
    assert_eq!(
        bounds_of(&element),
        Err(LayoutError::UnsupportedShape {
            element_id: "stage-1".to_string(),
            kind: "stage".to_string(),
        })
    );
}

fn table_strategy() -> impl Strategy<Value = Element> {
    let round = (-1000.0..1000.0f64, -1000.0..1000.0f64, 1.0..200.0f64)
        .prop_map(|(x, y, r)| Element::round_table("t", x, y, r));
    let rect = (
        -1000.0..1000.0f64,
        -1000.0..1000.0f64,
        1.0..300.0f64,
        1.0..300.0f64,
        0u32..6,
        0u32..3,
    )
        .prop_map(|(x, y, w, h, side, end)| {
            Element::new(
                "r",
                x,
                y,
                ElementShape::RectangleTable(RectangleTable::new(w, h).with_seats(side, end)),
            )
        });
    prop_oneof![round, rect]
}

proptest! {
    #[test]
    fn visual_box_contains_core_box(table in table_strategy()) {
        let b = bounds_of(&table).unwrap();
        prop_assert!(b.visual_left < b.left);
        prop_assert!(b.visual_top < b.top);
        prop_assert!(b.visual_right > b.right);
        prop_assert!(b.visual_bottom > b.bottom);
        prop_assert!(b.right >= b.left && b.bottom >= b.top);
    }

    #[test]
    fn bounds_at_current_position_is_identity(
        table in table_strategy(),
        rotation in -180.0..180.0f64,
    ) {
        let table = table.with_rotation(rotation);
        prop_assert_eq!(
            bounds_at_position(&table, table.x, table.y).unwrap(),
            bounds_of(&table).unwrap()
        );
    }
}
