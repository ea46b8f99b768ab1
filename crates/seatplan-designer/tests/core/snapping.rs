use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use seatplan_core::{LayoutError, SnappingConfig};
use seatplan_designer::{
    Clock, Element, ElementId, ElementShape, GuideOrientation, RectangleTable, SnapEngine,
    SnapState, SnapTuning,
};

#[derive(Debug, Clone, Default)]
struct ManualClock(Rc<Cell<Duration>>);

impl ManualClock {
    fn set_millis(&self, millis: u64) {
        self.0.set(Duration::from_millis(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.0.get()
    }
}

fn unthrottled() -> SnapTuning {
    SnapTuning {
        throttle_interval: Duration::ZERO,
        ..SnapTuning::default()
    }
}

fn engine_with(config: SnappingConfig, elements: &[Element]) -> SnapEngine {
    let mut engine = SnapEngine::new(config).with_tuning(unthrottled());
    engine.rebuild(elements);
    engine
}

fn two_tables() -> Vec<Element> {
    vec![
        Element::round_table("t1", 400.0, 300.0, 50.0),
        Element::round_table("t2", 600.0, 300.0, 50.0),
    ]
}

#[test]
fn test_center_alignment_between_tables() {
    let tables = two_tables();
    for proposed_y in [300.0, 304.0, 297.0, 308.0] {
        let mut engine = engine_with(SnappingConfig::enabled(), &tables);
        let result = engine.detect_snap_targets(&tables[0], 400.0, proposed_y);

        assert!(result.snapped_y, "y = {proposed_y}");
        assert!(!result.snapped_x);
        assert_eq!(result.y, 300.0);
        assert_eq!(result.x, 400.0);

        assert_eq!(result.guides.len(), 1);
        let guide = &result.guides[0];
        assert_eq!(guide.orientation, GuideOrientation::Horizontal);
        assert_eq!(guide.position, 300.0);
        assert_eq!(guide.alignment_type, "center-y-to-center-y");
        assert_eq!(guide.source_element, ElementId::from("t1"));
        assert_eq!(guide.target_element, ElementId::from("t2"));
        assert_eq!(guide.start, 290.0);
        assert_eq!(guide.end, 710.0);
    }
}

#[test]
fn test_out_of_range_does_not_snap() {
    let tables = two_tables();
    let mut engine = engine_with(SnappingConfig::enabled(), &tables);
    let result = engine.detect_snap_targets(&tables[0], 400.0, 340.0);
    assert!(!result.is_snapped());
    assert_eq!((result.x, result.y), (400.0, 340.0));
    assert!(result.guides.is_empty());
}

#[test]
fn test_hysteresis_holds_established_snap() {
    let tables = two_tables();
    let mut engine = engine_with(SnappingConfig::enabled(), &tables);

    let first = engine.detect_snap_targets(&tables[0], 400.0, 305.0);
    assert!(first.snapped_y);
    assert_eq!(
        engine.snap_state().y.alignment_type.as_deref(),
        Some("center-y-to-center-y")
    );

    // 12px is beyond the threshold but within 1.5x of it.
    let held = engine.detect_snap_targets(&tables[0], 400.0, 312.0);
    assert!(held.snapped_y);
    assert_eq!(held.y, 300.0);

    let released = engine.detect_snap_targets(&tables[0], 400.0, 317.0);
    assert!(!released.snapped_y);
    assert_eq!(released.y, 317.0);
    assert!(!engine.snap_state().y.snapped);
}

#[test]
fn test_no_hysteresis_without_prior_snap() {
    let tables = two_tables();
    let mut engine = engine_with(SnappingConfig::enabled(), &tables);
    assert!(!engine.detect_snap_targets(&tables[0], 400.0, 312.0).snapped_y);

    engine.detect_snap_targets(&tables[0], 400.0, 305.0);
    engine.end_drag();
    assert_eq!(engine.snap_state(), &SnapState::default());
    assert!(!engine.detect_snap_targets(&tables[0], 400.0, 312.0).snapped_y);
}

fn line_and_table() -> Vec<Element> {
    vec![
        Element::line("d", 350.0, 296.0, 450.0, 296.0),
        Element::new(
            "r",
            520.0,
            300.0,
            ElementShape::RectangleTable(RectangleTable::new(100.0, 100.0).with_seats(0, 0)),
        ),
    ]
}

#[test]
fn test_center_preferred_over_closer_edge() {
    let elements = line_and_table();
    let mut engine = engine_with(SnappingConfig::enabled(), &elements);
    let result = engine.detect_snap_targets(&elements[0], 350.0, 296.0);

    assert!(result.snapped_y);
    assert_eq!(result.y, 300.0);
    assert_eq!(
        engine.snap_state().y.alignment_type.as_deref(),
        Some("center-y-to-center-y")
    );
}

#[test]
fn test_closer_edge_wins_without_center_priority() {
    let elements = line_and_table();
    let mut config = SnappingConfig::enabled();
    config.prioritize_center_alignment = false;
    let mut engine = engine_with(config, &elements);
    let result = engine.detect_snap_targets(&elements[0], 350.0, 296.0);

    assert!(result.snapped_y);
    assert_eq!(result.y, 295.0);
    assert_eq!(
        engine.snap_state().y.alignment_type.as_deref(),
        Some("bottom-to-center-y")
    );
    // The line's right end also lands on the table's left edge.
    assert!(result.snapped_x);
    assert_eq!(result.x, 352.0);
}

#[test]
fn test_center_snaps_to_row_edge_midpoint() {
    // The row label shifts the visual midpoint (x = 320) away from the
    // seat center (x = 335).
    let elements = vec![
        Element::seating_row("row", 200.0, 500.0, 10),
        Element::round_table("t", 322.0, 400.0, 30.0),
    ];
    let mut engine = engine_with(SnappingConfig::enabled(), &elements);
    let result = engine.detect_snap_targets(&elements[1], 322.0, 400.0);

    assert!(result.snapped_x);
    assert!(!result.snapped_y);
    assert_eq!((result.x, result.y), (320.0, 400.0));
    assert_eq!(
        engine.snap_state().x.alignment_type.as_deref(),
        Some("center-x-to-top")
    );

    assert_eq!(result.guides.len(), 1);
    let guide = &result.guides[0];
    assert_eq!(guide.orientation, GuideOrientation::Vertical);
    assert_eq!(guide.position, 320.0);
    assert_eq!(guide.target_element, ElementId::from("row"));
}

#[test]
fn test_non_finite_position_does_not_snap() {
    let tables = two_tables();
    let mut engine = engine_with(SnappingConfig::enabled(), &tables);
    assert!(engine.detect_snap_targets(&tables[0], 400.0, 304.0).snapped_y);

    let result = engine.detect_snap_targets(&tables[0], f64::NAN, 300.0);
    assert!(!result.is_snapped());
    assert!(result.x.is_nan());
    assert_eq!(result.y, 300.0);
    assert!(result.guides.is_empty());
    assert_eq!(engine.snap_state(), &SnapState::default());

    let result = engine.detect_snap_targets(&tables[0], 400.0, f64::INFINITY);
    assert!(!result.is_snapped());
    assert!(result.guides.is_empty());
    assert_eq!(engine.stats().index_queries, 1);
}

#[test]
fn test_corner_points_do_not_override_center() {
    let tables = two_tables();
    let mut config = SnappingConfig::enabled();
    config.enable_corner_snapping = true;
    let mut engine = engine_with(config, &tables);
    let result = engine.detect_snap_targets(&tables[0], 400.0, 304.0);

    assert_eq!(result.y, 300.0);
    assert_eq!(result.guides[0].alignment_type, "center-y-to-center-y");
}

#[test]
fn test_disabled_engine_returns_proposal() {
    let tables = two_tables();
    let mut engine = SnapEngine::default().with_tuning(unthrottled());
    engine.rebuild(&tables);

    let result = engine.detect_snap_targets(&tables[0], 400.0, 304.0);
    assert!(!result.is_snapped());
    assert_eq!(result.y, 304.0);
    assert_eq!(engine.stats().detections, 0);
}

#[test]
fn test_without_index_returns_proposal() {
    let tables = two_tables();
    let mut engine = SnapEngine::new(SnappingConfig::enabled());
    assert!(engine.index().is_none());
    let result = engine.detect_snap_targets(&tables[0], 400.0, 304.0);
    assert!(!result.is_snapped());
}

#[test]
fn test_unindexed_dragged_element_does_not_snap() {
    let tables = two_tables();
    let mut engine = engine_with(SnappingConfig::enabled(), &tables);
    let stranger = Element::round_table("new", 400.0, 300.0, 50.0);
    let result = engine.detect_snap_targets(&stranger, 400.0, 304.0);
    assert!(!result.is_snapped());
    assert_eq!(result.y, 304.0);
}

#[test]
fn test_hidden_guides_still_snap() {
    let tables = two_tables();
    let mut engine = engine_with(SnappingConfig::enabled(), &tables);
    engine.set_show_alignment_guides(false);

    let result = engine.detect_snap_targets(&tables[0], 400.0, 304.0);
    assert!(result.snapped_y);
    assert_eq!(result.y, 300.0);
    assert!(result.guides.is_empty());
}

#[test]
fn test_throttle_returns_previous_guides() {
    let tables = two_tables();
    let clock = ManualClock::default();
    let mut engine = SnapEngine::new(SnappingConfig::enabled()).with_clock(Box::new(clock.clone()));
    engine.rebuild(&tables);

    let first = engine.detect_snap_targets(&tables[0], 400.0, 304.0);
    assert!(first.snapped_y);

    clock.set_millis(5);
    let throttled = engine.detect_snap_targets(&tables[0], 400.0, 306.0);
    assert_eq!((throttled.x, throttled.y), (400.0, 306.0));
    assert!(!throttled.is_snapped());
    assert_eq!(throttled.guides, first.guides);

    let stats = engine.stats();
    assert_eq!(stats.detections, 1);
    assert_eq!(stats.throttled, 1);
    assert_eq!(stats.index_queries, 1);

    clock.set_millis(20);
    let again = engine.detect_snap_targets(&tables[0], 400.0, 306.0);
    assert!(again.snapped_y);
    assert_eq!(again.y, 300.0);
    assert_eq!(engine.stats().detections, 2);
}

#[test]
fn test_update_element_moves_target() {
    let mut tables = two_tables();
    let mut engine = engine_with(SnappingConfig::enabled(), &tables);

    tables[1].y = 500.0;
    engine.update_element(&tables[1]).unwrap();
    assert_eq!(engine.indexed_bounds(&tables[1].id).unwrap().center_y, 500.0);

    assert!(!engine.detect_snap_targets(&tables[0], 400.0, 304.0).snapped_y);
    engine.end_drag();
    let result = engine.detect_snap_targets(&tables[0], 400.0, 504.0);
    assert!(result.snapped_y);
    assert_eq!(result.y, 500.0);
}

#[test]
fn test_update_element_builds_index_lazily() {
    let tables = two_tables();
    let mut engine = SnapEngine::new(SnappingConfig::enabled()).with_tuning(unthrottled());
    for table in &tables {
        engine.update_element(table).unwrap();
    }
    assert_eq!(engine.index().map(|i| i.len()), Some(2));
    assert!(engine.detect_snap_targets(&tables[0], 400.0, 304.0).snapped_y);
}

#[test]
fn test_remove_element() {
    let tables = two_tables();
    let mut engine = engine_with(SnappingConfig::enabled(), &tables);

    engine.remove_element(&tables[1].id).unwrap();
    assert!(!engine.detect_snap_targets(&tables[0], 400.0, 304.0).snapped_y);

    let err = engine.remove_element(&tables[1].id).unwrap_err();
    assert_eq!(
        err,
        LayoutError::ElementNotIndexed {
            element_id: "t2".to_string()
        }
    );
}

#[test]
fn test_rebuild_skips_unsupported_shapes() {
    let elements = Element::list_from_json(
        r#"[
            {"id":"a","x":0,"y":0,"shape":{"type":"roundTable","radius":40}},
            {"id":"b","x":200,"y":0,"shape":{"type":"stage","width":300}},
            {"id":"c","x":0,"y":200,"shape":{"type":"generic"}}
        ]"#,
    )
    .unwrap();

    let mut engine = SnapEngine::new(SnappingConfig::enabled());
    assert_eq!(engine.rebuild(&elements), 2);
    assert!(engine.indexed_bounds(&ElementId::from("b")).is_none());
    assert!(engine.update_element(&elements[1]).is_err());
}

#[test]
fn test_disabling_resets_state() {
    let tables = two_tables();
    let mut engine = engine_with(SnappingConfig::enabled(), &tables);
    engine.detect_snap_targets(&tables[0], 400.0, 304.0);
    assert!(engine.snap_state().y.snapped);

    engine.set_snapping_enabled(false);
    assert!(!engine.snap_state().y.snapped);
    assert!(!engine.detect_snap_targets(&tables[0], 400.0, 304.0).is_snapped());
}

#[test]
fn test_threshold_setter_clamps() {
    let mut engine = SnapEngine::new(SnappingConfig::enabled());
    engine.set_snap_threshold(500.0);
    assert_eq!(engine.config().snap_threshold(), 20.0);
    engine.set_snap_threshold(0.0);
    assert_eq!(engine.config().snap_threshold(), 5.0);
}

#[test]
fn test_guide_serializes_for_renderer() {
    let tables = two_tables();
    let mut engine = engine_with(SnappingConfig::enabled(), &tables);
    let result = engine.detect_snap_targets(&tables[0], 400.0, 304.0);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["snappedY"], true);
    let guide = &json["guides"][0];
    assert_eq!(guide["type"], "horizontal");
    assert_eq!(guide["sourceElement"], "t1");
    assert_eq!(guide["targetElement"], "t2");
    assert_eq!(guide["alignmentType"], "center-y-to-center-y");
}
