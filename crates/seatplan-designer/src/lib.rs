//! # SeatPlan Designer
//!
//! Layout model and real-time alignment snapping for the seating editor.
//!
//! ## Core Components
//!
//! - **Model**: tables, seating rows, lines, polygons and labels as a closed
//!   sum type of shapes anchored at a position
//! - **Bounds**: core and visual boxes per shape, plus rotation data
//! - **Alignment points**: edge midpoints and centers used for matching
//! - **Spatial index**: arena-backed region quadtree for neighbor lookup
//! - **Snapping**: detection, conflict resolution and hysteresis
//!
//! ## Architecture
//!
//! ```text
//! SnapEngine
//!   ├── SpatialIndex<ElementId>   (visual boxes)
//!   ├── bounds_of / bounds_at_position
//!   └── alignment_points_of
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use seatplan_core::SnappingConfig;
//! use seatplan_designer::{Element, SnapEngine};
//!
//! let tables = vec![
//!     Element::round_table("t1", 400.0, 300.0, 50.0),
//!     Element::round_table("t2", 600.0, 300.0, 50.0),
//! ];
//! let mut engine = SnapEngine::new(SnappingConfig::enabled());
//! engine.rebuild(&tables);
//!
//! let result = engine.detect_snap_targets(&tables[0], 400.0, 304.0);
//! assert!(result.snapped_y);
//! assert_eq!(result.y, 300.0);
//! ```

pub mod alignment;
pub mod bounds;
pub mod model;
pub mod snapping;
pub mod spatial_index;

pub use alignment::{alignment_points_of, AlignmentPoint, AlignmentPointKind, AlignmentPoints};
pub use bounds::{bounds_at_position, bounds_of, ElementBounds, DEFAULT_ELEMENT_SIZE};
pub use model::{
    Element, ElementId, ElementShape, LineShape, PolygonShape, RectangleTable, RoundTable,
    RowSegment, SeatingRow, SegmentedRow, ShapeGeometry, ShapeType, TextLabel,
};
pub use snapping::{
    AlignmentGuide, AlignmentMatch, Axis, AxisSnapState, Clock, GuideOrientation, SnapEngine,
    SnapResult, SnapState, SnapStats, SnapTuning, SystemClock,
};
pub use spatial_index::{Bounds, IndexConfig, IndexEntry, SpatialIndex, SpatialIndexStats};
