use serde::{Deserialize, Serialize};

use seatplan_core::Point;

use super::ShapeGeometry;
use crate::bounds::ElementBounds;
use crate::spatial_index::Bounds;

/// Padding around the segment envelope, enough to cover the seats.
pub const SEGMENT_PADDING: f64 = 15.0;

/// One straight stretch of a segmented row, relative to the element anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSegment {
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub seat_count: u32,
}

impl RowSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            seat_count: 0,
        }
    }
}

/// Row made of several segments, e.g. following a curved aisle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentedRow {
    #[serde(default)]
    pub segments: Vec<RowSegment>,
}

impl SegmentedRow {
    pub fn new(segments: Vec<RowSegment>) -> Self {
        Self { segments }
    }
}

impl ShapeGeometry for SegmentedRow {
    /// Unlike every other shape, the rotation origin is the center of the
    /// segment envelope rather than the element anchor.
    fn bounds(&self, anchor: Point, rotation: f64) -> ElementBounds {
        let endpoints = self
            .segments
            .iter()
            .flat_map(|s| [s.start, s.end])
            .map(|p| p.translated(anchor.x, anchor.y));
        let Some(core) = Bounds::envelope(endpoints) else {
            return ElementBounds::fallback(anchor, rotation);
        };
        let (cx, cy) = core.center();
        ElementBounds::padded(
            core,
            SEGMENT_PADDING,
            SEGMENT_PADDING,
            rotation,
            Point::new(cx, cy),
        )
    }
}
