use serde::{Deserialize, Serialize};

use seatplan_core::Point;

use super::ShapeGeometry;
use crate::bounds::ElementBounds;
use crate::spatial_index::Bounds;

pub const LINE_PADDING: f64 = 5.0;

/// Straight line from the element anchor to `end` (relative to the anchor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineShape {
    pub end: Point,
}

impl LineShape {
    pub fn new(end: Point) -> Self {
        Self { end }
    }

    /// Direction of the line in degrees.
    pub fn angle_degrees(&self) -> f64 {
        self.end.y.atan2(self.end.x).to_degrees()
    }

    pub fn length(&self) -> f64 {
        Point::default().distance_to(&self.end)
    }
}

impl ShapeGeometry for LineShape {
    /// The element rotation is ignored: a line's rotation is its direction.
    fn bounds(&self, anchor: Point, _rotation: f64) -> ElementBounds {
        let start = anchor;
        let end = self.end.translated(anchor.x, anchor.y);
        let core = Bounds::new(
            start.x.min(end.x),
            start.y.min(end.y),
            start.x.max(end.x),
            start.y.max(end.y),
        );
        ElementBounds::padded(core, LINE_PADDING, LINE_PADDING, self.angle_degrees(), anchor)
    }
}
