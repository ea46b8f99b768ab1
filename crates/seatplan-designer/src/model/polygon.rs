use serde::{Deserialize, Serialize};

use seatplan_core::Point;

use super::ShapeGeometry;
use crate::bounds::ElementBounds;
use crate::spatial_index::Bounds;

pub const POLYGON_PADDING: f64 = 5.0;

/// Free-form area (stage, dance floor) given by vertices relative to the anchor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonShape {
    #[serde(default)]
    pub points: Vec<Point>,
}

impl PolygonShape {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl ShapeGeometry for PolygonShape {
    /// Polygons carry no rotation; the element rotation is ignored.
    fn bounds(&self, anchor: Point, _rotation: f64) -> ElementBounds {
        let vertices = self.points.iter().map(|p| p.translated(anchor.x, anchor.y));
        match Bounds::envelope(vertices) {
            Some(core) => {
                ElementBounds::padded(core, POLYGON_PADDING, POLYGON_PADDING, 0.0, anchor)
            }
            None => ElementBounds::fallback(anchor, 0.0),
        }
    }
}
