use serde::{Deserialize, Serialize};

use seatplan_core::Point;

use super::{ShapeGeometry, CHAIR_PADDING};
use crate::bounds::ElementBounds;
use crate::spatial_index::Bounds;

/// Round table centered on its element anchor, chairs arranged around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundTable {
    pub radius: f64,
    #[serde(default)]
    pub seat_count: u32,
}

impl RoundTable {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            seat_count: 8,
        }
    }
}

impl ShapeGeometry for RoundTable {
    fn bounds(&self, anchor: Point, rotation: f64) -> ElementBounds {
        let r = self.radius.max(0.0);
        let core = Bounds::new(anchor.x - r, anchor.y - r, anchor.x + r, anchor.y + r);
        ElementBounds::padded(core, CHAIR_PADDING, CHAIR_PADDING, rotation, anchor)
    }
}
