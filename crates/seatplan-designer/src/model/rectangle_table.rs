use serde::{Deserialize, Serialize};

use seatplan_core::Point;

use super::{ShapeGeometry, CHAIR_PADDING, EXTRA_MARGIN};
use crate::bounds::ElementBounds;
use crate::spatial_index::Bounds;

/// Rectangular table centered on its element anchor.
///
/// Chairs sit along the long sides (`side_seats`, above and below) and the
/// short ends (`end_seats`, left and right), so horizontal and vertical
/// padding are derived independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleTable {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_side_seats")]
    pub side_seats: u32,
    #[serde(default)]
    pub end_seats: u32,
}

fn default_side_seats() -> u32 {
    3
}

impl RectangleTable {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            side_seats: default_side_seats(),
            end_seats: 0,
        }
    }

    pub fn with_seats(mut self, side_seats: u32, end_seats: u32) -> Self {
        self.side_seats = side_seats;
        self.end_seats = end_seats;
        self
    }

    fn padding(&self) -> (f64, f64) {
        let pad_x = if self.end_seats > 0 {
            CHAIR_PADDING
        } else {
            EXTRA_MARGIN
        };
        let pad_y = if self.side_seats > 0 {
            CHAIR_PADDING
        } else {
            EXTRA_MARGIN
        };
        (pad_x, pad_y)
    }
}

impl ShapeGeometry for RectangleTable {
    fn bounds(&self, anchor: Point, rotation: f64) -> ElementBounds {
        let half_w = self.width.max(0.0) / 2.0;
        let half_h = self.height.max(0.0) / 2.0;
        let core = Bounds::new(
            anchor.x - half_w,
            anchor.y - half_h,
            anchor.x + half_w,
            anchor.y + half_h,
        );
        let (pad_x, pad_y) = self.padding();
        ElementBounds::padded(core, pad_x, pad_y, rotation, anchor)
    }
}
