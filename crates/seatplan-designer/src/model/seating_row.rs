use serde::{Deserialize, Serialize};

use seatplan_core::Point;

use super::ShapeGeometry;
use crate::bounds::ElementBounds;
use crate::spatial_index::Bounds;

/// Width of a row that has no seats yet.
pub const MIN_ROW_WIDTH: f64 = 40.0;
/// Space reserved before the first seat for the row label.
pub const ROW_LABEL_OFFSET: f64 = 30.0;
/// Padding around the seats of a row.
pub const ROW_PADDING: f64 = 5.0;

/// Straight row of seats.
///
/// The element anchor is the center of the first seat; seats extend along
/// the local +x axis and the label sits behind the anchor. Rotation is left
/// to consumers, who apply it about the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingRow {
    pub seat_count: u32,
    #[serde(default = "default_seat_spacing")]
    pub seat_spacing: f64,
    #[serde(default = "default_seat_width")]
    pub seat_width: f64,
}

fn default_seat_spacing() -> f64 {
    30.0
}

fn default_seat_width() -> f64 {
    24.0
}

impl SeatingRow {
    pub fn new(seat_count: u32) -> Self {
        Self {
            seat_count,
            seat_spacing: default_seat_spacing(),
            seat_width: default_seat_width(),
        }
    }

    /// Length of the row along its local x axis.
    pub fn length(&self) -> f64 {
        if self.seat_count > 0 {
            f64::from(self.seat_count - 1) * self.seat_spacing + self.seat_width
        } else {
            MIN_ROW_WIDTH
        }
    }
}

impl ShapeGeometry for SeatingRow {
    fn bounds(&self, anchor: Point, rotation: f64) -> ElementBounds {
        let half_seat = self.seat_width.max(0.0) / 2.0;
        let local_core = Bounds::new(-half_seat, -half_seat, -half_seat + self.length(), half_seat);
        let local_visual = Bounds::new(
            local_core.min_x - ROW_LABEL_OFFSET - ROW_PADDING,
            local_core.min_y - ROW_PADDING,
            local_core.max_x + ROW_PADDING,
            local_core.max_y + ROW_PADDING,
        );
        ElementBounds::new(
            local_core.translated(anchor.x, anchor.y),
            local_visual.translated(anchor.x, anchor.y),
            rotation,
            anchor,
        )
    }
}
