use serde::{Deserialize, Serialize};

use seatplan_core::Point;

use super::ShapeGeometry;
use crate::bounds::ElementBounds;
use crate::spatial_index::Bounds;

/// Estimated advance of one character. Glyphs are not measured.
pub const CHAR_WIDTH: f64 = 8.0;
pub const TEXT_HEIGHT: f64 = 20.0;
pub const TEXT_PADDING: f64 = 4.0;

/// Free text label centered on the element anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
}

impl TextLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn estimated_width(&self) -> f64 {
        self.text.chars().count() as f64 * CHAR_WIDTH
    }
}

impl ShapeGeometry for TextLabel {
    fn bounds(&self, anchor: Point, rotation: f64) -> ElementBounds {
        let half_w = self.estimated_width() / 2.0;
        let half_h = TEXT_HEIGHT / 2.0;
        let core = Bounds::new(
            anchor.x - half_w,
            anchor.y - half_h,
            anchor.x + half_w,
            anchor.y + half_h,
        );
        ElementBounds::padded(core, TEXT_PADDING, TEXT_PADDING, rotation, anchor)
    }
}
