//! Layout elements.
//!
//! An element is a stable id, an anchor position, a rotation and one shape
//! out of a closed set. Shape geometry is stored relative to the anchor, so
//! moving an element only ever touches `x` and `y`.

use std::fmt;

use serde::{Deserialize, Serialize};

use seatplan_core::Point;

use crate::bounds::ElementBounds;

mod line;
mod polygon;
mod rectangle_table;
mod round_table;
mod seating_row;
mod segmented_row;
mod text;

pub use line::LineShape;
pub use polygon::PolygonShape;
pub use rectangle_table::RectangleTable;
pub use round_table::RoundTable;
pub use seating_row::SeatingRow;
pub use segmented_row::{RowSegment, SegmentedRow};
pub use text::TextLabel;

/// Distance from a table edge to the center of an attached chair.
pub const CHAIR_OFFSET: f64 = 15.0;
/// Radius of a rendered chair.
pub const CHAIR_RADIUS: f64 = 12.0;
/// Extra breathing room around chairs and labels.
pub const EXTRA_MARGIN: f64 = 13.0;
/// Padding that covers a full ring of attached chairs.
pub const CHAIR_PADDING: f64 = CHAIR_OFFSET + CHAIR_RADIUS + EXTRA_MARGIN;

/// Per-shape bounds computation, in world coordinates.
pub trait ShapeGeometry {
    /// Bounds of the shape when its element is anchored at `anchor` with the
    /// element-level `rotation` (degrees).
    fn bounds(&self, anchor: Point, rotation: f64) -> ElementBounds;
}

/// Stable element identifier handed over by the layout store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mints a fresh random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeType {
    RoundTable,
    RectangleTable,
    SeatingRow,
    SegmentedRow,
    Line,
    Polygon,
    Text,
    Generic,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RoundTable => "roundTable",
            Self::RectangleTable => "rectangleTable",
            Self::SeatingRow => "seatingRow",
            Self::SegmentedRow => "segmentedRow",
            Self::Line => "line",
            Self::Polygon => "polygon",
            Self::Text => "text",
            Self::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// The closed set of element shapes.
///
/// Documents are tagged by a `type` field. A tag outside the known set
/// deserializes to `Unsupported` so the failure surfaces when bounds are
/// requested rather than when the layout is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ElementShape {
    RoundTable(RoundTable),
    RectangleTable(RectangleTable),
    SeatingRow(SeatingRow),
    SegmentedRow(SegmentedRow),
    Line(LineShape),
    Polygon(PolygonShape),
    Text(TextLabel),
    /// Placeholder element with no geometry of its own
    Generic,
    #[serde(untagged)]
    Unsupported {
        #[serde(rename = "type")]
        kind: String,
    },
}

impl ElementShape {
    /// Returns the shape type, or `None` for an unsupported tag.
    pub fn shape_type(&self) -> Option<ShapeType> {
        match self {
            Self::RoundTable(_) => Some(ShapeType::RoundTable),
            Self::RectangleTable(_) => Some(ShapeType::RectangleTable),
            Self::SeatingRow(_) => Some(ShapeType::SeatingRow),
            Self::SegmentedRow(_) => Some(ShapeType::SegmentedRow),
            Self::Line(_) => Some(ShapeType::Line),
            Self::Polygon(_) => Some(ShapeType::Polygon),
            Self::Text(_) => Some(ShapeType::Text),
            Self::Generic => Some(ShapeType::Generic),
            Self::Unsupported { .. } => None,
        }
    }

    /// Tag name as it appears in layout documents.
    pub fn kind(&self) -> String {
        match self {
            Self::Unsupported { kind } => kind.clone(),
            other => other
                .shape_type()
                .map(|t| t.to_string())
                .unwrap_or_default(),
        }
    }
}

/// An element of the seating layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees, clockwise on screen
    #[serde(default)]
    pub rotation: f64,
    pub shape: ElementShape,
}

impl Element {
    pub fn new(id: impl Into<ElementId>, x: f64, y: f64, shape: ElementShape) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            rotation: 0.0,
            shape,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn round_table(id: impl Into<ElementId>, x: f64, y: f64, radius: f64) -> Self {
        Self::new(id, x, y, ElementShape::RoundTable(RoundTable::new(radius)))
    }

    pub fn rectangle_table(
        id: impl Into<ElementId>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self::new(
            id,
            x,
            y,
            ElementShape::RectangleTable(RectangleTable::new(width, height)),
        )
    }

    pub fn seating_row(id: impl Into<ElementId>, x: f64, y: f64, seat_count: u32) -> Self {
        Self::new(id, x, y, ElementShape::SeatingRow(SeatingRow::new(seat_count)))
    }

    pub fn line(id: impl Into<ElementId>, x: f64, y: f64, end_x: f64, end_y: f64) -> Self {
        Self::new(
            id,
            x,
            y,
            ElementShape::Line(LineShape::new(Point::new(end_x - x, end_y - y))),
        )
    }

    pub fn text(id: impl Into<ElementId>, x: f64, y: f64, text: impl Into<String>) -> Self {
        Self::new(id, x, y, ElementShape::Text(TextLabel::new(text)))
    }

    /// Parses a JSON array of elements as exported by a layout store.
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Element>> {
        serde_json::from_str(json)
    }
}
