//! Bounds oracle.
//!
//! Maps every element shape to its geometric bounds: the core box (the
//! shape itself, unrotated), the visual box (core plus attached chairs and
//! labels), the center, and the rotation with its origin. Bounds are
//! recomputed on demand; nothing here is cached.

use seatplan_core::{LayoutError, Point};

use crate::model::{Element, ElementShape, ShapeGeometry};
use crate::spatial_index::Bounds;

/// Side length of the box given to elements without geometry.
pub const DEFAULT_ELEMENT_SIZE: f64 = 100.0;

/// Geometric bounds of one element.
///
/// The core box is axis aligned and ignores rotation; consumers rotate
/// about `rotation_origin` when they need world-space points. The visual
/// box always contains the core box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Rotation in degrees
    pub rotation: f64,
    pub rotation_origin: Point,
    pub visual_left: f64,
    pub visual_top: f64,
    pub visual_right: f64,
    pub visual_bottom: f64,
}

impl ElementBounds {
    /// Builds bounds from a core and a visual box. The visual box is widened
    /// to cover the core box if it does not already.
    pub fn new(core: Bounds, visual: Bounds, rotation: f64, rotation_origin: Point) -> Self {
        let visual = visual.union(&core);
        let (center_x, center_y) = core.center();
        Self {
            left: core.min_x,
            top: core.min_y,
            right: core.max_x,
            bottom: core.max_y,
            width: core.width(),
            height: core.height(),
            center_x,
            center_y,
            rotation,
            rotation_origin,
            visual_left: visual.min_x,
            visual_top: visual.min_y,
            visual_right: visual.max_x,
            visual_bottom: visual.max_y,
        }
    }

    /// Core box expanded by independent horizontal and vertical padding.
    pub fn padded(core: Bounds, pad_x: f64, pad_y: f64, rotation: f64, origin: Point) -> Self {
        let visual = Bounds::new(
            core.min_x - pad_x,
            core.min_y - pad_y,
            core.max_x + pad_x,
            core.max_y + pad_y,
        );
        Self::new(core, visual, rotation, origin)
    }

    /// Fixed square centered on `anchor`, for elements that carry no geometry.
    pub fn fallback(anchor: Point, rotation: f64) -> Self {
        let half = DEFAULT_ELEMENT_SIZE / 2.0;
        let core = Bounds::new(anchor.x - half, anchor.y - half, anchor.x + half, anchor.y + half);
        Self::new(core, core, rotation, anchor)
    }

    pub fn core_box(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.right, self.bottom)
    }

    pub fn visual_box(&self) -> Bounds {
        Bounds::new(
            self.visual_left,
            self.visual_top,
            self.visual_right,
            self.visual_bottom,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Shifts every box and the rotation origin by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
            rotation_origin: self.rotation_origin.translated(dx, dy),
            visual_left: self.visual_left + dx,
            visual_top: self.visual_top + dy,
            visual_right: self.visual_right + dx,
            visual_bottom: self.visual_bottom + dy,
            ..*self
        }
    }
}

/// Computes the bounds of `element`.
///
/// Fails only for shapes outside the supported set; every supported shape
/// yields bounds, falling back to the default square when it has no data.
pub fn bounds_of(element: &Element) -> Result<ElementBounds, LayoutError> {
    let anchor = element.position();
    let rotation = element.rotation;
    let bounds = match &element.shape {
        ElementShape::RoundTable(shape) => shape.bounds(anchor, rotation),
        ElementShape::RectangleTable(shape) => shape.bounds(anchor, rotation),
        ElementShape::SeatingRow(shape) => shape.bounds(anchor, rotation),
        ElementShape::SegmentedRow(shape) => shape.bounds(anchor, rotation),
        ElementShape::Line(shape) => shape.bounds(anchor, rotation),
        ElementShape::Polygon(shape) => shape.bounds(anchor, rotation),
        ElementShape::Text(shape) => shape.bounds(anchor, rotation),
        ElementShape::Generic => ElementBounds::fallback(anchor, rotation),
        ElementShape::Unsupported { kind } => {
            return Err(LayoutError::UnsupportedShape {
                element_id: element.id.to_string(),
                kind: kind.clone(),
            })
        }
    };
    Ok(bounds)
}

/// Bounds `element` would have if its anchor were moved to `(x, y)`.
pub fn bounds_at_position(element: &Element, x: f64, y: f64) -> Result<ElementBounds, LayoutError> {
    let current = bounds_of(element)?;
    Ok(current.translated(x - element.x, y - element.y))
}
