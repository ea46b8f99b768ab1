//! Alignment point extraction.
//!
//! Every element exposes a handful of canonical points that snapping
//! compares against its neighbors: the midpoints of the visual box edges
//! and the box center. Corners are available behind a flag. Points are
//! rotated into world space when the element is rotated.

use std::fmt;

use smallvec::SmallVec;

use seatplan_core::{rotate_point, Point};

use crate::bounds::ElementBounds;
use crate::model::ElementId;

/// Which canonical point of an element this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentPointKind {
    Left,
    CenterX,
    Right,
    Top,
    CenterY,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl AlignmentPointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::CenterX => "center-x",
            Self::Right => "right",
            Self::Top => "top",
            Self::CenterY => "center-y",
            Self::Bottom => "bottom",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    pub fn is_center(&self) -> bool {
        matches!(self, Self::CenterX | Self::CenterY)
    }

    /// Points that can align along the x axis (vertical guides).
    pub fn aligns_on_x(&self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::CenterX) || self.is_corner()
    }

    /// Points that can align along the y axis (horizontal guides).
    pub fn aligns_on_y(&self) -> bool {
        matches!(self, Self::Top | Self::Bottom | Self::CenterY) || self.is_corner()
    }
}

impl fmt::Display for AlignmentPointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentPoint {
    pub x: f64,
    pub y: f64,
    pub kind: AlignmentPointKind,
    pub element_id: ElementId,
}

impl AlignmentPoint {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Up to six edge/center points plus four optional corners, kept inline.
pub type AlignmentPoints = SmallVec<[AlignmentPoint; 10]>;

/// Extracts the alignment points of an element from its bounds.
///
/// Always yields the four visual edge midpoints and two coincident center
/// points (`center-x`, `center-y`); with `include_corners` the four visual
/// corners are appended after them.
pub fn alignment_points_of(
    bounds: &ElementBounds,
    element_id: &ElementId,
    include_corners: bool,
) -> AlignmentPoints {
    let mid_x = (bounds.visual_left + bounds.visual_right) / 2.0;
    let mid_y = (bounds.visual_top + bounds.visual_bottom) / 2.0;

    let mut raw: SmallVec<[(AlignmentPointKind, Point); 10]> = SmallVec::new();
    raw.push((AlignmentPointKind::Left, Point::new(bounds.visual_left, mid_y)));
    raw.push((AlignmentPointKind::Top, Point::new(mid_x, bounds.visual_top)));
    raw.push((AlignmentPointKind::Right, Point::new(bounds.visual_right, mid_y)));
    raw.push((AlignmentPointKind::Bottom, Point::new(mid_x, bounds.visual_bottom)));
    raw.push((
        AlignmentPointKind::CenterX,
        Point::new(bounds.center_x, bounds.center_y),
    ));
    raw.push((
        AlignmentPointKind::CenterY,
        Point::new(bounds.center_x, bounds.center_y),
    ));

    if include_corners {
        raw.push((
            AlignmentPointKind::TopLeft,
            Point::new(bounds.visual_left, bounds.visual_top),
        ));
        raw.push((
            AlignmentPointKind::TopRight,
            Point::new(bounds.visual_right, bounds.visual_top),
        ));
        raw.push((
            AlignmentPointKind::BottomLeft,
            Point::new(bounds.visual_left, bounds.visual_bottom),
        ));
        raw.push((
            AlignmentPointKind::BottomRight,
            Point::new(bounds.visual_right, bounds.visual_bottom),
        ));
    }

    let rotated = bounds.rotation != 0.0;
    raw.into_iter()
        .map(|(kind, p)| {
            let p = if rotated {
                rotate_point(p, bounds.rotation_origin, bounds.rotation)
            } else {
                p
            };
            AlignmentPoint {
                x: p.x,
                y: p.y,
                kind,
                element_id: element_id.clone(),
            }
        })
        .collect()
}
