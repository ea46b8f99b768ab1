//! Value types produced and consumed by the snap engine.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::alignment::{AlignmentPoint, AlignmentPointKind};
use crate::model::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideOrientation {
    /// Constant x; drawn for alignments on the x axis
    Vertical,
    /// Constant y; drawn for alignments on the y axis
    Horizontal,
}

impl From<Axis> for GuideOrientation {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::Vertical,
            Axis::Y => Self::Horizontal,
        }
    }
}

/// A guide line for the renderer. Recomputed every detection, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentGuide {
    #[serde(rename = "type")]
    pub orientation: GuideOrientation,
    /// x for vertical guides, y for horizontal guides
    pub position: f64,
    pub start: f64,
    pub end: f64,
    pub source_element: ElementId,
    pub target_element: ElementId,
    /// `"<draggedType>-to-<targetType>"`
    pub alignment_type: String,
}

/// Formats the alignment type of a point pair, e.g. `"left-to-right"`.
pub fn alignment_type(dragged: AlignmentPointKind, target: AlignmentPointKind) -> String {
    format!("{}-to-{}", dragged.as_str(), target.as_str())
}

/// Candidate pairing of a dragged point with a neighbor point on one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentMatch {
    pub axis: Axis,
    pub dragged_point: AlignmentPoint,
    pub target_point: AlignmentPoint,
    pub distance: f64,
    /// Coordinate on `axis` the dragged point should move to
    pub snap_position: f64,
    /// Lower is better
    pub priority: f64,
}

impl AlignmentMatch {
    pub fn alignment_type(&self) -> String {
        alignment_type(self.dragged_point.kind, self.target_point.kind)
    }

    /// Both points are centers.
    pub fn is_center_match(&self) -> bool {
        self.dragged_point.kind.is_center() && self.target_point.kind.is_center()
    }

    pub fn is_same_kind(&self) -> bool {
        self.dragged_point.kind == self.target_point.kind
    }

    /// The target point is one that lies on the match axis by kind, e.g. a
    /// `center-y` target on the y axis rather than a `left` midpoint.
    pub fn target_on_axis(&self) -> bool {
        match self.axis {
            Axis::X => self.target_point.kind.aligns_on_x(),
            Axis::Y => self.target_point.kind.aligns_on_y(),
        }
    }

    pub fn target_id(&self) -> &ElementId {
        &self.target_point.element_id
    }

    /// Coordinate of the dragged point on the match axis.
    pub fn dragged_coordinate(&self) -> f64 {
        match self.axis {
            Axis::X => self.dragged_point.x,
            Axis::Y => self.dragged_point.y,
        }
    }
}

/// Outcome of one detection call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapResult {
    pub x: f64,
    pub y: f64,
    pub guides: Vec<AlignmentGuide>,
    pub snapped_x: bool,
    pub snapped_y: bool,
}

impl SnapResult {
    /// The proposed position, untouched.
    pub fn unsnapped(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            guides: Vec::new(),
            snapped_x: false,
            snapped_y: false,
        }
    }

    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Hysteresis memory for one axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisSnapState {
    pub snapped: bool,
    pub target_id: Option<ElementId>,
    pub alignment_type: Option<String>,
}

impl AxisSnapState {
    /// True when snapped to `target` with the same pair of point kinds.
    pub fn is_locked_to(
        &self,
        target: &ElementId,
        dragged: AlignmentPointKind,
        other: AlignmentPointKind,
    ) -> bool {
        self.snapped
            && self.target_id.as_ref() == Some(target)
            && self.alignment_type.as_deref() == Some(alignment_type(dragged, other).as_str())
    }
}

/// Per-axis hysteresis for the current drag gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnapState {
    pub x: AxisSnapState,
    pub y: AxisSnapState,
}

impl SnapState {
    pub fn axis(&self, axis: Axis) -> &AxisSnapState {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisSnapState {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Counters for detection work, useful for profiling and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapStats {
    /// Calls that ran a full detection
    pub detections: u64,
    /// Calls short-circuited by the throttle
    pub throttled: u64,
    /// Spatial index queries issued
    pub index_queries: u64,
}

/// Fixed constants of the detection algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapTuning {
    /// Threshold multiplier for an established snap
    pub hysteresis_factor: f64,
    /// Minimum time between two full detections
    pub throttle_interval: Duration,
    /// Margin added to both ends of a guide line
    pub guide_padding: f64,
    pub center_priority_bonus: f64,
    pub same_type_bonus: f64,
    /// Added to corner matches while corner snapping is off
    pub corner_penalty: f64,
    /// Fraction of the threshold under which a center match beats an edge match
    pub center_preference_ratio: f64,
    /// Neighbor query margin, in multiples of the threshold
    pub query_expansion_factor: f64,
}

impl Default for SnapTuning {
    fn default() -> Self {
        Self {
            hysteresis_factor: 1.5,
            throttle_interval: Duration::from_millis(16),
            guide_padding: 20.0,
            center_priority_bonus: 50.0,
            same_type_bonus: 20.0,
            corner_penalty: 1000.0,
            center_preference_ratio: 0.6,
            query_expansion_factor: 2.0,
        }
    }
}
