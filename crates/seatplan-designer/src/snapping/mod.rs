//! Alignment snapping while dragging.
//!
//! The engine owns the spatial index over all layout elements together with
//! the bounds each one was indexed with. On every pointer move the host
//! passes the dragged element and its proposed anchor position; the engine
//! finds nearby elements, pairs up their alignment points, resolves
//! conflicts and returns the corrected position plus the guides to draw.
//!
//! One engine serves one editing session. Its hysteresis state lives for a
//! single drag gesture and is cleared by [`SnapEngine::end_drag`] or by
//! disabling snapping.

mod clock;
mod resolve;
mod types;

pub use clock::{Clock, SystemClock};
pub use resolve::{resolve_per_axis, resolve_per_target, score};
pub use types::{
    alignment_type, AlignmentGuide, AlignmentMatch, Axis, AxisSnapState, GuideOrientation,
    SnapResult, SnapState, SnapStats, SnapTuning,
};

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use seatplan_core::{LayoutError, SnappingConfig};

use crate::alignment::{alignment_points_of, AlignmentPoint, AlignmentPoints};
use crate::bounds::{bounds_at_position, bounds_of, ElementBounds};
use crate::model::{Element, ElementId};
use crate::spatial_index::{IndexConfig, SpatialIndex};

/// Alignment snapping engine for one editing session.
#[derive(Debug)]
pub struct SnapEngine {
    config: SnappingConfig,
    tuning: SnapTuning,
    index_config: IndexConfig,
    index: Option<SpatialIndex<ElementId>>,
    /// Bounds each element was last indexed with
    indexed_bounds: HashMap<ElementId, ElementBounds>,
    state: SnapState,
    clock: Box<dyn Clock>,
    last_detection: Option<Duration>,
    last_guides: Vec<AlignmentGuide>,
    stats: SnapStats,
}

impl SnapEngine {
    /// Creates an engine with no index; call [`SnapEngine::rebuild`] before
    /// detection can produce snaps.
    pub fn new(config: SnappingConfig) -> Self {
        Self {
            config,
            tuning: SnapTuning::default(),
            index_config: IndexConfig::default(),
            index: None,
            indexed_bounds: HashMap::new(),
            state: SnapState::default(),
            clock: Box::new(SystemClock::new()),
            last_detection: None,
            last_guides: Vec::new(),
            stats: SnapStats::default(),
        }
    }

    pub fn with_tuning(mut self, tuning: SnapTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets the quadtree parameters used from the next rebuild on.
    pub fn with_index_config(mut self, index_config: IndexConfig) -> Self {
        self.index_config = index_config;
        self
    }

    pub fn config(&self) -> &SnappingConfig {
        &self.config
    }

    pub fn tuning(&self) -> &SnapTuning {
        &self.tuning
    }

    pub fn snap_state(&self) -> &SnapState {
        &self.state
    }

    pub fn stats(&self) -> SnapStats {
        self.stats
    }

    pub fn index(&self) -> Option<&SpatialIndex<ElementId>> {
        self.index.as_ref()
    }

    pub fn indexed_bounds(&self, id: &ElementId) -> Option<&ElementBounds> {
        self.indexed_bounds.get(id)
    }

    /// Replaces the whole configuration. Disabling snapping ends the gesture.
    pub fn set_config(&mut self, config: SnappingConfig) {
        let disabled = !config.enable_snapping;
        self.config = config;
        if disabled {
            self.end_drag();
        }
    }

    pub fn set_snapping_enabled(&mut self, enabled: bool) {
        self.config.enable_snapping = enabled;
        if !enabled {
            self.end_drag();
        }
    }

    /// Sets the threshold, clamped into the accepted range.
    pub fn set_snap_threshold(&mut self, threshold: f64) {
        self.config.set_snap_threshold(threshold);
    }

    pub fn set_show_alignment_guides(&mut self, show: bool) {
        self.config.show_alignment_guides = show;
    }

    pub fn set_prioritize_center_alignment(&mut self, prioritize: bool) {
        self.config.prioritize_center_alignment = prioritize;
    }

    pub fn set_corner_snapping(&mut self, enabled: bool) {
        self.config.enable_corner_snapping = enabled;
    }

    /// Rebuilds the index from the full element collection.
    ///
    /// Previously cached bounds are dropped first. Elements whose shape is
    /// unsupported are skipped with a warning. Returns how many elements
    /// were indexed.
    pub fn rebuild(&mut self, elements: &[Element]) -> usize {
        self.indexed_bounds.clear();
        let mut index = self.index_config.build();
        for element in elements {
            match bounds_of(element) {
                Ok(bounds) => {
                    index.insert(element.id.clone(), &bounds.visual_box());
                    self.indexed_bounds.insert(element.id.clone(), bounds);
                }
                Err(err) => warn!("Skipping element during index rebuild: {}", err),
            }
        }
        let indexed = index.len();
        debug!(
            elements = elements.len(),
            indexed,
            nodes = index.stats().total_nodes,
            "Rebuilt snapping index"
        );
        self.index = Some(index);
        indexed
    }

    /// Re-indexes one element after it moved or changed shape, or adds it
    /// if it was not indexed yet.
    pub fn update_element(&mut self, element: &Element) -> Result<(), LayoutError> {
        let bounds = bounds_of(element)?;
        let index = self.index.get_or_insert_with(|| self.index_config.build());
        match self.indexed_bounds.insert(element.id.clone(), bounds) {
            Some(old) => {
                index.update(element.id.clone(), &old.visual_box(), &bounds.visual_box());
            }
            None => index.insert(element.id.clone(), &bounds.visual_box()),
        }
        Ok(())
    }

    /// Removes one element from the index.
    pub fn remove_element(&mut self, id: &ElementId) -> Result<(), LayoutError> {
        let not_indexed = || LayoutError::ElementNotIndexed {
            element_id: id.to_string(),
        };
        let old = self.indexed_bounds.remove(id).ok_or_else(not_indexed)?;
        let index = self.index.as_mut().ok_or_else(not_indexed)?;
        if index.remove(id, &old.visual_box()) {
            Ok(())
        } else {
            Err(not_indexed())
        }
    }

    /// Ends the current drag gesture: clears hysteresis, the throttle and
    /// the remembered guides.
    pub fn end_drag(&mut self) {
        self.state.reset();
        self.last_detection = None;
        self.last_guides.clear();
    }

    /// Finds alignment snaps for `dragged` at the proposed anchor position.
    ///
    /// Never fails; any missing context yields the proposed position with no
    /// snap. Calls closer together than the throttle interval return the
    /// proposed position with the previous guides and do no work.
    pub fn detect_snap_targets(
        &mut self,
        dragged: &Element,
        proposed_x: f64,
        proposed_y: f64,
    ) -> SnapResult {
        let unsnapped = SnapResult::unsnapped(proposed_x, proposed_y);
        if !self.config.enable_snapping || self.index.is_none() {
            return unsnapped;
        }
        if !proposed_x.is_finite() || !proposed_y.is_finite() {
            debug!(element = %dragged.id, "Non-finite drag position, skipping snap");
            self.state.reset();
            return unsnapped;
        }

        let now = self.clock.now();
        if let Some(last) = self.last_detection {
            if now.saturating_sub(last) < self.tuning.throttle_interval {
                self.stats.throttled += 1;
                return SnapResult {
                    guides: self.last_guides.clone(),
                    ..unsnapped
                };
            }
        }
        self.last_detection = Some(now);
        self.stats.detections += 1;

        let result = self.detect(dragged, proposed_x, proposed_y);
        self.last_guides = result.guides.clone();
        result
    }

    fn detect(&mut self, dragged: &Element, proposed_x: f64, proposed_y: f64) -> SnapResult {
        let unsnapped = SnapResult::unsnapped(proposed_x, proposed_y);
        if !self.indexed_bounds.contains_key(&dragged.id) {
            debug!(element = %dragged.id, "Dragged element is not indexed, skipping snap");
            self.state.reset();
            return unsnapped;
        }
        let dragged_bounds = match bounds_at_position(dragged, proposed_x, proposed_y) {
            Ok(bounds) => bounds,
            Err(err) => {
                debug!("Cannot snap dragged element: {}", err);
                self.state.reset();
                return unsnapped;
            }
        };

        let threshold = self.config.snap_threshold();
        let corners = self.config.enable_corner_snapping;
        let dragged_points = alignment_points_of(&dragged_bounds, &dragged.id, corners);

        let region = dragged_bounds
            .visual_box()
            .expanded(threshold * self.tuning.query_expansion_factor);
        let neighbors = match &self.index {
            Some(index) => index.query(&region),
            None => Vec::new(),
        };
        self.stats.index_queries += 1;

        let mut candidates = Vec::new();
        for neighbor in neighbors.iter().filter(|id| **id != dragged.id) {
            let Some(bounds) = self.indexed_bounds.get(neighbor) else {
                continue;
            };
            let target_points = alignment_points_of(bounds, neighbor, corners);
            self.collect_matches(&dragged_points, &target_points, &mut candidates);
        }

        let per_target = resolve_per_target(candidates, &self.config, &self.tuning);
        let (best_x, best_y) = resolve_per_axis(&per_target, &self.config);

        let mut result = unsnapped;
        if let Some(m) = &best_x {
            result.x = proposed_x + (m.snap_position - m.dragged_coordinate());
            result.snapped_x = true;
        }
        if let Some(m) = &best_y {
            result.y = proposed_y + (m.snap_position - m.dragged_coordinate());
            result.snapped_y = true;
        }
        self.remember(Axis::X, best_x.as_ref());
        self.remember(Axis::Y, best_y.as_ref());

        if self.config.show_alignment_guides {
            let snapped_bounds =
                dragged_bounds.translated(result.x - proposed_x, result.y - proposed_y);
            result.guides = [best_x, best_y]
                .iter()
                .flatten()
                .filter_map(|m| self.guide_for(m, &snapped_bounds))
                .collect();
        }

        debug!(
            element = %dragged.id,
            neighbors = neighbors.len(),
            snapped_x = result.snapped_x,
            snapped_y = result.snapped_y,
            "Snap detection finished"
        );
        result
    }

    /// Pairs every dragged point with every neighbor point. The dragged
    /// point's kind decides which axes are tested; any target point can match.
    fn collect_matches(
        &self,
        dragged_points: &AlignmentPoints,
        target_points: &AlignmentPoints,
        out: &mut Vec<AlignmentMatch>,
    ) {
        for dp in dragged_points {
            for tp in target_points {
                if dp.kind.aligns_on_x() {
                    if let Some(m) = self.try_match(Axis::X, dp, tp) {
                        out.push(m);
                    }
                }
                if dp.kind.aligns_on_y() {
                    if let Some(m) = self.try_match(Axis::Y, dp, tp) {
                        out.push(m);
                    }
                }
            }
        }
    }

    fn try_match(
        &self,
        axis: Axis,
        dragged: &AlignmentPoint,
        target: &AlignmentPoint,
    ) -> Option<AlignmentMatch> {
        let (from, to) = match axis {
            Axis::X => (dragged.x, target.x),
            Axis::Y => (dragged.y, target.y),
        };
        let distance = (from - to).abs();
        if distance > self.effective_threshold(axis, dragged, target) {
            return None;
        }
        Some(AlignmentMatch {
            axis,
            dragged_point: dragged.clone(),
            target_point: target.clone(),
            distance,
            snap_position: to,
            priority: score(dragged.kind, target.kind, distance, &self.config, &self.tuning),
        })
    }

    /// The configured threshold, widened while the axis is already snapped
    /// to this exact target and point pairing.
    fn effective_threshold(
        &self,
        axis: Axis,
        dragged: &AlignmentPoint,
        target: &AlignmentPoint,
    ) -> f64 {
        let threshold = self.config.snap_threshold();
        if self
            .state
            .axis(axis)
            .is_locked_to(&target.element_id, dragged.kind, target.kind)
        {
            threshold * self.tuning.hysteresis_factor
        } else {
            threshold
        }
    }

    fn remember(&mut self, axis: Axis, winner: Option<&AlignmentMatch>) {
        let state = self.state.axis_mut(axis);
        match winner {
            Some(m) => {
                state.snapped = true;
                state.target_id = Some(m.target_id().clone());
                state.alignment_type = Some(m.alignment_type());
            }
            None => *state = AxisSnapState::default(),
        }
    }

    fn guide_for(&self, m: &AlignmentMatch, dragged: &ElementBounds) -> Option<AlignmentGuide> {
        let target = self.indexed_bounds.get(m.target_id())?;
        let padding = self.tuning.guide_padding;
        let (start, end) = match m.axis {
            Axis::X => (
                dragged.visual_top.min(target.visual_top),
                dragged.visual_bottom.max(target.visual_bottom),
            ),
            Axis::Y => (
                dragged.visual_left.min(target.visual_left),
                dragged.visual_right.max(target.visual_right),
            ),
        };
        Some(AlignmentGuide {
            orientation: m.axis.into(),
            position: m.snap_position,
            start: start - padding,
            end: end + padding,
            source_element: m.dragged_point.element_id.clone(),
            target_element: m.target_id().clone(),
            alignment_type: m.alignment_type(),
        })
    }
}

impl Default for SnapEngine {
    fn default() -> Self {
        Self::new(SnappingConfig::default())
    }
}
