//! Priority scoring and conflict filtering of alignment candidates.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use seatplan_core::SnappingConfig;

use super::types::{AlignmentMatch, Axis, SnapTuning};
use crate::alignment::AlignmentPointKind;
use crate::model::ElementId;

/// Priority of a candidate pair; lower wins.
///
/// Exact coincidence scores zero. Otherwise the distance is scaled and
/// reduced by the center and same-kind bonuses. Corner matches are pushed
/// back while corner snapping is off, but never discarded.
pub fn score(
    dragged: AlignmentPointKind,
    target: AlignmentPointKind,
    distance: f64,
    config: &SnappingConfig,
    tuning: &SnapTuning,
) -> f64 {
    let mut priority = if distance == 0.0 {
        0.0
    } else {
        let mut p = distance * 10.0;
        if config.prioritize_center_alignment && dragged.is_center() && target.is_center() {
            p -= tuning.center_priority_bonus;
        }
        if dragged == target {
            p -= tuning.same_type_bonus;
        }
        p.max(0.0)
    };
    if is_penalized(dragged, config) {
        priority += tuning.corner_penalty;
    }
    priority
}

fn is_penalized(dragged: AlignmentPointKind, config: &SnappingConfig) -> bool {
    dragged.is_corner() && !config.enable_corner_snapping
}

/// Total order used whenever two candidates compete: unpenalized first,
/// then distance, then priority, then center matches before edge matches.
/// Remaining ties go to same-kind pairs, then to targets on the match axis.
fn compare(a: &AlignmentMatch, b: &AlignmentMatch, config: &SnappingConfig) -> Ordering {
    is_penalized(a.dragged_point.kind, config)
        .cmp(&is_penalized(b.dragged_point.kind, config))
        .then(a.distance.total_cmp(&b.distance))
        .then(a.priority.total_cmp(&b.priority))
        .then(b.is_center_match().cmp(&a.is_center_match()))
        .then(b.is_same_kind().cmp(&a.is_same_kind()))
        .then(b.target_on_axis().cmp(&a.target_on_axis()))
}

fn best<'a>(
    matches: impl Iterator<Item = &'a AlignmentMatch>,
    config: &SnappingConfig,
) -> Option<&'a AlignmentMatch> {
    matches.min_by(|a, b| compare(a, b, config))
}

/// Picks one candidate per (axis, target) pair.
///
/// When a target offers both a center and an edge candidate, the center one
/// wins outright if center alignment is prioritized and it lies within
/// `center_preference_ratio` of the threshold; otherwise the closer of the
/// two wins.
pub fn resolve_per_target(
    matches: Vec<AlignmentMatch>,
    config: &SnappingConfig,
    tuning: &SnapTuning,
) -> Vec<AlignmentMatch> {
    let mut groups: BTreeMap<(Axis, ElementId), Vec<AlignmentMatch>> = BTreeMap::new();
    for m in matches {
        groups
            .entry((m.axis, m.target_id().clone()))
            .or_default()
            .push(m);
    }

    let preference_limit = config.snap_threshold() * tuning.center_preference_ratio;
    groups
        .into_values()
        .filter_map(|group| {
            let center = best(group.iter().filter(|m| m.is_center_match()), config);
            let edge = best(group.iter().filter(|m| !m.is_center_match()), config);
            let chosen = match (center, edge) {
                (Some(c), Some(e)) => {
                    if config.prioritize_center_alignment && c.distance <= preference_limit {
                        c
                    } else if c.distance <= e.distance {
                        c
                    } else {
                        e
                    }
                }
                (Some(c), None) => c,
                (None, Some(e)) => e,
                (None, None) => return None,
            };
            Some(chosen.clone())
        })
        .collect()
}

/// Keeps at most one candidate per axis, whatever its target.
pub fn resolve_per_axis(
    matches: &[AlignmentMatch],
    config: &SnappingConfig,
) -> (Option<AlignmentMatch>, Option<AlignmentMatch>) {
    let pick = |axis: Axis| best(matches.iter().filter(|m| m.axis == axis), config).cloned();
    (pick(Axis::X), pick(Axis::Y))
}
