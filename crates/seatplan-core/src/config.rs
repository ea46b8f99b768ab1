//! Snapping configuration
//!
//! The configuration surface hosts read and write while a layout is being
//! edited. It carries no I/O of its own; persisting it is the job of
//! `seatplan-settings`.
//!
//! Out-of-range thresholds are clamped into `[MIN_SNAP_THRESHOLD, MAX_SNAP_THRESHOLD]`,
//! never rejected. That holds for setters and for deserialized documents.

use serde::{Deserialize, Deserializer, Serialize};

/// Smallest accepted snap threshold in pixels.
pub const MIN_SNAP_THRESHOLD: f64 = 5.0;
/// Largest accepted snap threshold in pixels.
pub const MAX_SNAP_THRESHOLD: f64 = 20.0;
/// Threshold used when none is configured.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 10.0;

/// Clamps a threshold into the accepted range. NaN falls back to the default.
pub fn clamp_threshold(value: f64) -> f64 {
    if value.is_nan() {
        return DEFAULT_SNAP_THRESHOLD;
    }
    value.clamp(MIN_SNAP_THRESHOLD, MAX_SNAP_THRESHOLD)
}

fn deserialize_threshold<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(clamp_threshold(raw))
}

/// Alignment snapping settings for one editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnappingConfig {
    /// Master switch; snapping is off until the user opts in
    pub enable_snapping: bool,
    /// Maximum distance in pixels at which two alignment points match
    #[serde(deserialize_with = "deserialize_threshold")]
    snap_threshold: f64,
    /// Whether detection returns guide lines for the renderer
    pub show_alignment_guides: bool,
    /// Prefer center-to-center matches over edge matches
    pub prioritize_center_alignment: bool,
    /// Add corner points to the alignment point set
    pub enable_corner_snapping: bool,
}

impl Default for SnappingConfig {
    fn default() -> Self {
        Self {
            enable_snapping: false,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            show_alignment_guides: true,
            prioritize_center_alignment: true,
            enable_corner_snapping: false,
        }
    }
}

impl SnappingConfig {
    /// Creates the default configuration (snapping disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with snapping switched on.
    pub fn enabled() -> Self {
        Self {
            enable_snapping: true,
            ..Self::default()
        }
    }

    pub fn snap_threshold(&self) -> f64 {
        self.snap_threshold
    }

    /// Sets the threshold, clamped into the accepted range.
    pub fn set_snap_threshold(&mut self, threshold: f64) {
        self.snap_threshold = clamp_threshold(threshold);
    }

    /// Builder-style variant of [`SnappingConfig::set_snap_threshold`].
    pub fn with_snap_threshold(mut self, threshold: f64) -> Self {
        self.set_snap_threshold(threshold);
        self
    }
}
