//! # SeatPlan
//!
//! The geometric core of a seating layout editor:
//! - Visual bounds for every element type, chairs and labels included
//! - A quadtree spatial index over the layout
//! - Alignment snapping with hysteresis, priorities and guide lines
//!
//! ## Architecture
//!
//! SeatPlan is organized as a workspace with multiple crates:
//!
//! 1. **seatplan-core** - Points, snapping configuration, error types
//! 2. **seatplan-designer** - Element model, bounds, spatial index, snap engine
//! 3. **seatplan-settings** - TOML/JSON configuration documents
//! 4. **seatplan** - This crate; re-exports the above for hosts
//!
//! Hosts own input handling, rendering and persistence. They feed element
//! data in, call [`SnapEngine::detect_snap_targets`] on every pointer move
//! and draw the returned guides.

pub use seatplan_designer as designer;
pub use seatplan_settings as settings;

pub use seatplan_core::{
    rotate_point, Error, LayoutError, Point, Result, SnappingConfig, DEFAULT_SNAP_THRESHOLD,
    MAX_SNAP_THRESHOLD, MIN_SNAP_THRESHOLD,
};

pub use seatplan_designer::{
    alignment_points_of, bounds_at_position, bounds_of, AlignmentGuide, AlignmentPoint,
    AlignmentPointKind, Bounds, Clock, Element, ElementBounds, ElementId, ElementShape,
    GuideOrientation, IndexConfig, SnapEngine, SnapResult, SnapState, SnapStats, SnapTuning,
    SpatialIndex, SystemClock,
};

pub use seatplan_settings::{Config, IndexSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
