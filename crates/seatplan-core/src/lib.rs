//! # SeatPlan Core
//!
//! Core types shared by every SeatPlan crate:
//! - geometry primitives (`Point`, rotation about an origin)
//! - the snapping configuration surface exposed to hosts
//! - the error taxonomy used by the layout engine

pub mod config;
pub mod error;
pub mod geometry;

pub use config::{
    SnappingConfig, DEFAULT_SNAP_THRESHOLD, MAX_SNAP_THRESHOLD, MIN_SNAP_THRESHOLD,
};
pub use error::{Error, LayoutError, Result};
pub use geometry::{rotate_point, Point};
