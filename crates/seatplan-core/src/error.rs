//! Error handling for SeatPlan
//!
//! Layout failures are split by where they originate:
//! - `LayoutError` covers the geometry and index layer. An element whose shape
//!   is outside the closed shape set is a programming error and is reported
//!   distinctly instead of receiving default bounds.
//! - `Error` is the umbrella type returned across crate boundaries.
//!
//! Configuration values that are merely out of range are clamped, not
//! reported, so they never show up here.

use thiserror::Error;

/// Geometry and spatial-index error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The element carries a shape tag outside the supported set
    #[error("Unsupported shape '{kind}' on element {element_id}")]
    UnsupportedShape {
        /// The id of the offending element.
        element_id: String,
        /// The shape tag that was not recognised.
        kind: String,
    },

    /// Incremental maintenance was requested for an element that was never indexed
    #[error("Element {element_id} is not in the spatial index")]
    ElementNotIndexed {
        /// The id that could not be located.
        element_id: String,
    },
}

/// Main error type for SeatPlan
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Invalid configuration document
    #[error("Invalid configuration: {reason}")]
    Config {
        /// Why the configuration was refused.
        reason: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is an unsupported-shape error
    pub fn is_unsupported_shape(&self) -> bool {
        matches!(self, Error::Layout(LayoutError::UnsupportedShape { .. }))
    }
}

/// Result type alias for SeatPlan operations
pub type Result<T> = std::result::Result<T, Error>;
