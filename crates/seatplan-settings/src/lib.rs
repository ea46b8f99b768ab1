//! SeatPlan Settings Crate
//!
//! Editor configuration documents: snapping preferences plus spatial index
//! tuning, read from and written to TOML or JSON text.

pub mod config;
pub mod error;

pub use config::{Config, IndexSettings};
pub use error::{SettingsError, SettingsResult};
