//! sitiometrics — comparison & ranking engine for the sitio data bank.
//!
//! Turns per-year sitio survey profiles into derived indicators and
//! combines them across time (one sitio, many years), space (many
//! sitios, one year), or administrative roll-ups (municipalities or
//! barangays), producing ranked, trend-annotated result snapshots.
//!
//! The engine is synchronous and pure: it never mutates the record
//! snapshot it is handed, holds no state between calls, and returns
//! either a complete immutable result or the full list of validation
//! reasons. Persistence, auth, rendering, and import/export live in the
//! surrounding application, not here.

pub mod charts;
pub mod comparison;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;

pub use comparison::ComparisonEngine;
pub use config::ComparisonLimits;
pub use error::ComparisonError;
pub use models::{ComparisonConfig, ComparisonResult};
