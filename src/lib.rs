//! chart-widget: immediate-mode chart rendering engine for desktop widgets.
//!
//! The crate turns a small in-memory data model (points, pie slices,
//! columns, a scalar value) into backend-agnostic render frames for line,
//! scatter, number, linear/angular gauge, pie, and column charts, and
//! exports the result as CSV or PNG.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
