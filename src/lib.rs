//! brushbar: interactive bar-chart engine with a linked overview brush.
//!
//! The crate owns geometry, hit-testing, and brush-selection state for a
//! two-surface bar chart (detail + overview strip) and materializes each
//! redraw as backend-agnostic draw commands. Rendering backends and the host
//! event loop stay outside the crate.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BarChartConfig, BarChartEngine};
pub use error::{ChartError, ChartResult};
