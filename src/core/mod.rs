pub mod geometry;
pub mod hit_test;
pub mod layout;
pub mod types;

pub use geometry::CornerRadii;
pub use layout::{BarSlots, ChartArea, ChartMargins, PopupMetrics};
pub use types::{DataPoint, Viewport, max_minutes};
