use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Physical pixel size of one drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One bar sample: a calendar day and its duration in minutes.
///
/// Caller-owned and immutable; the engine only reads samples. Position in the
/// dataset is the stable identity used for selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub minutes: f64,
    pub date: NaiveDate,
}

impl DataPoint {
    pub fn new(date: NaiveDate, minutes: f64) -> ChartResult<Self> {
        if !minutes.is_finite() || minutes < 0.0 {
            return Err(ChartError::InvalidData(
                "minutes must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self { minutes, date })
    }
}

/// Largest minute value in a dataset, or `None` for an empty one.
#[must_use]
pub fn max_minutes(points: &[DataPoint]) -> Option<f64> {
    points
        .iter()
        .map(|point| OrderedFloat(point.minutes))
        .max()
        .map(|max| max.0)
}
