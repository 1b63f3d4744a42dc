use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Fixed gutters around the detail plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    /// Reserved on the left for value-axis labels.
    pub left_gutter: f64,
    pub right_margin: f64,
    /// Band below the plot for date labels.
    pub bottom_label_height: f64,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            left_gutter: 70.0,
            right_margin: 10.0,
            bottom_label_height: 30.0,
        }
    }
}

/// Fixed dimensions of the hover popup and its reserved band above the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopupMetrics {
    pub width: f64,
    pub height: f64,
    /// Vertical gap between the hovered bar's top and the popup body.
    pub margin: f64,
    pub caret_width: f64,
    pub corner_radius: f64,
    /// Horizontal overhang tolerated before the popup is pushed back inside
    /// the chart's right edge.
    pub edge_slack: f64,
    pub font_size_px: f64,
}

impl Default for PopupMetrics {
    fn default() -> Self {
        Self {
            width: 145.0,
            height: 25.0,
            margin: 10.0,
            caret_width: 7.0,
            corner_radius: 4.0,
            edge_slack: 5.0,
            font_size_px: 12.0,
        }
    }
}

impl PopupMetrics {
    /// Vertical space kept free above the plot so the popup never clips.
    #[must_use]
    pub fn reserved_height(self) -> f64 {
        self.height + self.margin
    }
}

/// Usable plot size after subtracting gutters and the popup reservation.
///
/// Recomputed on every scene build; surfaces are sized to their displayed
/// bounding box, so a container resize is picked up on the next redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub width: f64,
    pub height: f64,
}

impl ChartArea {
    #[must_use]
    pub fn compute(viewport: Viewport, margins: ChartMargins, popup_reserved_height: f64) -> Self {
        Self {
            width: f64::from(viewport.width) - margins.left_gutter - margins.right_margin,
            height: f64::from(viewport.height)
                - margins.bottom_label_height
                - popup_reserved_height,
        }
    }
}

/// Equal-width bar slot geometry for one surface.
///
/// A slot spans `full_width` pixels; the bar body occupies the centered
/// `bar_width` portion and `gap_margin` pixels of gap sit on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSlots {
    full_width: f64,
    bar_width: f64,
    gap_margin: f64,
    len: usize,
}

impl BarSlots {
    pub fn new(surface_width: f64, len: usize, bar_width_ratio: f64) -> ChartResult<Self> {
        if len == 0 {
            return Err(ChartError::InvalidData(
                "bar slots require a non-empty dataset".to_owned(),
            ));
        }
        if !surface_width.is_finite() || surface_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar slot surface width must be finite and > 0".to_owned(),
            ));
        }
        if !bar_width_ratio.is_finite() || bar_width_ratio <= 0.0 || bar_width_ratio > 1.0 {
            return Err(ChartError::InvalidData(
                "bar width ratio must be finite and in (0, 1]".to_owned(),
            ));
        }

        let full_width = surface_width / len as f64;
        let bar_width = full_width * bar_width_ratio;
        Ok(Self {
            full_width,
            bar_width,
            gap_margin: (full_width - bar_width) * 0.5,
            len,
        })
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn full_width(self) -> f64 {
        self.full_width
    }

    #[must_use]
    pub fn bar_width(self) -> f64 {
        self.bar_width
    }

    #[must_use]
    pub fn gap_margin(self) -> f64 {
        self.gap_margin
    }

    /// Left edge of slot `index` (gap included).
    #[must_use]
    pub fn slot_start(self, index: usize) -> f64 {
        index as f64 * self.full_width
    }

    /// Left edge of the bar body inside slot `index`.
    #[must_use]
    pub fn body_left(self, index: usize) -> f64 {
        self.slot_start(index) + self.gap_margin
    }

    /// Right edge of the bar body inside slot `index`.
    #[must_use]
    pub fn body_right(self, index: usize) -> f64 {
        self.slot_start(index + 1) - self.gap_margin
    }

    #[must_use]
    pub fn center_x(self, index: usize) -> f64 {
        self.slot_start(index) + self.full_width * 0.5
    }
}
