use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Saturates `value` into `[min, max]`.
///
/// Applies `min` after `max`, so an inverted range resolves to `min` instead
/// of panicking like `f64::clamp`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Per-corner radii for rounded-rectangle paths. Absent corners stay square.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadii {
    pub tl: f64,
    pub tr: f64,
    pub br: f64,
    pub bl: f64,
}

impl CornerRadii {
    pub const ZERO: Self = Self {
        tl: 0.0,
        tr: 0.0,
        br: 0.0,
        bl: 0.0,
    };

    #[must_use]
    pub const fn uniform(radius: f64) -> Self {
        Self {
            tl: radius,
            tr: radius,
            br: radius,
            bl: radius,
        }
    }

    /// Rounds only the bottom corners, the bar-foot shape used by both passes.
    #[must_use]
    pub const fn bottom(radius: f64) -> Self {
        Self {
            tl: 0.0,
            tr: 0.0,
            br: radius,
            bl: radius,
        }
    }

    /// Replaces negative or non-finite radii with 0 so degenerate rects still
    /// produce a well-formed path.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let fix = |radius: f64| if radius.is_finite() { radius.max(0.0) } else { 0.0 };
        Self {
            tl: fix(self.tl),
            tr: fix(self.tr),
            br: fix(self.br),
            bl: fix(self.bl),
        }
    }
}

/// Pointer position translated from client coordinates into surface-local
/// coordinates, given the surface's bounding-box origin.
#[must_use]
pub fn surface_relative(
    client_x: f64,
    client_y: f64,
    surface_left: f64,
    surface_top: f64,
) -> (f64, f64) {
    (client_x - surface_left, client_y - surface_top)
}

/// Zero-padded `YYYY-MM-DD`, month 1-indexed.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Zero-padded `MM/DD` used for x-axis labels.
#[must_use]
pub fn format_month_day(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.month(), date.day())
}

/// Formats a minute count, dropping the fraction for integral values.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    if (minutes - minutes.round()).abs() < 1e-9 {
        format!("{}", minutes.round() as i64)
    } else {
        format!("{minutes}")
    }
}
