use crate::render::FontSpec;

/// Deterministic, backend-independent width estimate for one label.
///
/// Replaces live text measurement so layout stays identical across backends
/// and in headless tests.
pub(super) fn estimate_label_text_width_px(text: &str, font: &FontSpec) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '/' | ':' => 0.36,
            '.' | ',' => 0.34,
            '-' | '+' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    let weight_factor = if font.weight >= 600 { 1.05 } else { 1.0 };
    (units * font.size_px * weight_factor).max(font.size_px)
}

/// Bounding box of a reference axis label in the configured font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct LabelMetrics {
    pub width: f64,
    pub height: f64,
}

impl LabelMetrics {
    /// Measures a representative `MM/DD` label; all axis labels share its box.
    pub(super) fn measure(font: &FontSpec) -> Self {
        Self {
            width: estimate_label_text_width_px("00/00", font),
            height: font.size_px * 1.2,
        }
    }
}

/// Minute step between horizontal gridlines, in multiples of 10, chosen so
/// the rendered labels fit the available vertical space.
pub(super) fn value_axis_step(max_value: f64, chart_height: f64, label_height: f64) -> f64 {
    let num_labels = max_value / 10.0;
    let desired_num_labels = chart_height / (label_height + 24.0);
    if !desired_num_labels.is_finite() || desired_num_labels <= 0.0 {
        return max_value.max(10.0);
    }
    ((num_labels / desired_num_labels).ceil() * 10.0).max(10.0)
}

/// Index stride between x-axis date labels so neighboring labels never
/// overlap the measured label box.
pub(super) fn date_label_stride(label_width: f64, full_bar_width: f64) -> usize {
    let full_label_width = label_width + 24.0;
    let stride = (full_label_width / full_bar_width).ceil();
    if stride.is_finite() && stride >= 1.0 {
        stride as usize
    } else {
        1
    }
}
