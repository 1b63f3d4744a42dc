use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontSpec};

/// Styling knobs for both surfaces. Every field has a default; overriding
/// one never affects the others.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub detail_bar_color: Color,
    pub detail_bar_hover_color: Color,
    pub detail_selected_bar_color: Color,
    pub detail_selected_bar_border_color: Color,
    pub overview_bar_color: Color,
    pub overview_selected_bar_color: Color,
    pub overview_selection_color: Color,
    pub overview_selection_border_color: Color,
    pub popup_background_color: Color,
    pub popup_text_color: Color,
    pub grid_line_color: Color,
    pub axis_label_color: Color,
    pub label_font: FontSpec,
    /// Bar body width as a fraction of the slot width; the rest is gap.
    pub bar_width_ratio: f64,
    /// Unit suffix appended to value labels and the popup value.
    pub value_label_suffix: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            detail_bar_color: Color::from_rgb8(0xA4, 0xCD, 0xFE),
            detail_bar_hover_color: Color::from_rgb8(0x7D, 0xAB, 0xF8),
            detail_selected_bar_color: Color::from_rgb8(0xF8, 0xB8, 0x86),
            detail_selected_bar_border_color: Color::from_rgb8(0xC4, 0x4C, 0x34),
            overview_bar_color: Color::from_rgb8(0xA3, 0xAC, 0xB9),
            overview_selected_bar_color: Color::from_rgb8(0x4F, 0x56, 0x6B),
            overview_selection_color: Color::from_rgb8(0xD6, 0xEC, 0xFF),
            overview_selection_border_color: Color::from_rgb8(0x7D, 0xAB, 0xF8),
            popup_background_color: Color::from_rgb8(0x3F, 0x3F, 0x3F),
            popup_text_color: Color::rgb(1.0, 1.0, 1.0),
            grid_line_color: Color::from_rgb8(0xC1, 0xC9, 0xD2),
            axis_label_color: Color::rgba(0.0, 0.0, 0.0, 0.87),
            label_font: FontSpec::new(12.0, 500, "Arial"),
            bar_width_ratio: 0.6,
            value_label_suffix: "min".to_owned(),
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.bar_width_ratio.is_finite()
            || self.bar_width_ratio <= 0.0
            || self.bar_width_ratio > 1.0
        {
            return Err(ChartError::InvalidStyle(
                "bar width ratio must be finite and in (0, 1]".to_owned(),
            ));
        }
        self.label_font.validate()?;

        for color in [
            self.detail_bar_color,
            self.detail_bar_hover_color,
            self.detail_selected_bar_color,
            self.detail_selected_bar_border_color,
            self.overview_bar_color,
            self.overview_selected_bar_color,
            self.overview_selection_color,
            self.overview_selection_border_color,
            self.popup_background_color,
            self.popup_text_color,
            self.grid_line_color,
            self.axis_label_color,
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidStyle(err.to_string()))?;
        }
        Ok(())
    }
}
