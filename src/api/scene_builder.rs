use crate::core::geometry::{format_iso_date, format_minutes, format_month_day};
use crate::core::{BarSlots, ChartArea, CornerRadii, DataPoint, max_minutes};
use crate::error::ChartResult;
use crate::render::{
    Color, FontSpec, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::BarChartEngine;
use super::label_layout::{LabelMetrics, date_label_stride, value_axis_step};

const SELECTION_BORDER_WIDTH: f64 = 2.0;
const GRID_LINE_WIDTH: f64 = 1.0;
const SELECTED_BAR_BORDER_WIDTH: f64 = 1.0;
/// Vertical nudge centering a label against its gridline.
const LABEL_BASELINE_RATIO: f64 = 0.27;

impl<R: Renderer> BarChartEngine<R> {
    /// Overview pass: selection overlay first, then every bar colored by
    /// index-range membership.
    pub(super) fn build_overview_frame(&self) -> ChartResult<RenderFrame> {
        let viewport = self.overview_viewport;
        let mut frame = RenderFrame::new(viewport);
        let height = f64::from(viewport.height);
        let slots = self.overview_slots()?;

        if let Some(selection) = self.brush.selection() {
            frame.push_rect(RectPrimitive::new(
                selection.start,
                0.0,
                selection.width(),
                height,
                self.style.overview_selection_color,
            ));
            for edge in [selection.start, selection.end] {
                frame.push_line(LinePrimitive::new(
                    edge,
                    0.0,
                    edge,
                    height,
                    SELECTION_BORDER_WIDTH,
                    self.style.overview_selection_border_color,
                ));
            }
        }

        let max_value = max_minutes(&self.data).unwrap_or(0.0);
        let radius = slots.bar_width() * 0.2;
        let indices = self.brush.indices();
        for (index, point) in self.data.iter().enumerate() {
            let bar_height = scaled_height(point.minutes, max_value, height);
            let color = if indices.is_some_and(|range| range.contains(index)) {
                self.style.overview_selected_bar_color
            } else {
                self.style.overview_bar_color
            };
            frame.push_path(PathPrimitive::rounded_rect(
                slots.body_left(index),
                0.0,
                slots.bar_width(),
                bar_height,
                CornerRadii::bottom(radius),
                color,
            ));
        }

        Ok(frame)
    }

    /// Detail pass over the filtered dataset: gridlines and value labels,
    /// date labels, bars, and the hover popup.
    pub(super) fn build_detail_frame(&self) -> ChartResult<RenderFrame> {
        let viewport = self.detail_viewport;
        let mut frame = RenderFrame::new(viewport);
        let area = self.detail_area();
        let points = self.filtered_data();
        let slots = BarSlots::new(area.width, points.len(), self.style.bar_width_ratio)?;
        let max_value = max_minutes(points).unwrap_or(0.0);
        let metrics = LabelMetrics::measure(&self.style.label_font);

        let left = self.margins.left_gutter;
        let base_y = self.margins.bottom_label_height;

        self.push_value_grid(&mut frame, area, metrics, max_value);
        self.push_date_labels(&mut frame, metrics, slots, points);

        let mut hovered_bar_height = 0.0;
        for (index, point) in points.iter().enumerate() {
            let bar_height = scaled_height(point.minutes, max_value, area.height);
            if self.hover_index == Some(index) {
                hovered_bar_height = bar_height;
            }

            let radius = 4.0_f64.max(slots.bar_width().min(bar_height) * 0.2);
            let mut bar = PathPrimitive::rounded_rect(
                left + slots.body_left(index),
                base_y,
                slots.bar_width(),
                bar_height,
                CornerRadii::bottom(radius),
                self.detail_bar_color(index),
            );
            if self.selected_index == Some(index) {
                bar = bar.with_stroke(
                    self.style.detail_selected_bar_border_color,
                    SELECTED_BAR_BORDER_WIDTH,
                );
            }
            frame.push_path(bar);
        }

        if let Some(index) = self.hover_index {
            if index < points.len() && hovered_bar_height > 0.0 {
                self.push_popup(&mut frame, area, slots, points[index], index, hovered_bar_height);
            }
        }

        Ok(frame)
    }

    fn detail_bar_color(&self, index: usize) -> Color {
        if self.selected_index == Some(index) {
            self.style.detail_selected_bar_color
        } else if self.hover_index == Some(index) {
            self.style.detail_bar_hover_color
        } else {
            self.style.detail_bar_color
        }
    }

    fn push_value_grid(
        &self,
        frame: &mut RenderFrame,
        area: ChartArea,
        metrics: LabelMetrics,
        max_value: f64,
    ) {
        let left = self.margins.left_gutter;
        let base_y = self.margins.bottom_label_height;
        let font = &self.style.label_font;
        let step = value_axis_step(max_value, area.height, metrics.height);

        let mut value = 0.0;
        while value < max_value {
            let y = base_y + value / max_value * area.height;
            frame.push_line(LinePrimitive::new(
                left,
                y,
                left + area.width,
                y,
                GRID_LINE_WIDTH,
                self.style.grid_line_color,
            ));
            frame.push_text(TextPrimitive::new(
                self.value_label(value),
                left - 5.0,
                y - font.size_px * LABEL_BASELINE_RATIO,
                font.clone(),
                self.style.axis_label_color,
                TextHAlign::Right,
            ));
            value += step;
        }
    }

    fn push_date_labels(
        &self,
        frame: &mut RenderFrame,
        metrics: LabelMetrics,
        slots: BarSlots,
        points: &[DataPoint],
    ) {
        let left = self.margins.left_gutter;
        let font = &self.style.label_font;
        let stride = date_label_stride(metrics.width, slots.full_width());

        for index in (0..points.len()).step_by(stride) {
            frame.push_text(TextPrimitive::new(
                format_month_day(points[index].date),
                left + slots.center_x(index),
                font.size_px,
                font.clone(),
                self.style.axis_label_color,
                TextHAlign::Center,
            ));
        }
    }

    fn push_popup(
        &self,
        frame: &mut RenderFrame,
        area: ChartArea,
        slots: BarSlots,
        point: DataPoint,
        index: usize,
        bar_height: f64,
    ) {
        let popup = self.popup;
        let left = self.margins.left_gutter;
        let chart_right = left + area.width;
        let popup_y = self.margins.bottom_label_height + bar_height + popup.margin;
        let bar_center = left + slots.center_x(index);

        let mut popup_x = bar_center - popup.width * 0.5;
        if popup_x + popup.width - popup.edge_slack > chart_right {
            popup_x = chart_right - popup.width + popup.edge_slack;
        }

        frame.push_path(PathPrimitive::rounded_rect(
            popup_x,
            popup_y,
            popup.width,
            popup.height,
            CornerRadii::uniform(popup.corner_radius),
            self.style.popup_background_color,
        ));
        // Caret base sits just inside the popup body so the seam never shows.
        frame.push_path(PathPrimitive::caret_down(
            bar_center,
            popup_y + 0.5,
            popup.caret_width,
            self.style.popup_background_color,
        ));

        let text = format!(
            "{}    {}",
            format_iso_date(point.date),
            self.value_label(point.minutes)
        );
        frame.push_text(TextPrimitive::new(
            text,
            popup_x + popup.width * 0.5,
            popup_y + (popup.height - popup.font_size_px * 0.8) * 0.5,
            FontSpec::new(popup.font_size_px, 400, self.style.label_font.family.clone()),
            self.style.popup_text_color,
            TextHAlign::Center,
        ));
    }

    fn value_label(&self, value: f64) -> String {
        let suffix = &self.style.value_label_suffix;
        if suffix.is_empty() {
            format_minutes(value)
        } else {
            format!("{} {suffix}", format_minutes(value))
        }
    }
}

fn scaled_height(value: f64, max_value: f64, full_height: f64) -> f64 {
    if max_value > 0.0 {
        value / max_value * full_height
    } else {
        0.0
    }
}
