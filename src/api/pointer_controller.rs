use tracing::{debug, trace};

use crate::core::hit_test::bar_at_point;
use crate::core::{BarSlots, max_minutes};
use crate::error::ChartResult;
use crate::interaction::CursorIcon;
use crate::render::Renderer;

use super::BarChartEngine;

impl<R: Renderer> BarChartEngine<R> {
    /// Pointer-down on the overview strip. Starting a gesture always drops
    /// the sticky selected bar, and the returned cursor is what the host
    /// should apply for the rest of the gesture.
    pub fn overview_pointer_down(&mut self, x: f64) -> ChartResult<CursorIcon> {
        let cursor = self.brush.on_pointer_down(x);
        self.selected_index = None;
        debug!(x, mode = ?self.brush.mode(), "overview pointer down");
        self.render()?;
        Ok(cursor)
    }

    /// Pointer movement during an overview gesture; a no-op (and no redraw)
    /// while idle.
    pub fn overview_pointer_move(&mut self, x: f64) -> ChartResult<()> {
        let surface_width = f64::from(self.overview_viewport.width);
        let slots = self.overview_slots()?;
        if self.brush.on_pointer_move(x, surface_width, slots) {
            trace!(x, "overview pointer move");
            self.render()?;
        }
        Ok(())
    }

    /// Ends an overview gesture. Safe to call from a global listener
    /// regardless of where the pointer ended up.
    pub fn overview_pointer_up(&mut self, x: f64) -> ChartResult<()> {
        self.brush.on_pointer_up(x);
        debug!(
            x,
            has_selection = self.brush.selection().is_some(),
            "overview pointer up"
        );
        self.render()
    }

    /// Cursor feedback for idle hovering over the overview strip.
    #[must_use]
    pub fn overview_hover_cursor(&self, x: f64) -> CursorIcon {
        self.brush.hover_cursor(x)
    }

    /// Hover tracking on the detail surface.
    pub fn detail_pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        self.hover_index = self.detail_bar_at(x, y)?;
        self.render()
    }

    /// Bar click on the detail surface: updates the sticky selected bar and
    /// fires `on_select` with the clicked record (index 0 included).
    pub fn detail_pointer_down(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let hit = self.detail_bar_at(x, y)?;
        self.selected_index = hit;
        if let Some(index) = hit {
            debug!(index, "detail bar clicked");
            let point = self.filtered_data()[index];
            if let Some(mut handler) = self.on_select.take() {
                handler(&point);
                self.on_select = Some(handler);
            }
        }
        self.render()
    }

    fn detail_bar_at(&self, x: f64, y: f64) -> ChartResult<Option<usize>> {
        let area = self.detail_area();
        let points = self.filtered_data();
        let slots = BarSlots::new(area.width, points.len(), self.style.bar_width_ratio)?;
        let values: Vec<f64> = points.iter().map(|point| point.minutes).collect();
        let max_value = max_minutes(points).unwrap_or(0.0);

        Ok(bar_at_point(
            x,
            y,
            self.margins.left_gutter,
            area.height,
            self.popup.reserved_height(),
            slots,
            &values,
            max_value,
        ))
    }
}
