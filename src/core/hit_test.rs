use crate::core::BarSlots;

/// Maps a detail-surface pointer position to the bar body under it.
///
/// `mouse_x`/`mouse_y` are surface-local with a top-left origin; `values` are
/// the minute counts of the currently displayed (filtered) dataset, matching
/// `slots` in length. Returns `None` left of the first bar, inside an
/// inter-bar gap, or above the bar's top.
#[must_use]
pub fn bar_at_point(
    mouse_x: f64,
    mouse_y: f64,
    left_gutter: f64,
    chart_height: f64,
    popup_reserved_height: f64,
    slots: BarSlots,
    values: &[f64],
    max_value: f64,
) -> Option<usize> {
    debug_assert_eq!(values.len(), slots.len());

    let chart_x = mouse_x - left_gutter;
    let candidate = (chart_x / slots.full_width()).floor();
    if candidate < 0.0 {
        return None;
    }

    let index = (candidate as usize).min(slots.len() - 1);
    if chart_x < slots.body_left(index) || chart_x > slots.body_right(index) {
        return None;
    }

    let bar_height = if max_value > 0.0 {
        values[index] / max_value * chart_height
    } else {
        0.0
    };
    let flipped_y = chart_height - mouse_y + popup_reserved_height;
    if flipped_y < 0.0 || flipped_y > bar_height {
        return None;
    }

    Some(index)
}
