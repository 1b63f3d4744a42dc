use serde::{Deserialize, Serialize};

use crate::core::BarSlots;
use crate::core::geometry::clamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushMode {
    Idle,
    /// Pointer is down on empty overview space; the anchor edge is fixed and
    /// the other edge follows the pointer.
    Selecting,
    /// Pointer went down inside an existing selection; the whole range moves.
    Dragging,
}

/// Cursor feedback the host should apply to the overview surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorIcon {
    Default,
    Move,
    Grabbing,
}

/// Selected pixel range on the overview surface. `start <= end` always.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: f64,
    pub end: f64,
}

impl SelectionRange {
    /// Builds an ordered range from two edges in either order.
    #[must_use]
    pub fn from_edges(a: f64, b: f64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }
}

/// Inclusive dataset index span derived from a `SelectionRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start + 1
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        false
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}

/// Selection geometry captured at drag start so relative movement never
/// re-derives the range width mid-gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragAnchor {
    pub pointer_x: f64,
    pub selection_start: f64,
    pub selection_end: f64,
    pub selection_width: f64,
}

/// Brush gesture state for the overview surface.
///
/// `Idle -> Selecting -> Idle` for sweep-select, `Idle -> Dragging -> Idle`
/// when the pointer goes down inside an existing selection. All transitions
/// run synchronously inside the host's pointer handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    mode: BrushMode,
    pointer_down_x: f64,
    anchor_x: f64,
    drag: Option<DragAnchor>,
    selection: Option<SelectionRange>,
    indices: Option<IndexRange>,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            mode: BrushMode::Idle,
            pointer_down_x: 0.0,
            anchor_x: 0.0,
            drag: None,
            selection: None,
            indices: None,
        }
    }
}

impl BrushState {
    #[must_use]
    pub fn mode(self) -> BrushMode {
        self.mode
    }

    #[must_use]
    pub fn selection(self) -> Option<SelectionRange> {
        self.selection
    }

    #[must_use]
    pub fn indices(self) -> Option<IndexRange> {
        self.indices
    }

    #[must_use]
    pub fn drag_anchor(self) -> Option<DragAnchor> {
        self.drag
    }

    /// True while a pointer-down gesture is in flight. The host keeps its
    /// global move/up listeners registered exactly as long as this holds.
    #[must_use]
    pub fn is_gesture_active(self) -> bool {
        self.mode != BrushMode::Idle
    }

    /// Begins a gesture. Inside an existing selection the range starts
    /// moving; anywhere else the old selection is discarded and a fresh
    /// sweep starts from the pointer.
    pub fn on_pointer_down(&mut self, x: f64) -> CursorIcon {
        self.pointer_down_x = x;

        if let Some(selection) = self.selection.filter(|selection| selection.contains(x)) {
            self.drag = Some(DragAnchor {
                pointer_x: x,
                selection_start: selection.start,
                selection_end: selection.end,
                selection_width: selection.width(),
            });
            self.mode = BrushMode::Dragging;
            return CursorIcon::Grabbing;
        }

        self.drag = None;
        self.selection = None;
        self.indices = None;
        self.anchor_x = x;
        self.mode = BrushMode::Selecting;
        CursorIcon::Default
    }

    /// Advances the gesture and re-derives the index range.
    ///
    /// Returns `false` (no state change) outside a gesture.
    pub fn on_pointer_move(&mut self, x: f64, surface_width: f64, slots: BarSlots) -> bool {
        match self.mode {
            BrushMode::Idle => return false,
            BrushMode::Selecting => {
                self.selection = Some(SelectionRange::from_edges(self.anchor_x, x));
            }
            BrushMode::Dragging => {
                let Some(anchor) = self.drag else {
                    return false;
                };
                let dx = x - anchor.pointer_x;
                let shifted =
                    SelectionRange::from_edges(anchor.selection_start + dx, anchor.selection_end + dx);

                // Clamp the shift, not each edge, so the width survives the
                // surface boundary.
                let end = clamp(shifted.end, anchor.selection_width, surface_width);
                let start = clamp(shifted.start, 0.0, surface_width - anchor.selection_width);
                self.selection = Some(SelectionRange { start, end });
            }
        }

        self.indices = self
            .selection
            .and_then(|selection| snap_selection(selection, slots));
        true
    }

    /// Ends the gesture. A sweep that never moved (pointer-up at the
    /// pointer-down X) is a click and deselects entirely.
    pub fn on_pointer_up(&mut self, x: f64) {
        if self.mode == BrushMode::Selecting && x == self.pointer_down_x {
            self.selection = None;
            self.indices = None;
        }
        self.drag = None;
        self.mode = BrushMode::Idle;
    }

    /// Cursor for idle hovering: a move cursor inside the selection.
    #[must_use]
    pub fn hover_cursor(self, x: f64) -> CursorIcon {
        let inside = self
            .selection
            .is_some_and(|selection| selection.contains(x));
        if self.mode == BrushMode::Idle && inside {
            CursorIcon::Move
        } else {
            CursorIcon::Default
        }
    }

    /// Drops all selection state, used when the dataset is replaced.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Snaps an overview pixel range to the inclusive bar-index span it covers.
///
/// A bar joins the range when the selection overlaps past its leading gap
/// margin, and leaves it while its own margin is still uncovered. Inverted
/// spans yield `None`, keeping the selection/index pairing consistent.
#[must_use]
pub fn snap_selection(selection: SelectionRange, slots: BarSlots) -> Option<IndexRange> {
    let full_width = slots.full_width();
    let margin = slots.gap_margin();

    let mut start = (selection.start / full_width).ceil();
    if selection.start < start * full_width - margin {
        start = (start - 1.0).max(0.0);
    }

    let mut end = (selection.end / full_width).floor();
    if selection.end < end * full_width + margin {
        end -= 1.0;
    }

    if end < 0.0 || start > end {
        return None;
    }

    let start = start as usize;
    let end = (end as usize).min(slots.len() - 1);
    if start > end {
        return None;
    }
    Some(IndexRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::{BrushMode, BrushState, CursorIcon};
    use crate::core::BarSlots;

    fn slots() -> BarSlots {
        BarSlots::new(300.0, 10, 0.6).expect("valid slots")
    }

    #[test]
    fn sweep_orders_edges_regardless_of_direction() {
        let mut brush = BrushState::default();
        brush.on_pointer_down(200.0);
        brush.on_pointer_move(50.0, 300.0, slots());

        let selection = brush.selection().expect("active selection");
        assert_eq!(selection.start, 50.0);
        assert_eq!(selection.end, 200.0);
    }

    #[test]
    fn pointer_down_inside_selection_starts_drag() {
        let mut brush = BrushState::default();
        brush.on_pointer_down(30.0);
        brush.on_pointer_move(120.0, 300.0, slots());
        brush.on_pointer_up(120.0);

        let cursor = brush.on_pointer_down(75.0);
        assert_eq!(cursor, CursorIcon::Grabbing);
        assert_eq!(brush.mode(), BrushMode::Dragging);
        let anchor = brush.drag_anchor().expect("anchor captured");
        assert_eq!(anchor.selection_width, 90.0);
    }

    #[test]
    fn pointer_up_resets_gesture_state() {
        let mut brush = BrushState::default();
        brush.on_pointer_down(10.0);
        brush.on_pointer_move(60.0, 300.0, slots());
        brush.on_pointer_up(60.0);

        assert_eq!(brush.mode(), BrushMode::Idle);
        assert!(brush.drag_anchor().is_none());
        assert!(brush.selection().is_some());
    }
}
