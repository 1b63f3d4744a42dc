use brushbar::core::BarSlots;
use brushbar::interaction::{BrushState, SelectionRange, snap_selection};

fn slots() -> BarSlots {
    // 10 slots of 30px, 18px bodies, 6px gap margins.
    BarSlots::new(300.0, 10, 0.6).expect("valid slots")
}

#[test]
fn full_surface_selection_covers_every_bar() {
    let range = snap_selection(SelectionRange { start: 0.0, end: 300.0 }, slots())
        .expect("full-range selection");
    assert_eq!(range.start, 0);
    assert_eq!(range.end, 9);
    assert_eq!(range.len(), 10);
}

#[test]
fn single_slot_selection_yields_that_bar() {
    let range = snap_selection(SelectionRange { start: 30.0, end: 60.0 }, slots())
        .expect("slot selection");
    assert_eq!(range.start, 1);
    assert_eq!(range.end, 1);
}

#[test]
fn selection_overlapping_a_bar_body_pulls_it_in() {
    // Bar 0's body ends at 24; a start of 23 still overlaps it.
    let range = snap_selection(SelectionRange { start: 23.0, end: 60.0 }, slots())
        .expect("extended selection");
    assert_eq!(range.start, 0);
    assert_eq!(range.end, 1);

    // A start of 25 only covers bar 0's trailing gap.
    let range = snap_selection(SelectionRange { start: 25.0, end: 60.0 }, slots())
        .expect("tight selection");
    assert_eq!(range.start, 1);
}

#[test]
fn selection_ending_short_of_a_body_excludes_it() {
    // Bar 1's body starts at 36; ending at 34 leaves it out.
    let range = snap_selection(SelectionRange { start: 0.0, end: 34.0 }, slots())
        .expect("clipped selection");
    assert_eq!(range.start, 0);
    assert_eq!(range.end, 0);

    let range = snap_selection(SelectionRange { start: 0.0, end: 37.0 }, slots())
        .expect("covering selection");
    assert_eq!(range.end, 1);
}

#[test]
fn selection_inside_a_gap_maps_to_no_bars() {
    assert!(snap_selection(SelectionRange { start: 26.0, end: 28.0 }, slots()).is_none());
}

#[test]
fn zero_width_selection_at_origin_maps_to_no_bars() {
    assert!(snap_selection(SelectionRange { start: 2.0, end: 2.0 }, slots()).is_none());
}

#[test]
fn index_range_stays_within_dataset_bounds() {
    let range = snap_selection(
        SelectionRange {
            start: 290.0,
            end: 300.0,
        },
        slots(),
    )
    .expect("tail selection");
    assert_eq!(range.end, 9);
    assert!(range.start <= range.end);
}

#[test]
fn brush_keeps_selection_and_indices_paired() {
    let mut brush = BrushState::default();
    brush.on_pointer_down(26.0);
    brush.on_pointer_move(28.0, 300.0, slots());

    // The pixel range lives inside a gap: selection exists, indices collapse.
    assert!(brush.selection().is_some());
    assert!(brush.indices().is_none());

    brush.on_pointer_move(70.0, 300.0, slots());
    assert!(brush.selection().is_some());
    assert!(brush.indices().is_some());
}
