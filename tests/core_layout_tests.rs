use brushbar::core::{BarSlots, ChartArea, ChartMargins, PopupMetrics, Viewport};

#[test]
fn chart_area_subtracts_gutters_and_popup_reservation() {
    let margins = ChartMargins::default();
    let popup = PopupMetrics::default();
    let area = ChartArea::compute(Viewport::new(900, 500), margins, popup.reserved_height());

    assert_eq!(area.width, 820.0);
    assert_eq!(area.height, 435.0);
}

#[test]
fn chart_area_tracks_surface_resize() {
    let margins = ChartMargins::default();
    let reserved = PopupMetrics::default().reserved_height();

    let before = ChartArea::compute(Viewport::new(900, 500), margins, reserved);
    let after = ChartArea::compute(Viewport::new(450, 500), margins, reserved);

    assert_eq!(before.height, after.height);
    assert_eq!(after.width, 370.0);
}

#[test]
fn popup_reservation_combines_height_and_margin() {
    let popup = PopupMetrics::default();
    assert_eq!(popup.reserved_height(), 35.0);
}

#[test]
fn bar_slots_split_slot_into_body_and_margins() {
    let slots = BarSlots::new(300.0, 10, 0.6).expect("valid slots");

    assert_eq!(slots.full_width(), 30.0);
    assert_eq!(slots.bar_width(), 18.0);
    assert_eq!(slots.gap_margin(), 6.0);
    assert_eq!(slots.body_left(2), 66.0);
    assert_eq!(slots.body_right(2), 84.0);
    assert_eq!(slots.center_x(0), 15.0);
}

#[test]
fn bar_slots_with_full_ratio_have_no_gap() {
    let slots = BarSlots::new(200.0, 4, 1.0).expect("valid slots");
    assert_eq!(slots.gap_margin(), 0.0);
    assert_eq!(slots.bar_width(), slots.full_width());
}

#[test]
fn bar_slots_reject_degenerate_inputs() {
    assert!(BarSlots::new(300.0, 0, 0.6).is_err());
    assert!(BarSlots::new(0.0, 10, 0.6).is_err());
    assert!(BarSlots::new(f64::NAN, 10, 0.6).is_err());
    assert!(BarSlots::new(300.0, 10, 0.0).is_err());
    assert!(BarSlots::new(300.0, 10, 1.5).is_err());
}
