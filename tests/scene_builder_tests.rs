use approx::assert_abs_diff_eq;
use brushbar::api::{BarChartConfig, BarChartEngine};
use brushbar::core::{DataPoint, Viewport};
use brushbar::render::{NullRenderer, PathCommand, PathPrimitive};
use chrono::NaiveDate;

fn points(count: u32) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
                + chrono::Days::new(u64::from(i));
            DataPoint::new(date, f64::from(i + 1) * 10.0).expect("valid point")
        })
        .collect()
}

fn engine() -> BarChartEngine<NullRenderer> {
    // Detail plot area: 300 x 235. Overview strip: 300 x 40.
    let config = BarChartConfig::new(Viewport::new(380, 300), Viewport::new(300, 40));
    BarChartEngine::new(NullRenderer::default(), config, points(10)).expect("engine init")
}

fn path_origin(path: &PathPrimitive) -> (f64, f64) {
    match path.commands[0] {
        PathCommand::MoveTo { x, y } => (x, y),
        ref other => panic!("expected MoveTo, got {other:?}"),
    }
}

#[test]
fn scene_without_selection_has_bars_only_on_overview() {
    let engine = engine();
    let scene = engine.build_scene().expect("scene");
    scene.validate().expect("valid scene");

    assert_eq!(scene.overview.rects.len(), 0);
    assert_eq!(scene.overview.lines.len(), 0);
    assert_eq!(scene.overview.paths.len(), 10);
}

#[test]
fn detail_pass_draws_adaptive_grid_and_label_strides() {
    let engine = engine();
    let scene = engine.build_scene().expect("scene");

    // max 100 minutes over a 235px plot: 20-minute grid steps (0..=80).
    assert_eq!(scene.detail.lines.len(), 5);
    // 5 value labels + every-other date label.
    assert_eq!(scene.detail.texts.len(), 10);
    assert_eq!(scene.detail.paths.len(), 10);

    // First gridline sits on the plot baseline, above the date-label band.
    assert_eq!(scene.detail.lines[0].y1, 30.0);
    assert_eq!(scene.detail.texts[0].text, "0 min");
    assert_eq!(scene.detail.texts[5].text, "01/01");
    assert_eq!(scene.detail.texts[6].text, "01/03");
}

#[test]
fn selection_overlay_precedes_overview_bars() {
    let mut engine = engine();
    engine.overview_pointer_down(0.0).expect("pointer down");
    engine.overview_pointer_move(300.0).expect("pointer move");
    engine.overview_pointer_up(300.0).expect("pointer up");

    let scene = engine.build_scene().expect("scene");
    assert_eq!(scene.overview.rects.len(), 1);
    assert_eq!(scene.overview.lines.len(), 2);
    assert_eq!(scene.overview.rects[0].x, 0.0);
    assert_eq!(scene.overview.rects[0].width, 300.0);

    // Every bar belongs to the selection and takes the selected color.
    let selected = engine.style().overview_selected_bar_color;
    for path in &scene.overview.paths {
        assert_eq!(path.fill, Some(selected));
    }
}

#[test]
fn partial_selection_recolors_only_member_bars() {
    let mut engine = engine();
    engine.overview_pointer_down(0.0).expect("pointer down");
    engine.overview_pointer_move(90.0).expect("pointer move");
    engine.overview_pointer_up(90.0).expect("pointer up");

    assert_eq!(
        engine.index_range().map(|range| (range.start, range.end)),
        Some((0, 2))
    );

    let scene = engine.build_scene().expect("scene");
    let selected = engine.style().overview_selected_bar_color;
    let plain = engine.style().overview_bar_color;
    assert_eq!(scene.overview.paths[0].fill, Some(selected));
    assert_eq!(scene.overview.paths[2].fill, Some(selected));
    assert_eq!(scene.overview.paths[3].fill, Some(plain));

    // The detail pass shrinks to the filtered dataset.
    assert_eq!(scene.detail.paths.len(), 3);
}

#[test]
fn hovering_a_bar_adds_popup_body_caret_and_text() {
    let mut engine = engine();
    engine
        .detail_pointer_move(70.0 + 105.0, 200.0)
        .expect("hover move");
    assert_eq!(engine.hover_index(), Some(3));

    let scene = engine.build_scene().expect("scene");
    // 10 bars + popup body + caret.
    assert_eq!(scene.detail.paths.len(), 12);
    assert_eq!(scene.detail.texts.len(), 11);

    let popup_text = &scene.detail.texts[10];
    assert_eq!(popup_text.text, "2024-01-04    40 min");

    // Caret points at the hovered bar's center.
    let (caret_x, _) = path_origin(&scene.detail.paths[11]);
    let caret_center = 70.0 + 105.0;
    assert_abs_diff_eq!(
        caret_x,
        caret_center - 7.0 * std::f64::consts::FRAC_1_SQRT_2,
        epsilon = 1e-9
    );
}

#[test]
fn popup_clamps_to_the_chart_right_edge() {
    let mut engine = engine();
    engine
        .detail_pointer_move(70.0 + 285.0, 100.0)
        .expect("hover move");
    assert_eq!(engine.hover_index(), Some(9));

    let scene = engine.build_scene().expect("scene");
    let popup_body = &scene.detail.paths[10];
    let (first_x, _) = path_origin(popup_body);
    // Rounded-rect paths start at x + corner radius.
    let popup_x = first_x - 4.0;

    let chart_right = 70.0 + 300.0;
    assert_eq!(popup_x, chart_right - 145.0 + 5.0);
    assert!(popup_x + 145.0 - 5.0 <= chart_right);
}

#[test]
fn hover_popup_disappears_when_pointer_leaves_bars() {
    let mut engine = engine();
    engine
        .detail_pointer_move(70.0 + 105.0, 200.0)
        .expect("hover move");
    engine
        .detail_pointer_move(70.0 + 94.0, 200.0)
        .expect("gap move");

    assert_eq!(engine.hover_index(), None);
    let scene = engine.build_scene().expect("scene");
    assert_eq!(scene.detail.paths.len(), 10);
    assert_eq!(scene.detail.texts.len(), 10);
}

#[test]
fn selected_bar_is_stroked_with_border_color() {
    let mut engine = engine();
    // Bar 0 body center: chart x 15, near the baseline so the short bar hits.
    engine.detail_pointer_down(85.0, 250.0).expect("click");
    assert_eq!(engine.selected_index(), Some(0));

    let scene = engine.build_scene().expect("scene");
    let bar = &scene.detail.paths[0];
    assert_eq!(bar.fill, Some(engine.style().detail_selected_bar_color));
    let stroke = bar.stroke.expect("selected bar stroke");
    assert_eq!(stroke.color, engine.style().detail_selected_bar_border_color);
}

#[test]
fn both_passes_render_together_on_every_state_change() {
    let mut engine = engine();
    engine.render().expect("initial render");
    engine.detail_pointer_move(85.0, 250.0).expect("hover");
    engine.overview_pointer_down(10.0).expect("down");
    engine.overview_pointer_move(200.0).expect("move");
    engine.overview_pointer_up(200.0).expect("up");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.scenes_rendered, 5);
    // The last redraw carried both passes.
    assert_eq!(renderer.last_overview_path_count, 10);
    assert!(renderer.last_detail_path_count > 0);
}
