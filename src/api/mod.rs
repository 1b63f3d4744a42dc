mod chart_style;
mod engine_snapshot;
mod label_layout;
mod pointer_controller;
mod scene_builder;

pub use chart_style::ChartStyle;
pub use engine_snapshot::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot};

use tracing::debug;

use crate::core::{BarSlots, ChartArea, ChartMargins, DataPoint, PopupMetrics, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{BrushMode, BrushState, IndexRange, SelectionRange};
use crate::render::{ChartScene, Renderer};

/// Construction parameters for `BarChartEngine`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartConfig {
    pub detail_viewport: Viewport,
    pub overview_viewport: Viewport,
    pub margins: ChartMargins,
    pub popup: PopupMetrics,
    pub style: ChartStyle,
}

impl BarChartConfig {
    #[must_use]
    pub fn new(detail_viewport: Viewport, overview_viewport: Viewport) -> Self {
        Self {
            detail_viewport,
            overview_viewport,
            margins: ChartMargins::default(),
            popup: PopupMetrics::default(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_popup(mut self, popup: PopupMetrics) -> Self {
        self.popup = popup;
        self
    }
}

/// Callback fired with the full clicked record when a detail bar is selected.
pub type SelectHandler = Box<dyn FnMut(&DataPoint)>;

/// Interaction and redraw engine for one linked detail + overview bar chart.
///
/// The engine owns all widget-private state (brush gesture, hover index,
/// sticky selected bar) and mutates it only through the pointer handlers in
/// `pointer_controller`; every mutation synchronously rebuilds and renders
/// both passes.
pub struct BarChartEngine<R: Renderer> {
    renderer: R,
    detail_viewport: Viewport,
    overview_viewport: Viewport,
    margins: ChartMargins,
    popup: PopupMetrics,
    style: ChartStyle,
    data: Vec<DataPoint>,
    brush: BrushState,
    hover_index: Option<usize>,
    selected_index: Option<usize>,
    on_select: Option<SelectHandler>,
}

impl<R: Renderer> BarChartEngine<R> {
    pub fn new(renderer: R, config: BarChartConfig, data: Vec<DataPoint>) -> ChartResult<Self> {
        for viewport in [config.detail_viewport, config.overview_viewport] {
            if !viewport.is_valid() {
                return Err(ChartError::InvalidSurface {
                    width: viewport.width,
                    height: viewport.height,
                });
            }
        }
        config.style.validate()?;
        validate_points(&data)?;
        debug!(points = data.len(), "bar chart engine init");

        Ok(Self {
            renderer,
            detail_viewport: config.detail_viewport,
            overview_viewport: config.overview_viewport,
            margins: config.margins,
            popup: config.popup,
            style: config.style,
            data,
            brush: BrushState::default(),
            hover_index: None,
            selected_index: None,
            on_select: None,
        })
    }

    /// Replaces the dataset and drops all selection/hover state, whose
    /// indices would dangle against the new data.
    pub fn set_data(&mut self, data: Vec<DataPoint>) -> ChartResult<()> {
        validate_points(&data)?;
        debug!(points = data.len(), "replace dataset");
        self.data = data;
        self.brush.reset();
        self.hover_index = None;
        self.selected_index = None;
        self.render()
    }

    pub fn set_on_select(&mut self, handler: Option<SelectHandler>) {
        self.on_select = handler;
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    /// Records inside the current index range, or the full dataset when no
    /// selection is active.
    #[must_use]
    pub fn filtered_data(&self) -> &[DataPoint] {
        match self.brush.indices() {
            Some(range) => &self.data[range.start..=range.end],
            None => &self.data,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<SelectionRange> {
        self.brush.selection()
    }

    #[must_use]
    pub fn index_range(&self) -> Option<IndexRange> {
        self.brush.indices()
    }

    #[must_use]
    pub fn brush_mode(&self) -> BrushMode {
        self.brush.mode()
    }

    /// True while an overview gesture is in flight; the host keeps its global
    /// pointer listeners registered exactly as long as this holds.
    #[must_use]
    pub fn brush_is_gesture_active(&self) -> bool {
        self.brush.is_gesture_active()
    }

    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn detail_viewport(&self) -> Viewport {
        self.detail_viewport
    }

    #[must_use]
    pub fn overview_viewport(&self) -> Viewport {
        self.overview_viewport
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn resize_detail(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidSurface {
                width: viewport.width,
                height: viewport.height,
            });
        }
        debug!(width = viewport.width, height = viewport.height, "resize detail surface");
        self.detail_viewport = viewport;
        self.render()
    }

    pub fn resize_overview(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidSurface {
                width: viewport.width,
                height: viewport.height,
            });
        }
        debug!(width = viewport.width, height = viewport.height, "resize overview surface");
        self.overview_viewport = viewport;
        self.render()
    }

    /// Builds both passes and hands them to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let scene = self.build_scene()?;
        self.renderer.render(&scene)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn detail_area(&self) -> ChartArea {
        ChartArea::compute(self.detail_viewport, self.margins, self.popup.reserved_height())
    }

    fn overview_slots(&self) -> ChartResult<BarSlots> {
        BarSlots::new(
            f64::from(self.overview_viewport.width),
            self.data.len(),
            self.style.bar_width_ratio,
        )
    }

    /// Both passes for the next redraw, exposed for headless inspection.
    pub fn build_scene(&self) -> ChartResult<ChartScene> {
        Ok(ChartScene::new(
            self.build_overview_frame()?,
            self.build_detail_frame()?,
        ))
    }
}

fn validate_points(points: &[DataPoint]) -> ChartResult<()> {
    if points.is_empty() {
        return Err(ChartError::InvalidData(
            "dataset must contain at least one point".to_owned(),
        ));
    }
    for point in points {
        if !point.minutes.is_finite() || point.minutes < 0.0 {
            return Err(ChartError::InvalidData(
                "minutes must be finite and >= 0".to_owned(),
            ));
        }
    }
    Ok(())
}
