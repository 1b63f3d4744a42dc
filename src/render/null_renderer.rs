use crate::error::ChartResult;
use crate::render::{ChartScene, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It validates each scene and keeps per-pass primitive counts so tests can
/// catch invalid geometry and missing redraws without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub scenes_rendered: usize,
    pub last_overview_rect_count: usize,
    pub last_overview_path_count: usize,
    pub last_overview_line_count: usize,
    pub last_detail_path_count: usize,
    pub last_detail_line_count: usize,
    pub last_detail_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &ChartScene) -> ChartResult<()> {
        scene.validate()?;
        self.scenes_rendered += 1;
        self.last_overview_rect_count = scene.overview.rects.len();
        self.last_overview_path_count = scene.overview.paths.len();
        self.last_overview_line_count = scene.overview.lines.len();
        self.last_detail_path_count = scene.detail.paths.len();
        self.last_detail_line_count = scene.detail.lines.len();
        self.last_detail_text_count = scene.detail.texts.len();
        Ok(())
    }
}
