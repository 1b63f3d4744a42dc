use crate::error::ChartResult;
use crate::render::RenderFrame;

/// One complete redraw: the overview and detail passes, always built and
/// executed together so the two surfaces never drift out of sync.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub overview: RenderFrame,
    pub detail: RenderFrame,
}

impl ChartScene {
    #[must_use]
    pub fn new(overview: RenderFrame, detail: RenderFrame) -> Self {
        Self { overview, detail }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.overview.validate()?;
        self.detail.validate()
    }
}
