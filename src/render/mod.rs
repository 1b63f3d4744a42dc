mod frame;
mod null_renderer;
mod primitives;
mod scene;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FontSpec, LinePrimitive, PathCommand, PathPrimitive, PathStroke, RectPrimitive,
    TextHAlign, TextPrimitive,
};
pub use scene::ChartScene;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `ChartScene` so
/// drawing code stays isolated from geometry and interaction logic. Frame
/// coordinates use a bottom-left origin with Y growing upward (bars grow
/// toward positive Y); a backend drawing on a top-left-origin surface maps
/// `y` to `surface_height - y` when executing commands, and draws text
/// glyphs upright at the mapped baseline rather than mirroring them through
/// the flip.
pub trait Renderer {
    fn render(&mut self, scene: &ChartScene) -> ChartResult<()>;
}
