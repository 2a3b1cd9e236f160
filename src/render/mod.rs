mod color;
mod frame;
mod null_renderer;
mod primitives;

pub use color::Color;
pub use frame::{DEFAULT_FONT_FAMILY, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, DotPrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign,
    TextPrimitive, TextVAlign, WedgePrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code
/// stays isolated from chart state and per-type layout rules.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
