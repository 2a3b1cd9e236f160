use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, DotPrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive,
    WedgePrimitive,
};

/// Font family used when neither the chart nor the host names one.
pub const DEFAULT_FONT_FAMILY: &str = "Sans";

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends paint the layers in field order: rects, wedges, lines,
/// polylines, arcs, dots, then texts on top.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub font_family: String,
    pub rects: Vec<RectPrimitive>,
    pub wedges: Vec<WedgePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub arcs: Vec<ArcPrimitive>,
    pub dots: Vec<DotPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            rects: Vec::new(),
            wedges: Vec::new(),
            lines: Vec::new(),
            polylines: Vec::new(),
            arcs: Vec::new(),
            dots: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Adds a text primitive unless `text` is empty.
    pub fn push_text(&mut self, text: TextPrimitive) {
        if !text.text.is_empty() {
            self.texts.push(text);
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for arc in &self.arcs {
            arc.validate()?;
        }
        for dot in &self.dots {
            dot.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.rects.len()
            + self.wedges.len()
            + self.lines.len()
            + self.polylines.len()
            + self.arcs.len()
            + self.dots.len()
            + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
