use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub wedges_drawn: usize,
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub arcs_drawn: usize,
    pub dots_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into a Cairo context owned by someone else, such
/// as the context a GTK `DrawingArea` hands to its draw function.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango renderer backend.
///
/// `Renderer::render` paints into an owned offscreen image surface that can
/// be written out as PNG; `CairoContextRenderer` paints into a host context.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Some(Color::WHITE),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    /// Background painted before each frame; `None` leaves the target as is.
    pub fn set_clear_color(&mut self, color: Option<Color>) -> ChartResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface to `path` as PNG.
    pub fn write_png(&self, path: &Path) -> ChartResult<()> {
        let file = File::create(path).map_err(|err| ChartError::io(path, err))?;
        let mut writer = BufWriter::new(file);
        self.surface.write_to_png(&mut writer).map_err(|err| match err {
            cairo::IoError::Io(source) => ChartError::io(path, source),
            other => ChartError::Backend(format!("failed to encode png: {other}")),
        })?;
        writer.flush().map_err(|err| ChartError::io(path, err))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        if let Some(clear_color) = self.clear_color {
            apply_color(context, clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }
        context.set_antialias(cairo::Antialias::Fast);

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            apply_color(context, rect.fill_color);
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for wedge in &frame.wedges {
            apply_color(context, wedge.fill_color);
            context.move_to(wedge.center_x, wedge.center_y);
            context.arc(
                wedge.center_x,
                wedge.center_y,
                wedge.radius,
                wedge.start_angle,
                wedge.end_angle,
            );
            context.close_path();
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill wedge", err))?;
            stats.wedges_drawn += 1;
        }

        context.set_line_cap(LineCap::Butt);
        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        context.set_line_join(LineJoin::Round);
        for polyline in &frame.polylines {
            let mut vertices = polyline.points.iter();
            let Some(&(x, y)) = vertices.next() else {
                continue;
            };
            apply_color(context, polyline.color);
            context.set_line_width(polyline.stroke_width);
            context.move_to(x, y);
            for &(x, y) in vertices {
                context.line_to(x, y);
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
            stats.polylines_drawn += 1;
        }

        for arc in &frame.arcs {
            apply_color(context, arc.color);
            context.set_line_width(arc.stroke_width);
            context.new_sub_path();
            // A negative sweep runs counter-clockwise instead of wrapping.
            if arc.end_angle < arc.start_angle {
                context.arc_negative(
                    arc.center_x,
                    arc.center_y,
                    arc.radius,
                    arc.start_angle,
                    arc.end_angle,
                );
            } else {
                context.arc(
                    arc.center_x,
                    arc.center_y,
                    arc.radius,
                    arc.start_angle,
                    arc.end_angle,
                );
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke arc", err))?;
            stats.arcs_drawn += 1;
        }

        context.set_line_cap(LineCap::Round);
        for dot in &frame.dots {
            apply_color(context, dot.color);
            context.set_line_width(dot.diameter);
            context.move_to(dot.x, dot.y);
            context.close_path();
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke dot", err))?;
            stats.dots_drawn += 1;
        }
        context.set_line_cap(LineCap::Butt);

        for text in &frame.texts {
            draw_text(context, &frame.font_family, text)?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_text(context: &Context, font_family: &str, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::new();
    font_description.set_family(font_family);
    font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };
    let dy = match text.v_align {
        TextVAlign::Baseline => -f64::from(layout.baseline()) / f64::from(pango::SCALE),
        TextVAlign::Middle => -f64::from(text_height) / 2.0,
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.translate(text.x, text.y);
    context.rotate(text.rotation);
    apply_color(context, text.color);
    context.move_to(dx, dy);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
