use std::any::Any;

use tracing::trace;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::build_render_frame;
use super::{ChartState, HostStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main facade embedded by host applications.
///
/// `ChartEngine` owns the chart state and the renderer. Every mutation marks
/// the chart for redraw; the host polls [`ChartEngine::take_redraw_request`]
/// (or [`ChartEngine::needs_redraw`]) and calls [`ChartEngine::render`] from
/// its repaint callback. The engine is meant to live on the host's UI
/// thread; other threads hand data over through [`super::ChartFeed`].
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) state: ChartState,
    pub(super) host_style: HostStyle,
    pub(super) needs_redraw: bool,
    pub(super) last_frame: Option<RenderFrame>,
    pub(super) user_data: Option<Box<dyn Any>>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.state.config.viewport
    }

    /// Updates the canvas size reported by the host.
    ///
    /// This does not request a redraw: hosts call it from their own resize
    /// or draw path.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.state.config.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn host_style(&self) -> &HostStyle {
        &self.host_style
    }

    /// Replaces the host style that unset theme colors resolve from.
    pub fn set_host_style(&mut self, host_style: HostStyle) {
        self.host_style = host_style;
    }

    /// Clears resolved colors and font so the next render re-reads the host style.
    pub fn reset_theme_colors(&mut self) {
        self.state.reset_theme();
        self.request_redraw();
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns whether a redraw was requested and clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub(super) fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Builds the frame for the current state without drawing it.
    ///
    /// Resolves unset theme colors against the host style first.
    pub fn build_frame(&mut self) -> RenderFrame {
        let theme = self.state.resolve_theme(&self.host_style);
        build_render_frame(&self.state, self.viewport(), &theme)
    }

    /// Frame drawn by the most recent successful render; exports do not touch it.
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)?;
        self.finish_render(frame);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This is the path GTK draw callbacks use; the renderer stays unaware of
    /// any toolkit types.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame();
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.finish_render(frame);
        Ok(())
    }

    fn finish_render(&mut self, frame: RenderFrame) {
        trace!(primitives = frame.primitive_count(), "chart rendered");
        self.last_frame = Some(frame);
        self.needs_redraw = false;
    }

    /// Attaches arbitrary host data to the chart; the engine never reads it.
    pub fn set_user_data<T: Any>(&mut self, data: T) {
        self.user_data = Some(Box::new(data));
    }

    #[must_use]
    pub fn user_data<T: Any>(&self) -> Option<&T> {
        self.user_data.as_ref()?.downcast_ref()
    }

    #[must_use]
    pub fn user_data_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.user_data.as_mut()?.downcast_mut()
    }

    pub fn take_user_data(&mut self) -> Option<Box<dyn Any>> {
        self.user_data.take()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
