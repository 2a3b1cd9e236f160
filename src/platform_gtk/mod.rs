use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{ChartConfig, ChartEngine, ChartFeed, HostStyle};
use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{CairoRenderer, Color};

type SharedEngine = Rc<RefCell<ChartEngine<CairoRenderer>>>;

/// GTK4 drawing area that renders a [`ChartEngine`].
///
/// Each draw callback refreshes the viewport and host style from the widget
/// before painting. Colors and font resolve from the host style only while
/// unset; after a theme switch call [`ChartEngine::reset_theme_colors`]
/// through [`GtkChartWidget::with_engine`] to re-read them.
#[derive(Clone)]
pub struct GtkChartWidget {
    drawing_area: gtk::DrawingArea,
    engine: SharedEngine,
}

impl GtkChartWidget {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        let mut renderer = CairoRenderer::new(1, 1)?;
        renderer.set_clear_color(None)?;
        let engine = Rc::new(RefCell::new(ChartEngine::new(renderer, config)?));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        drawing_area.set_draw_func({
            let engine = Rc::clone(&engine);
            move |widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut chart) = engine.try_borrow_mut() else {
                    return;
                };
                let viewport = Viewport::new(width as u32, height as u32);
                if chart.viewport() != viewport {
                    if let Err(err) = chart.set_viewport(viewport) {
                        warn!(%err, "chart viewport rejected");
                        return;
                    }
                }
                chart.set_host_style(host_style_for(widget));
                if let Err(err) = chart.render_on_cairo_context(context) {
                    warn!(%err, "chart draw failed");
                }
            }
        });

        Ok(Self {
            drawing_area,
            engine,
        })
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Runs `f` against the engine and queues a redraw if it changed anything.
    ///
    /// Returns `None` while the engine is already borrowed, e.g. from inside
    /// a draw callback.
    pub fn with_engine<T>(&self, f: impl FnOnce(&mut ChartEngine<CairoRenderer>) -> T) -> Option<T> {
        let mut chart = self.engine.try_borrow_mut().ok()?;
        let result = f(&mut chart);
        if chart.take_redraw_request() {
            self.drawing_area.queue_draw();
        }
        Some(result)
    }

    /// Applies pending feed updates; returns how many were applied.
    pub fn drain_feed(&self, feed: &ChartFeed) -> usize {
        self.with_engine(|chart| feed.drain_into(chart)).unwrap_or(0)
    }

    /// Drains `feed` on the GTK main loop every `interval`.
    pub fn attach_feed(&self, feed: ChartFeed, interval: Duration) -> gtk::glib::SourceId {
        let widget = self.clone();
        gtk::glib::timeout_add_local(interval, move || {
            widget.drain_feed(&feed);
            gtk::glib::ControlFlow::Continue
        })
    }
}

fn color_from_rgba(rgba: &gtk::gdk::RGBA) -> Color {
    Color::rgba(
        f64::from(rgba.red()),
        f64::from(rgba.green()),
        f64::from(rgba.blue()),
        f64::from(rgba.alpha()),
    )
}

#[allow(deprecated)]
fn host_style_for(widget: &gtk::DrawingArea) -> HostStyle {
    let defaults = HostStyle::default();
    let style_context = widget.style_context();
    let foreground = color_from_rgba(&style_context.color());
    let accent = style_context
        .lookup_color("theme_selected_bg_color")
        .or_else(|| style_context.lookup_color("accent_bg_color"))
        .map_or(defaults.accent, |rgba| color_from_rgba(&rgba));
    let font_family = widget
        .settings()
        .gtk_font_name()
        .map(|setting| HostStyle::font_family_from_setting(&setting));

    HostStyle {
        foreground,
        accent,
        font_family,
    }
}
