//! Live sine signal fed from a producer thread through a `ChartFeed`.

use std::thread;
use std::time::Duration;

use chart_widget::api::{ChartConfig, ChartFeed, ChartFeedSender, ChartUpdate};
use chart_widget::core::{ChartType, Viewport};
use chart_widget::platform_gtk::GtkChartWidget;
use chart_widget::telemetry;
use gtk4 as gtk;
use gtk4::prelude::*;

const VISIBLE_X_SPAN: f64 = 25.0;
const SAMPLE_INTERVAL_MS: u64 = 20;
const DRAIN_INTERVAL_MS: u64 = 50;

fn main() {
    let _ = telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.chart_widget.demos.gtk_live_sine")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let config = ChartConfig::new(Viewport::new(700, 350), ChartType::Line)
        .with_title("Sine signal, f(x) = 3sin(x)")
        .with_axis_labels("x", "y")
        .with_x_range(0.0, VISIBLE_X_SPAN)
        .with_y_range(-3.5, 3.5)
        .with_max_points(2_000);
    let chart = match GtkChartWidget::new(config) {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to create chart widget: {err}");
            return;
        }
    };

    let (sender, feed) = ChartFeed::bounded(256);
    spawn_sine_producer(sender);
    chart.attach_feed(feed, Duration::from_millis(DRAIN_INTERVAL_MS));

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("chart-widget live sine")
        .default_width(700)
        .default_height(350)
        .child(chart.drawing_area())
        .build();
    window.present();
}

fn spawn_sine_producer(sender: ChartFeedSender) {
    thread::spawn(move || {
        let mut x = 0.0_f64;
        while x < 100.0 {
            let point = ChartUpdate::Point { x, y: 3.0 * x.sin() };
            if sender.send(point).is_err() {
                return;
            }
            if x > VISIBLE_X_SPAN {
                let scroll = ChartUpdate::XRange {
                    min: x - VISIBLE_X_SPAN,
                    max: x,
                };
                if sender.send(scroll).is_err() {
                    return;
                }
            }
            thread::sleep(Duration::from_millis(SAMPLE_INTERVAL_MS));
            x += 0.1;
        }
    });
}
