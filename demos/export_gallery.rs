//! Renders one chart of every type and writes PNG and CSV files.
//!
//! Usage: `cargo run --example export_gallery --features cairo-backend -- [out_dir]`

use std::path::PathBuf;

use chart_widget::api::{ChartConfig, ChartEngine, ColorRole};
use chart_widget::core::{ChartType, Viewport};
use chart_widget::render::NullRenderer;
use chart_widget::{ChartResult, telemetry};

const VIEWPORT: Viewport = Viewport {
    width: 640,
    height: 320,
};

fn main() {
    let _ = telemetry::init_tracing("chart_widget=debug");
    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("chart-gallery"), PathBuf::from);

    if let Err(err) = std::fs::create_dir_all(&out_dir) {
        eprintln!("cannot create {}: {err}", out_dir.display());
        return;
    }
    if let Err(err) = export_gallery(&out_dir) {
        eprintln!("gallery export failed: {err}");
    }
}

fn export_gallery(out_dir: &std::path::Path) -> ChartResult<()> {
    for (name, chart_type) in [
        ("line", ChartType::Line),
        ("scatter", ChartType::Scatter),
        ("number", ChartType::Number),
        ("gauge_linear", ChartType::GaugeLinear),
        ("gauge_angular", ChartType::GaugeAngular),
        ("pie", ChartType::Pie),
        ("column", ChartType::Column),
    ] {
        let mut engine = build_engine(chart_type)?;
        engine.save_png(out_dir.join(format!("{name}.png")))?;
        if chart_type.is_xy() {
            engine.save_csv(out_dir.join(format!("{name}.csv")))?;
        }
        println!("wrote {name}");
    }
    Ok(())
}

fn build_engine(chart_type: ChartType) -> ChartResult<ChartEngine<NullRenderer>> {
    let config = ChartConfig::new(VIEWPORT, chart_type)
        .with_title(format!("{chart_type:?} chart"))
        .with_label("units")
        .with_axis_labels("x", "3 sin(x)")
        .with_x_range(0.0, 25.0)
        .with_y_range(-3.5, 3.5);
    let mut engine = ChartEngine::new(NullRenderer::default(), config)?;
    engine.set_color(ColorRole::Line, "#e01b24");

    let mut x = 0.0_f64;
    while x < 25.0 {
        engine.plot_point(x, 3.0 * x.sin());
        x += 0.1;
    }

    engine.set_value(62.0)?;
    for (value, color, label) in [
        (45.0, "#3584e4", "system"),
        (30.0, "#33d17a", "user"),
        (25.0, "#f6d32d", "idle"),
    ] {
        engine.add_slice(value, color, Some(label))?;
    }
    for (value, label) in [(12.0, "mon"), (0.0, "tue"), (7.5, "wed"), (15.0, "thu")] {
        engine.add_column(value, "steelblue", Some(label))?;
    }
    Ok(engine)
}
