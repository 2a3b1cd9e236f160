use std::f64::consts::PI;

use approx::assert_relative_eq;
use chart_widget::api::{
    ChartConfig, ChartEngine, angular_gauge_sweep_degrees, linear_gauge_bar_length,
};
use chart_widget::core::{ChartType, Viewport};
use chart_widget::render::{NullRenderer, TextVAlign};

fn engine(chart_type: ChartType) -> ChartEngine<NullRenderer> {
    let config = ChartConfig::new(Viewport::new(500, 250), chart_type)
        .with_title("Temperature")
        .with_label("°C");
    ChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn number_chart_shows_title_label_and_value() {
    let mut engine = engine(ChartType::Number);
    engine.set_value(21.345).expect("value");

    let frame = engine.build_frame();
    let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Temperature", "°C", "21.3"]);
    assert!(frame.texts.iter().all(|t| t.v_align == TextVAlign::Middle));
    assert_relative_eq!(frame.texts[2].font_size_px, 140.0 * 500.0 / 650.0);
    assert_relative_eq!(frame.texts[2].y, 125.0);
}

#[test]
fn linear_gauge_bar_scales_against_value_max() {
    let mut engine = engine(ChartType::GaugeLinear);
    engine.set_value(50.0).expect("value");

    let frame = engine.build_frame();
    // two reference lines then the bar
    assert_eq!(frame.lines.len(), 3);
    let bar = frame.lines[2];
    assert_relative_eq!(bar.x1, 250.0);
    assert_relative_eq!(bar.y1, 225.0);
    assert_relative_eq!(bar.y2, 125.0);
    assert_relative_eq!(bar.stroke_width, 100.0);

    let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert!(texts.contains(&"0"));
    assert!(texts.contains(&"100"));
}

#[test]
fn gauge_helpers_do_not_fault_on_zero_max() {
    assert_eq!(linear_gauge_bar_length(10.0, 0.0, 250.0), 0.0);
    assert_eq!(angular_gauge_sweep_degrees(10.0, 0.0), 0.0);
    assert_relative_eq!(angular_gauge_sweep_degrees(25.0, 100.0), 45.0);
    assert_relative_eq!(linear_gauge_bar_length(100.0, 100.0, 250.0), 200.0);
}

#[test]
fn gauge_formula_ignores_value_min() {
    let config = ChartConfig::new(Viewport::new(500, 250), ChartType::GaugeAngular)
        .with_value_range(50.0, 150.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_value(75.0).expect("value");

    let frame = engine.build_frame();
    assert_eq!(frame.arcs.len(), 1);
    let arc = frame.arcs[0];
    assert_relative_eq!(arc.start_angle, PI);
    assert_relative_eq!(arc.end_angle, PI + 90.0_f64.to_radians());
    assert_relative_eq!(arc.center_x, 250.0);
    assert_relative_eq!(arc.center_y, 187.5);
    assert_relative_eq!(arc.radius, 175.0);
    assert_relative_eq!(arc.stroke_width, 50.0);

    let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert!(texts.contains(&"50"));
    assert!(texts.contains(&"150"));
    assert_eq!(frame.lines.len(), 2);
}

#[test]
fn non_finite_values_are_rejected() {
    let mut engine = engine(ChartType::Number);
    engine.set_value(3.0).expect("value");
    assert!(engine.set_value(f64::INFINITY).is_err());
    assert!(engine.set_value_max(f64::NAN).is_err());
    assert!(engine.set_x_min(f64::NEG_INFINITY).is_err());
    assert_eq!(engine.value(), 3.0);
    assert_eq!(engine.value_max(), 100.0);
    assert_eq!(engine.x_min(), 0.0);
}
