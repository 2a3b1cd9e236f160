use approx::assert_relative_eq;
use chart_widget::api::{ChartConfig, ChartEngine, XyPlotArea};
use chart_widget::core::{ChartType, Viewport};
use chart_widget::render::NullRenderer;

fn xy_engine(chart_type: ChartType) -> ChartEngine<NullRenderer> {
    let config = ChartConfig::new(Viewport::new(500, 250), chart_type)
        .with_x_range(0.0, 10.0)
        .with_y_range(0.0, 10.0);
    ChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn out_of_window_point_splits_the_line_into_runs() {
    let mut engine = xy_engine(ChartType::Line);
    engine.plot_point(1.0, 1.0);
    engine.plot_point(2.0, 2.0);
    engine.plot_point(5.0, 50.0);
    engine.plot_point(6.0, 6.0);

    let frame = engine.build_frame();
    assert_eq!(frame.polylines.len(), 2);

    let area = XyPlotArea::for_canvas(500.0, 250.0);
    let x_axis = area.x_mapper(0.0, 10.0);
    let first: Vec<f64> = frame.polylines[0].points.iter().map(|p| p.0).collect();
    let second: Vec<f64> = frame.polylines[1].points.iter().map(|p| p.0).collect();
    assert_eq!(first, vec![x_axis.map(1.0), x_axis.map(2.0)]);
    assert_eq!(second, vec![x_axis.map(6.0)]);
    assert_eq!(frame.polylines[0].segment_count(), 1);
    assert_eq!(frame.polylines[1].segment_count(), 0);
}

#[test]
fn window_bounds_are_inclusive() {
    let mut engine = xy_engine(ChartType::Line);
    engine.plot_point(0.0, 0.0);
    engine.plot_point(10.0, 10.0);

    let frame = engine.build_frame();
    assert_eq!(frame.polylines.len(), 1);
    assert_eq!(frame.polylines[0].points.len(), 2);
}

#[test]
fn plot_area_margins_follow_canvas_fractions() {
    let area = XyPlotArea::for_canvas(500.0, 250.0);
    let x_axis = area.x_mapper(0.0, 10.0);
    assert_relative_eq!(x_axis.map(0.0), 50.0);
    assert_relative_eq!(x_axis.map(10.0), 450.0);

    let y_axis = area.y_mapper(0.0, 10.0);
    assert_relative_eq!(y_axis.map(0.0), 200.0);
    assert_relative_eq!(y_axis.map(10.0), 50.0);
}

#[test]
fn zero_span_axis_renders_without_non_finite_geometry() {
    let config = ChartConfig::new(Viewport::new(500, 250), ChartType::Line)
        .with_x_range(5.0, 5.0)
        .with_y_range(0.0, 10.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.plot_point(5.0, 3.0);
    engine.plot_point(5.0, 4.0);

    engine.render().expect("degenerate axis must still render");
    let frame = engine.last_frame().expect("frame");
    frame.validate().expect("all coordinates finite");
    assert_eq!(frame.polylines.len(), 1);
    assert!(frame.polylines[0].points.iter().all(|p| (p.0 - 50.0).abs() < 1e-9));
}

#[test]
fn scatter_draws_one_dot_per_visible_point() {
    let mut engine = xy_engine(ChartType::Scatter);
    engine.plot_point(1.0, 1.0);
    engine.plot_point(-1.0, 1.0);
    engine.plot_point(4.0, 9.0);

    let frame = engine.build_frame();
    assert!(frame.polylines.is_empty());
    assert_eq!(frame.dots.len(), 2);
    assert!(frame.dots.iter().all(|dot| dot.diameter == 3.0));
}

#[test]
fn tick_labels_span_the_configured_range() {
    let config = ChartConfig::new(Viewport::new(500, 250), ChartType::Line)
        .with_x_range(10.0, 20.0)
        .with_y_range(-1.0, 1.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    let frame = engine.build_frame();
    let labels: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    for expected in ["10.0", "12.5", "15.0", "17.5", "20.0", "-1.0", "-0.5", "0.0", "0.5", "1.0"] {
        assert!(labels.contains(&expected), "missing tick label {expected}");
    }
}

#[test]
fn points_keep_insertion_order_and_cap_evicts_oldest() {
    let config = ChartConfig::new(Viewport::new(500, 250), ChartType::Line).with_max_points(3);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    for i in 0..5 {
        engine.plot_point(f64::from(i), f64::from(i * 2));
    }
    let xs: Vec<f64> = engine.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    assert_eq!(engine.max_points(), Some(3));

    engine.set_max_points(None);
    engine.plot_point(5.0, 10.0);
    assert_eq!(engine.points().len(), 4);

    engine.clear_points();
    assert!(engine.points().is_empty());
}
