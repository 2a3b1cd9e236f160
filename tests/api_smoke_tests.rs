use chart_widget::api::{ChartConfig, ChartEngine, ColorRole};
use chart_widget::core::{ChartType, Viewport};
use chart_widget::render::NullRenderer;

#[test]
fn engine_smoke_flow() {
    let config = ChartConfig::new(Viewport::new(800, 400), ChartType::Line)
        .with_title("Throughput")
        .with_axis_labels("time", "ops")
        .with_x_range(0.0, 10.0)
        .with_y_range(0.0, 50.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    assert!(engine.needs_redraw());

    engine.plot_point(1.0, 10.0);
    engine.plot_point(2.0, 20.0);
    engine.plot_point(3.0, 30.0);
    engine.render().expect("render should succeed");
    assert!(!engine.needs_redraw());

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    let frame = renderer.last_frame().expect("frame");
    assert_eq!(frame.polylines.len(), 1);
    assert_eq!(frame.polylines[0].points.len(), 3);
    // title, two axis labels, five x ticks, five y ticks
    assert_eq!(frame.texts.len(), 13);
    // two axes plus four horizontal and four vertical gridlines
    assert_eq!(frame.lines.len(), 10);
    assert_eq!(engine.points().len(), 3);
}

#[test]
fn every_mutation_requests_a_redraw() {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartConfig::default())
        .expect("engine init");
    engine.render().expect("render");
    assert!(!engine.needs_redraw());

    engine.set_chart_type(ChartType::Number);
    assert!(engine.take_redraw_request());
    assert!(!engine.take_redraw_request());

    engine.set_value(42.0).expect("value");
    assert!(engine.take_redraw_request());

    engine.set_title("Load");
    assert!(engine.take_redraw_request());

    assert!(engine.set_color(ColorRole::Line, "#ff0000"));
    assert!(engine.take_redraw_request());

    engine.plot_point(1.0, 1.0);
    assert!(engine.take_redraw_request());
}

#[test]
fn viewport_changes_do_not_request_a_redraw() {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartConfig::default())
        .expect("engine init");
    assert!(engine.take_redraw_request());

    engine
        .set_viewport(Viewport::new(320, 200))
        .expect("valid viewport");
    assert!(!engine.needs_redraw());
    assert_eq!(engine.viewport(), Viewport::new(320, 200));

    let err = engine
        .set_viewport(Viewport::new(0, 200))
        .expect_err("zero width must fail");
    assert!(matches!(
        err,
        chart_widget::ChartError::InvalidViewport { width: 0, .. }
    ));
    assert_eq!(engine.viewport(), Viewport::new(320, 200));
}

#[test]
fn invalid_config_is_rejected() {
    let config = ChartConfig::new(Viewport::new(0, 0), ChartType::Line);
    assert!(ChartEngine::new(NullRenderer::default(), config).is_err());

    let config = ChartConfig::new(Viewport::new(200, 100), ChartType::Line)
        .with_x_range(f64::NAN, 10.0);
    assert!(ChartEngine::new(NullRenderer::default(), config).is_err());
}

#[test]
fn unknown_chart_type_draws_only_the_placeholder_message() {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartConfig::default())
        .expect("engine init");
    engine.set_title("ignored");
    let frame = engine.build_frame();

    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "Unknown chart type");
    assert_eq!(frame.primitive_count(), 1);
    assert!(!frame.is_empty());
}

#[test]
fn user_data_round_trips_without_interpretation() {
    #[derive(Debug, PartialEq)]
    struct Tag(&'static str);

    let mut engine = ChartEngine::new(NullRenderer::default(), ChartConfig::default())
        .expect("engine init");
    assert!(engine.user_data::<Tag>().is_none());

    engine.set_user_data(Tag("cpu"));
    assert_eq!(engine.user_data::<Tag>(), Some(&Tag("cpu")));
    assert!(engine.user_data::<u32>().is_none());

    if let Some(tag) = engine.user_data_mut::<Tag>() {
        tag.0 = "memory";
    }
    assert_eq!(engine.user_data::<Tag>(), Some(&Tag("memory")));
    assert!(engine.take_user_data().is_some());
    assert!(engine.user_data::<Tag>().is_none());
}
