#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chart_widget::ChartError;
use chart_widget::api::{ChartConfig, ChartEngine};
use chart_widget::core::{ChartType, Viewport};
use chart_widget::render::{CairoRenderer, Color, NullRenderer};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_line_chart_primitives() {
    let renderer = CairoRenderer::new(600, 300).expect("renderer");
    let config = ChartConfig::new(Viewport::new(600, 300), ChartType::Line)
        .with_title("Latency")
        .with_x_range(0.0, 10.0)
        .with_y_range(0.0, 10.0);
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.plot_point(1.0, 2.0);
    engine.plot_point(2.0, 4.0);
    engine.plot_point(3.0, 3.0);

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.surface().width(), 600);
    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 10);
    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(stats.texts_drawn, 11);
}

#[test]
fn cairo_renderer_draws_every_chart_type() {
    for chart_type in [
        ChartType::Unknown,
        ChartType::Scatter,
        ChartType::Number,
        ChartType::GaugeLinear,
        ChartType::GaugeAngular,
        ChartType::Pie,
        ChartType::Column,
    ] {
        let renderer = CairoRenderer::new(400, 240).expect("renderer");
        let config = ChartConfig::new(Viewport::new(400, 240), chart_type)
            .with_title("All")
            .with_label("unit");
        let mut engine = ChartEngine::new(renderer, config).expect("engine init");
        engine.set_value(40.0).expect("value");
        engine.plot_point(50.0, 50.0);
        engine.add_slice(3.0, "red", Some("a")).expect("slice");
        engine.add_slice(1.0, "blue", Some("b")).expect("slice");
        engine.add_column(3.0, "red", Some("a")).expect("column");
        engine.add_column(0.0, "blue", Some("b")).expect("column");

        engine.render().expect("render");
    }
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut renderer = CairoRenderer::new(1, 1).expect("renderer");
    renderer.set_clear_color(None).expect("clear color");
    let config = ChartConfig::new(Viewport::new(320, 200), ChartType::Pie);
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.add_slice(1.0, "red", None).expect("slice");
    engine.add_slice(1.0, "blue", None).expect("slice");

    let surface = ImageSurface::create(Format::ARgb32, 320, 200).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    assert_eq!(engine.renderer().last_stats().wedges_drawn, 2);
    assert!(engine.last_frame().is_some());
}

#[test]
fn clear_color_is_validated() {
    let mut renderer = CairoRenderer::new(10, 10).expect("renderer");
    let err = renderer
        .set_clear_color(Some(Color::rgba(2.0, 0.0, 0.0, 1.0)))
        .expect_err("out of range channel");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(renderer.clear_color(), Some(Color::WHITE));
}

#[test]
fn save_png_writes_an_image_of_the_current_viewport() {
    let config = ChartConfig::new(Viewport::new(320, 160), ChartType::Column).with_title("Jobs");
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.add_column(4.0, "red", Some("mon")).expect("column");
    engine.add_column(6.0, "green", Some("tue")).expect("column");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chart.png");
    engine.save_png(&path).expect("save png");

    let mut file = std::fs::File::open(&path).expect("png exists");
    let image = ImageSurface::create_from_png(&mut file).expect("decode png");
    assert_eq!((image.width(), image.height()), (320, 160));
    assert!(engine.last_frame().is_none());
}

#[test]
fn save_png_reflects_mutations_made_after_the_last_render() {
    let config = ChartConfig::new(Viewport::new(320, 160), ChartType::Column);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.render().expect("render");
    assert!(engine.last_frame().is_some_and(|frame| frame.is_empty()));

    // A single column spans the plot area between 5% side gaps.
    engine.add_column(5.0, "red", None).expect("column");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chart.png");
    engine.save_png(&path).expect("save png");

    let mut file = std::fs::File::open(&path).expect("png exists");
    let mut image = ImageSurface::create_from_png(&mut file).expect("decode png");
    let stride = usize::try_from(image.stride()).expect("stride");
    let data = image.data().expect("pixel data");
    // ARGB32 is stored as native-endian u32; y=96 sits between two gridlines.
    let offset = 96 * stride + 160 * 4;
    let pixel = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    assert_eq!(pixel, 0xffff_0000);
    assert!(engine.last_frame().is_some_and(|frame| frame.rects.is_empty()));
}

#[test]
fn save_png_to_missing_directory_is_an_io_error() {
    let config = ChartConfig::new(Viewport::new(100, 50), ChartType::Number);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope").join("chart.png");

    let err = engine.save_png(&path).expect_err("missing directory");
    assert!(matches!(err, ChartError::Io { .. }));
}
