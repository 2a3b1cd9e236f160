use chart_widget::api::{ChartConfig, ChartEngine, ColorRole, GRID_ALPHA, HostStyle};
use chart_widget::core::{ChartType, Viewport};
use chart_widget::render::{Color, NullRenderer};

fn host(foreground: Color, accent: Color, font: Option<&str>) -> HostStyle {
    HostStyle {
        foreground,
        accent,
        font_family: font.map(str::to_owned),
    }
}

fn line_engine() -> ChartEngine<NullRenderer> {
    let config = ChartConfig::new(Viewport::new(400, 200), ChartType::Line);
    ChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn unset_colors_resolve_from_host_once_and_persist() {
    let mut engine = line_engine();
    assert!(engine.theme_color(ColorRole::Text).is_none());

    let dark = Color::rgb(0.1, 0.1, 0.1);
    let blue = Color::rgb(0.2, 0.4, 0.9);
    engine.set_host_style(host(dark, blue, Some("Cantarell")));
    engine.plot_point(10.0, 10.0);
    engine.plot_point(20.0, 20.0);
    engine.render().expect("render");

    assert_eq!(engine.theme_color(ColorRole::Text), Some(dark));
    assert_eq!(engine.theme_color(ColorRole::Axis), Some(dark));
    assert_eq!(engine.theme_color(ColorRole::Line), Some(blue));
    assert_eq!(
        engine.theme_color(ColorRole::Grid),
        Some(dark.with_alpha(GRID_ALPHA))
    );
    assert_eq!(engine.font_family(), Some("Cantarell"));

    let frame = engine.last_frame().expect("frame");
    assert_eq!(frame.font_family, "Cantarell");
    assert_eq!(frame.polylines[0].color, blue);

    // a later host change does not override persisted colors
    engine.set_host_style(host(Color::WHITE, Color::BLACK, Some("Inter")));
    let frame = engine.build_frame();
    assert_eq!(frame.polylines[0].color, blue);
    assert_eq!(frame.font_family, "Cantarell");
}

#[test]
fn reset_theme_colors_rereads_the_host() {
    let mut engine = line_engine();
    engine.plot_point(10.0, 10.0);
    engine.plot_point(20.0, 20.0);
    let _ = engine.build_frame();

    let accent = Color::rgb(0.9, 0.1, 0.1);
    engine.set_host_style(host(Color::BLACK, accent, None));
    engine.reset_theme_colors();
    assert!(engine.needs_redraw());
    assert!(engine.theme_color(ColorRole::Line).is_none());

    let frame = engine.build_frame();
    assert_eq!(frame.polylines[0].color, accent);
    assert_eq!(frame.font_family, "Sans");
}

#[test]
fn explicit_colors_win_over_host_style() {
    let mut engine = line_engine();
    assert!(engine.set_color(ColorRole::Line, "orange"));
    assert!(engine.set_color("axis".parse().expect("role"), "#000"));
    engine.set_font("Fira Sans");
    engine.plot_point(1.0, 1.0);
    engine.plot_point(2.0, 2.0);

    let frame = engine.build_frame();
    assert_eq!(frame.polylines[0].color, Color::from_rgb8(255, 165, 0));
    assert_eq!(frame.lines[0].color, "#000".parse::<Color>().expect("color"));
    assert_eq!(frame.font_family, "Fira Sans");
}

#[test]
fn rejected_color_keeps_previous_value() {
    let mut engine = line_engine();
    assert!(engine.set_color(ColorRole::Grid, "rgba(0, 0, 0, 0.2)"));
    engine.render().expect("render");

    assert!(!engine.set_color(ColorRole::Grid, "rgba(0, 0, 0, 2)"));
    assert!(!engine.needs_redraw());
    assert_eq!(
        engine.theme_color(ColorRole::Grid),
        Some(Color::rgba(0.0, 0.0, 0.0, 0.2))
    );
}

#[test]
fn color_roles_parse_from_both_spellings() {
    assert_eq!("text".parse::<ColorRole>().expect("role"), ColorRole::Text);
    assert_eq!(
        "grid_color".parse::<ColorRole>().expect("role"),
        ColorRole::Grid
    );
    assert!("background".parse::<ColorRole>().is_err());
    assert_eq!(ColorRole::Line.to_string(), "line_color");
}

#[test]
fn font_family_is_extracted_from_toolkit_setting() {
    assert_eq!(HostStyle::font_family_from_setting("Cantarell 11"), "Cantarell");
    assert_eq!(
        HostStyle::font_family_from_setting("DejaVu Sans Mono 10"),
        "DejaVu Sans Mono"
    );
    assert_eq!(HostStyle::font_family_from_setting("12"), "Sans");
}

#[test]
fn engine_can_start_with_a_host_style() {
    let accent = Color::rgb(0.0, 0.5, 0.25);
    let config = ChartConfig::new(Viewport::new(300, 200), ChartType::GaugeAngular);
    let mut engine = ChartEngine::with_host_style(
        NullRenderer::default(),
        config,
        host(Color::BLACK, accent, Some("Inter")),
    )
    .expect("engine init");
    engine.set_value(50.0).expect("value");

    let frame = engine.build_frame();
    assert_eq!(frame.arcs[0].color, accent);
    assert_eq!(frame.font_family, "Inter");
    assert_eq!(engine.host_style().accent, accent);
}
