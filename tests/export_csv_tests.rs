use chart_widget::ChartError;
use chart_widget::api::{ChartConfig, ChartEngine, read_points_csv};
use chart_widget::core::{ChartType, DataPoint, Viewport};
use chart_widget::render::NullRenderer;

fn engine_with_points() -> ChartEngine<NullRenderer> {
    let config = ChartConfig::new(Viewport::new(500, 250), ChartType::Line);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.plot_point(0.0, 0.0);
    engine.plot_point(1.0, 3.5);
    engine.plot_point(2.0, -1.25);
    engine
}

#[test]
fn csv_export_uses_fixed_six_decimals_without_header() {
    let engine = engine_with_points();
    let text = engine.points_to_csv_string().expect("csv");
    assert_eq!(text, "0.000000,0.000000\n1.000000,3.500000\n2.000000,-1.250000\n");
}

#[test]
fn saved_csv_round_trips_through_the_reader() {
    let engine = engine_with_points();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("points.csv");

    engine.save_csv(&path).expect("save csv");
    let on_disk = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(on_disk, engine.points_to_csv_string().expect("csv"));

    let parsed = read_points_csv(&path).expect("parse");
    assert_eq!(
        parsed,
        vec![
            DataPoint::new(0.0, 0.0),
            DataPoint::new(1.0, 3.5),
            DataPoint::new(2.0, -1.25),
        ]
    );
}

#[test]
fn empty_series_exports_an_empty_file() {
    let config = ChartConfig::new(Viewport::new(500, 250), ChartType::Line);
    let engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.csv");

    engine.save_csv(&path).expect("save csv");
    assert_eq!(std::fs::read_to_string(&path).expect("read back"), "");
    assert!(read_points_csv(&path).expect("parse").is_empty());
}

#[test]
fn unwritable_path_reports_io_error_and_keeps_state() {
    let engine = engine_with_points();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("points.csv");

    let err = engine.save_csv(&path).expect_err("missing directory must fail");
    match err {
        ChartError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(engine.points().len(), 3);
}
