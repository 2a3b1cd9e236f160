use std::f64::consts::TAU;

use chart_widget::api::{ChartConfig, ChartEngine, points_from_csv_str, points_to_csv_string};
use chart_widget::core::{ChartType, DataPoint, Viewport};
use chart_widget::render::NullRenderer;
use proptest::prelude::*;

fn engine(chart_type: ChartType) -> ChartEngine<NullRenderer> {
    let config = ChartConfig::new(Viewport::new(640, 360), chart_type);
    ChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

proptest! {
    #[test]
    fn plotted_points_keep_insertion_order(
        samples in proptest::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..128)
    ) {
        let mut engine = engine(ChartType::Line);
        for (x, y) in &samples {
            engine.plot_point(*x, *y);
        }
        let expected: Vec<DataPoint> = samples.iter().map(|(x, y)| DataPoint::new(*x, *y)).collect();
        prop_assert_eq!(engine.points(), expected.as_slice());
    }

    #[test]
    fn pie_wedges_sum_to_full_turn(values in proptest::collection::vec(0.001f64..1_000.0, 1..32)) {
        let mut engine = engine(ChartType::Pie);
        for value in &values {
            engine.add_slice(*value, "teal", None).expect("slice");
        }
        let frame = engine.build_frame();
        prop_assert_eq!(frame.wedges.len(), values.len());
        prop_assert_eq!(frame.wedges[0].start_angle, 0.0);
        for pair in frame.wedges.windows(2) {
            prop_assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        let total: f64 = frame.wedges.iter().map(|w| w.sweep()).sum();
        prop_assert!((total - TAU).abs() <= 1e-9);
    }

    #[test]
    fn columns_never_collapse_below_the_sliver(
        values in proptest::collection::vec(0.0f64..500.0, 1..24)
    ) {
        let mut engine = engine(ChartType::Column);
        for value in &values {
            engine.add_column(*value, "navy", None).expect("column");
        }
        let frame = engine.build_frame();
        let max = values.iter().copied().fold(0.0, f64::max);
        if max > 0.0 {
            prop_assert_eq!(frame.rects.len(), values.len());
            for rect in &frame.rects {
                prop_assert!(rect.height >= 2.0);
                prop_assert!(rect.width >= 0.0);
            }
        } else {
            prop_assert!(frame.rects.is_empty());
        }
    }

    #[test]
    fn csv_text_reparses_within_precision(
        samples in proptest::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..64)
    ) {
        let points: Vec<DataPoint> = samples.iter().map(|(x, y)| DataPoint::new(*x, *y)).collect();
        let text = points_to_csv_string(&points).expect("csv");
        prop_assert_eq!(text.lines().count(), points.len());

        let parsed = points_from_csv_str(&text).expect("parse");
        prop_assert_eq!(parsed.len(), points.len());
        for (original, parsed) in points.iter().zip(&parsed) {
            prop_assert!((original.x - parsed.x).abs() <= 5e-7);
            prop_assert!((original.y - parsed.y).abs() <= 5e-7);
        }
    }
}
