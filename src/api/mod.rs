mod chart_config;
mod chart_feed;
mod chart_state;
mod column_render_frame_builder;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_init;
mod engine_snapshot;
mod export;
mod gauge_render_frame_builder;
mod host_style;
mod number_render_frame_builder;
mod pie_render_frame_builder;
mod render_frame_builder;
mod snapshot_controller;
mod xy_render_frame_builder;

pub use chart_config::{ChartConfig, ColorRole, ThemeColors};
pub use chart_feed::{ChartFeed, ChartFeedSender, ChartUpdate};
pub use chart_state::ChartState;
pub use engine::ChartEngine;
pub use engine_snapshot::ChartSnapshot;
pub use export::{points_from_csv_str, points_to_csv_string, read_points_csv, write_points_csv};
pub use gauge_render_frame_builder::{angular_gauge_sweep_degrees, linear_gauge_bar_length};
pub use host_style::{GRID_ALPHA, HostStyle, ResolvedTheme};
pub use xy_render_frame_builder::XyPlotArea;

#[cfg(feature = "cairo-backend")]
pub use export::save_frame_png;
