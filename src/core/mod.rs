pub mod column_series;
pub mod layout;
pub mod line_series;
pub mod pie_series;
pub mod scale;
pub mod series;
pub mod types;

pub use column_series::{ColumnGeometry, ColumnScale, project_columns};
pub use line_series::{DataWindow, PixelPoint, project_line_runs, project_scatter_points};
pub use pie_series::{WedgeGeometry, project_pie_wedges};
pub use scale::{AxisMapper, scale_against_max};
pub use series::{Column, SeriesStore, Slice};
pub use types::{ChartType, DataPoint, Viewport};
