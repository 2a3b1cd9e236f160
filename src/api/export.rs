use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use tracing::info;

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::{CairoRenderer, RenderFrame};

use super::ChartEngine;

fn csv_writer_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder.has_headers(false).terminator(Terminator::Any(b'\n'));
    builder
}

fn csv_record(point: &DataPoint) -> [String; 2] {
    [format!("{:.6}", point.x), format!("{:.6}", point.y)]
}

fn map_csv_error(path: Option<&Path>, err: csv::Error) -> ChartError {
    let message = err.to_string();
    match (path, err.into_kind()) {
        (Some(path), csv::ErrorKind::Io(source)) => ChartError::io(path, source),
        _ => ChartError::InvalidData(format!("csv: {message}")),
    }
}

/// Formats points as `x,y` lines with six decimals and no header row.
pub fn points_to_csv_string(points: &[DataPoint]) -> ChartResult<String> {
    let mut writer = csv_writer_builder().from_writer(Vec::new());
    for point in points {
        writer
            .write_record(csv_record(point))
            .map_err(|err| map_csv_error(None, err))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ChartError::InvalidData(format!("csv: {}", err.error())))?;
    String::from_utf8(bytes).map_err(|err| ChartError::InvalidData(format!("csv: {err}")))
}

pub fn write_points_csv(points: &[DataPoint], path: &Path) -> ChartResult<()> {
    let mut writer = csv_writer_builder()
        .from_path(path)
        .map_err(|err| map_csv_error(Some(path), err))?;
    for point in points {
        writer
            .write_record(csv_record(point))
            .map_err(|err| map_csv_error(Some(path), err))?;
    }
    writer.flush().map_err(|err| ChartError::io(path, err))
}

pub fn points_from_csv_str(text: &str) -> ChartResult<Vec<DataPoint>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes());
    reader
        .deserialize::<(f64, f64)>()
        .map(|row| {
            row.map(|(x, y)| DataPoint::new(x, y))
                .map_err(|err| map_csv_error(None, err))
        })
        .collect()
}

pub fn read_points_csv(path: &Path) -> ChartResult<Vec<DataPoint>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|err| map_csv_error(Some(path), err))?;
    reader
        .deserialize::<(f64, f64)>()
        .map(|row| {
            row.map(|(x, y)| DataPoint::new(x, y))
                .map_err(|err| map_csv_error(Some(path), err))
        })
        .collect()
}

/// Rasterizes `frame` into a fresh offscreen surface and writes it as PNG.
#[cfg(feature = "cairo-backend")]
pub fn save_frame_png(frame: &RenderFrame, path: &Path) -> ChartResult<()> {
    let to_i32 = |value: u32| {
        i32::try_from(value).map_err(|_| ChartError::InvalidViewport {
            width: frame.viewport.width,
            height: frame.viewport.height,
        })
    };
    let mut renderer = CairoRenderer::new(
        to_i32(frame.viewport.width)?,
        to_i32(frame.viewport.height)?,
    )?;
    renderer.render(frame)?;
    renderer.write_png(path)
}

impl<R: Renderer> ChartEngine<R> {
    pub fn points_to_csv_string(&self) -> ChartResult<String> {
        points_to_csv_string(self.points())
    }

    /// Writes every plotted point to `path`, one `x,y` line each.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        write_points_csv(self.points(), path)?;
        info!(path = %path.display(), points = self.points().len(), "chart csv saved");
        Ok(())
    }

    /// Writes the chart as a PNG image at the current viewport.
    ///
    /// The frame is always rebuilt from the current state, so pending
    /// mutations show up even before the host repaints. [`Self::last_frame`]
    /// is left untouched.
    #[cfg(feature = "cairo-backend")]
    pub fn save_png(&mut self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let frame = self.build_frame();
        save_frame_png(&frame, path)?;
        info!(path = %path.display(), primitives = frame.primitive_count(), "chart png saved");
        Ok(())
    }
}
