//! # Growth chart
//!
//! Draws a [`GrowthPoint`] series as a line chart with `plotters`: x = date, y = cumulative
//! users, round markers, grid, title, axis descriptions and tick labels. Rendering happens in an
//! in-memory RGB buffer that is encoded as PNG with `image`.
//!
//! Text needs a TrueType font. [`register_font`] loads one (an explicit path first, then
//! well-known system locations); [`render`] calls it implicitly.

mod font;

use chrono::{Duration, NaiveDate};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use registry::GrowthPoint;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

pub use font::{register_font, FONT_CANDIDATES, FONT_FAMILY};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 500;

pub const TITLE: &str = "Bot foydalanuvchilari soni o‘sishi";
pub const X_DESC: &str = "Sana";
pub const Y_DESC: &str = "Jami foydalanuvchilar";

pub const BACKGROUND: RGBColor = WHITE;
pub const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOR: RGBColor = RGBColor(221, 221, 221);

const MARKER_RADIUS: i32 = 5;
const MAX_X_LABELS: usize = 8;
const MAX_Y_LABELS: usize = 11;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Growth series is empty")]
    EmptySeries,

    #[error("No usable font found (tried: {0})")]
    FontUnavailable(String),

    #[error("Drawing error: {0}")]
    Draw(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

/// Renders the chart into an in-memory RGB image of [`WIDTH`]×[`HEIGHT`].
#[instrument(skip(series), fields(points = series.len()))]
pub fn render(series: &[GrowthPoint]) -> Result<RgbImage, ChartError> {
    let (first, last) = match (series.first(), series.last()) {
        (Some(f), Some(l)) => (f.date, l.date),
        _ => return Err(ChartError::EmptySeries),
    };
    register_font(None)?;

    let x_range = x_axis_range(first, last);
    let y_top = y_axis_top(series);
    let date_label = |offset: &i64| (first + Duration::days(*offset)).format("%Y-%m-%d").to_string();

    let mut buf = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&BACKGROUND).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, (FONT_FAMILY, 24))
            .margin(15)
            .x_label_area_size(55)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range.clone(), 0u64..y_top)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_labels(x_label_count(&x_range))
            .y_labels(MAX_Y_LABELS.min(y_top as usize + 1))
            .x_label_formatter(&date_label)
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .label_style((FONT_FAMILY, 13))
            .axis_desc_style((FONT_FAMILY, 15))
            .bold_line_style(GRID_COLOR)
            .light_line_style(WHITE)
            .draw()
            .map_err(draw_err)?;

        let points: Vec<(i64, u64)> = series
            .iter()
            .map(|p| ((p.date - first).num_days(), p.total as u64))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), LINE_COLOR.stroke_width(2)))
            .map_err(draw_err)?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, MARKER_RADIUS, LINE_COLOR.filled())),
            )
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    debug!(y_top, "Growth chart rendered");
    RgbImage::from_raw(WIDTH, HEIGHT, buf)
        .ok_or_else(|| ChartError::Draw("pixel buffer has the wrong size".to_string()))
}

/// Renders the chart and writes it to `path` as PNG, replacing any existing file.
pub fn render_to_file(series: &[GrowthPoint], path: &Path) -> Result<(), ChartError> {
    let img = render(series)?;
    img.save_with_format(path, ImageFormat::Png)?;
    debug!(path = %path.display(), "Growth chart written");
    Ok(())
}

/// X axis in days since the first date, padded by a day on each side.
fn x_axis_range(first: NaiveDate, last: NaiveDate) -> std::ops::Range<i64> {
    -1..(last - first).num_days() + 1
}

fn x_label_count(range: &std::ops::Range<i64>) -> usize {
    MAX_X_LABELS.min((range.end - range.start + 1) as usize)
}

/// Upper bound of the y axis: one step above the final total, so the last marker is not cut.
fn y_axis_top(series: &[GrowthPoint]) -> u64 {
    let max = series.iter().map(|p| p.total as u64).max().unwrap_or(0).max(1);
    max + max.div_ceil(10)
}
