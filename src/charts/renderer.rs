//! Static Chart Renderer
//! Draws the noise share bar chart to a PNG with plotters.
//!
//! Layout:
//! 1. Title centered above the plot
//! 2. One bar per entry, colored by category
//! 3. X tick labels rotated to read bottom to top, each with its share
//! 4. Horizontal grid lines only

use crate::config::ChartConfig;
use crate::data::ChartSeries;
use log::{debug, info, warn};
use plotters::coord::ranged1d::BoldPoints;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::fs;
use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;

const FONT_FAMILY: &str = "sans-serif";

// Headroom above the tallest bar
const Y_HEADROOM: f64 = 1.05;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to prepare output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
}

fn drawing_error(err: impl Display) -> RenderError {
    RenderError::Drawing(err.to_string())
}

/// Pixel geometry of a drawn chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub plot_x: Range<i32>,
    pub plot_y: Range<i32>,
    /// Upper-left and lower-right corner of each bar, in entry order.
    pub bars: Vec<((i32, i32), (i32, i32))>,
    /// X pixel of each x-axis tick.
    pub ticks: Vec<i32>,
}

/// Renders a chart series as a bar chart image.
pub struct BarChartRenderer<'a> {
    config: &'a ChartConfig,
}

impl<'a> BarChartRenderer<'a> {
    pub fn new(config: &'a ChartConfig) -> Self {
        Self { config }
    }

    /// Render to the configured output path, creating its directory if needed.
    pub fn render(&self, series: &ChartSeries) -> Result<PathBuf, RenderError> {
        let path = &self.config.output_path;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let size = self.config.canvas_size();
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let layout = self.draw(&root, series)?;

        root.present().map_err(drawing_error)?;
        debug!(
            "Plot area {}x{}px with {} bars and {} ticks",
            layout.plot_x.end - layout.plot_x.start,
            layout.plot_y.end - layout.plot_y.start,
            layout.bars.len(),
            layout.ticks.len()
        );
        info!(
            "Chart with {} bars (total {:.2}) saved to {} ({}x{})",
            series.len(),
            series.grand_total,
            path.display(),
            size.0,
            size.1
        );
        Ok(path.clone())
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        series: &ChartSeries,
    ) -> Result<BarLayout, RenderError> {
        let tick_px = self.config.font_px(self.config.tick_font_pt);
        let title_px = self.config.font_px(self.config.title_font_pt);
        let label_px = self.config.font_px(self.config.label_font_pt);
        let margin = (label_px / 2.0).round() as u32;

        if series.is_empty() {
            warn!("No entries to plot, drawing empty axes");
        }
        for entry in &series.entries {
            debug!("Bar [{}] {} = {}", entry.category, entry.label, entry.value);
        }

        let values = series.values();
        let labels = series.display_labels();
        let slots = series.len().max(1);
        let y_max = Self::y_upper_bound(&values);

        // Tight layout: size label areas from the text they hold
        let (_, canvas_h) = root.dim_in_pixel();
        let tick_style = TextStyle::from((FONT_FAMILY, tick_px).into_font());
        let mut longest_label = 0u32;
        for label in &labels {
            let (w, _) = root
                .estimate_text_size(label, &tick_style)
                .map_err(drawing_error)?;
            longest_label = longest_label.max(w);
        }
        let x_area = Self::x_label_area(longest_label, tick_px, canvas_h);

        let y_tick_style = TextStyle::from((FONT_FAMILY, label_px).into_font());
        let (y_tick_w, _) = root
            .estimate_text_size(&format!("{:.0}", y_max), &y_tick_style)
            .map_err(drawing_error)?;
        let y_area = y_tick_w + (label_px * 2.5).round() as u32;
        debug!("Label areas: x={}px y={}px", x_area, y_area);

        // Slot i spans [i, i + 1); its tick sits at the center
        let x_axis = (0f64..slots as f64).with_key_points(Self::tick_positions(series.len()));

        let mut chart = ChartBuilder::on(root)
            .caption(&self.config.title, (FONT_FAMILY, title_px))
            .margin(margin)
            .x_label_area_size(x_area)
            .y_label_area_size(y_area)
            .build_cartesian_2d(x_axis, 0f64..y_max)
            .map_err(drawing_error)?;

        let format_label = |x: &f64| {
            Self::slot_of(*x)
                .and_then(|i| labels.get(i).cloned())
                .unwrap_or_default()
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(BLACK.mix(0.2))
            .light_line_style(TRANSPARENT)
            .x_labels(slots)
            .x_label_formatter(&format_label)
            .x_label_style(
                (FONT_FAMILY, tick_px)
                    .into_font()
                    .transform(FontTransform::Rotate270),
            )
            .y_label_formatter(&|y| format!("{:.0}", y))
            .y_label_style((FONT_FAMILY, label_px))
            .y_desc(self.config.y_label.as_str())
            .axis_desc_style((FONT_FAMILY, label_px))
            .draw()
            .map_err(drawing_error)?;

        let bar_width = self.config.bar_width;
        chart
            .draw_series(series.entries.iter().enumerate().map(|(i, entry)| {
                let (left, right) = Self::bar_span(i, bar_width);
                Rectangle::new([(left, 0.0), (right, entry.value)], entry.color.filled())
            }))
            .map_err(drawing_error)?;

        let bars = series
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let (left, right) = Self::bar_span(i, bar_width);
                (
                    chart.backend_coord(&(left, entry.value)),
                    chart.backend_coord(&(right, 0.0)),
                )
            })
            .collect();
        let ticks = chart
            .as_coord_spec()
            .x_spec()
            .key_points(BoldPoints(slots + 1))
            .iter()
            .map(|x| chart.backend_coord(&(*x, 0.0)).0)
            .collect();
        let (plot_x, plot_y) = chart.plotting_area().get_pixel_range();

        Ok(BarLayout {
            plot_x,
            plot_y,
            bars,
            ticks,
        })
    }

    /// Tick positions, one per entry, at slot centers.
    fn tick_positions(entries: usize) -> Vec<f64> {
        (0..entries).map(|i| i as f64 + 0.5).collect()
    }

    /// Slot index for a tick position.
    fn slot_of(x: f64) -> Option<usize> {
        let slot = (x - 0.5).round();
        (slot >= 0.0).then_some(slot as usize)
    }

    /// Horizontal extent of bar `index`, centered in its slot and `bar_width` wide.
    fn bar_span(index: usize, bar_width: f64) -> (f64, f64) {
        let pad = (1.0 - bar_width.clamp(0.0, 1.0)) / 2.0;
        (index as f64 + pad, index as f64 + 1.0 - pad)
    }

    /// Top of the y axis: 5% above the tallest bar, or 1.0 when nothing is above zero.
    fn y_upper_bound(values: &[f64]) -> f64 {
        let max = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0f64, f64::max);
        if max > 0.0 {
            max * Y_HEADROOM
        } else {
            1.0
        }
    }

    /// Room under the x axis for rotated labels, never more than 60% of the canvas.
    fn x_label_area(longest_label: u32, tick_px: f64, canvas_height: u32) -> u32 {
        let wanted = longest_label + tick_px.round() as u32;
        wanted.min(canvas_height * 3 / 5)
    }
}
