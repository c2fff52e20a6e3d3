//! Chart Configuration Module
//! Fixed parameters for a chart run: input/output paths, figure geometry and text.

use std::path::PathBuf;

/// Default input table, relative to the working directory.
pub const DEFAULT_INPUT: &str = "noise_levels_by_category.csv";

/// Default output image.
pub const DEFAULT_OUTPUT: &str = "assets/plots/noise_levels_by_category.png";

/// Parameters for one chart run.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub title: String,
    pub y_label: String,
    /// Figure size in inches (width, height).
    pub figure_size: (f64, f64),
    pub dpi: u32,
    pub tick_font_pt: f64,
    pub title_font_pt: f64,
    pub label_font_pt: f64,
    /// Fraction of each slot covered by its bar.
    pub bar_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            title: "Noise levels by source (with share %)".to_string(),
            y_label: "Noise level (dBA)".to_string(),
            figure_size: (16.0, 9.0),
            dpi: 200,
            tick_font_pt: 11.0,
            title_font_pt: 14.4,
            label_font_pt: 10.0,
            bar_width: 0.8,
        }
    }
}

impl ChartConfig {
    /// Redirect the input CSV. The binary always reads the default path.
    #[cfg(test)]
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    #[cfg(test)]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.figure_size.0 * dpi).round() as u32,
            (self.figure_size.1 * dpi).round() as u32,
        )
    }

    /// Convert a point size to pixels at the configured dpi.
    pub fn font_px(&self, pt: f64) -> f64 {
        pt * self.dpi as f64 / 72.0
    }
}
