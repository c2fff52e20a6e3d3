//! Noise Chart - categorized noise measurements to a share bar chart
//!
//! Reads a CSV of "<level> <source>" cells grouped by category, normalizes the
//! levels, and renders one bar per source annotated with its share of the total.

mod charts;
mod config;
mod data;

use anyhow::{Context, Result};
use charts::BarChartRenderer;
use config::ChartConfig;
use data::{Aggregator, ChartSeries, DataLoader};
use log::info;
use std::path::PathBuf;

/// Load, normalize, aggregate and render in one pass.
fn run(config: &ChartConfig) -> Result<(ChartSeries, PathBuf)> {
    let mut loader = DataLoader::new();
    loader
        .load_csv(&config.input_path)
        .with_context(|| format!("reading {}", config.input_path.display()))?;
    info!(
        "Columns {:?} with {} rows",
        loader.get_columns(),
        loader.get_row_count()
    );

    let table = loader.to_category_table()?;
    let series = Aggregator::aggregate(&table);

    let written = BarChartRenderer::new(config)
        .render(&series)
        .with_context(|| format!("writing {}", config.output_path.display()))?;

    Ok((series, written))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ChartConfig::default();
    run(&config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_input(dir: &std::path::Path, contents: &str) -> PathBuf {
        let path = dir.join("noise_levels_by_category.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn two_category_run_writes_chart() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "Home,Work\n75 Appliance,60 Office\n");
        let output = dir.path().join("assets/plots/noise_levels_by_category.png");
        let config = ChartConfig::default()
            .with_input(&input)
            .with_output(&output);

        let (series, written) = run(&config).unwrap();

        assert_eq!(series.values(), vec![75.0, 60.0]);
        assert_eq!(
            series.display_labels(),
            vec!["Appliance (55.6%)", "Office (44.4%)"]
        );
        assert_eq!(written, output);
        assert!(output.exists());
    }

    #[test]
    fn mixed_encodings_and_missing_cells() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            dir.path(),
            "Home,Work,Recreation\n\
             70-80 Traffic,1/2 Measure,95 Concert\n\
             45 Fridge,,quiet Library\n",
        );
        let config = ChartConfig::default()
            .with_input(&input)
            .with_output(dir.path().join("chart.png"));

        let (series, _) = run(&config).unwrap();

        assert_eq!(series.len(), 5);
        let labels: Vec<&str> = series.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Traffic", "Fridge", "Measure", "Concert", "Library"]
        );
        assert_eq!(series.values(), vec![75.0, 45.0, 1.5, 95.0, 0.0]);
        let total: f64 = series.entries.iter().map(|e| e.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_input_fails_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out/chart.png");
        let config = ChartConfig::default()
            .with_input(dir.path().join("absent.csv"))
            .with_output(&output);

        let err = run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("absent.csv"));
        assert!(!output.exists());
    }
}
