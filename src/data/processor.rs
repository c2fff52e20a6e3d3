//! Data Processor Module
//! Flattens category columns into chart entries and computes each entry's share.

use crate::charts::palette::category_color;
use crate::data::loader::CategoryTable;
use crate::data::normalizer::parse_cell;
use log::info;
use plotters::style::RGBColor;

/// One bar: a normalized cell tagged with its category.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub value: f64,
    pub label: String,
    pub category: String,
    pub color: RGBColor,
    /// Share of the grand total, 0..=100.
    pub percentage: f64,
}

impl Entry {
    /// Tick label with the share, e.g. "Appliance (55.6%)".
    pub fn display_label(&self) -> String {
        format!("{} ({:.1}%)", self.label, self.percentage)
    }
}

/// Entries in column order, then row order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub entries: Vec<Entry>,
    pub grand_total: f64,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    pub fn display_labels(&self) -> Vec<String> {
        self.entries.iter().map(Entry::display_label).collect()
    }

    pub fn colors(&self) -> Vec<RGBColor> {
        self.entries.iter().map(|e| e.color).collect()
    }
}

/// Builds chart series from category tables.
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate(table: &CategoryTable) -> ChartSeries {
        let mut entries: Vec<Entry> = Vec::with_capacity(table.cell_count());

        for column in &table.columns {
            let color = category_color(&column.name);
            for cell in &column.cells {
                let normalized = parse_cell(cell);
                entries.push(Entry {
                    value: normalized.value,
                    label: normalized.label,
                    category: column.name.clone(),
                    color,
                    percentage: 0.0,
                });
            }
        }

        let sum: f64 = entries.iter().map(|e| e.value).sum();
        let grand_total = if sum == 0.0 { 1.0 } else { sum };

        for entry in &mut entries {
            entry.percentage = entry.value / grand_total * 100.0;
        }

        info!(
            "Aggregated {} entries across {} categories (total {:.2})",
            entries.len(),
            table.columns.len(),
            grand_total
        );

        ChartSeries {
            entries,
            grand_total,
        }
    }
}
