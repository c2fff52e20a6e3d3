//! Data module - CSV loading, cell normalization and aggregation

pub mod loader;
pub mod normalizer;
pub mod processor;

pub use loader::DataLoader;
pub use processor::{Aggregator, ChartSeries};
