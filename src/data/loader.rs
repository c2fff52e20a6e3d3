//! CSV Data Loader Module
//! Handles CSV file loading and category extraction using Polars.

use log::{debug, info};
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// One category column: its header name and non-missing raw cells in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryColumn {
    pub name: String,
    pub cells: Vec<String>,
}

/// Columns in header order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTable {
    pub columns: Vec<CategoryColumn>,
}

impl CategoryTable {
    /// Total number of non-missing cells.
    pub fn cell_count(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).sum()
    }
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Load a CSV file. The first row is the header; every column is read as text.
    pub fn load_csv(&mut self, file_path: impl AsRef<Path>) -> Result<&DataFrame, LoaderError> {
        let file_path = file_path.as_ref();
        info!("Loading {}", file_path.display());

        // Schema length 0 keeps every column as String
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        debug!("Loaded frame with shape {:?}", df.shape());
        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get list of column names from loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Convert the loaded frame into category columns, dropping missing cells.
    pub fn to_category_table(&self) -> Result<CategoryTable, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;

        let mut columns = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let series = column
                .as_materialized_series()
                .cast(&DataType::String)?;
            let cells = series
                .str()?
                .into_iter()
                .flatten()
                .map(|s| s.to_string())
                .collect();

            columns.push(CategoryColumn {
                name: column.name().to_string(),
                cells,
            });
        }

        Ok(CategoryTable { columns })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_columns_in_header_order() {
        let file = csv_file("Home,Work,Recreation\n75 Appliance,60 Office,90 Concert\n");
        let mut loader = DataLoader::new();
        loader.load_csv(file.path()).unwrap();

        assert_eq!(loader.get_columns(), vec!["Home", "Work", "Recreation"]);
        assert_eq!(loader.get_row_count(), 1);
    }

    #[test]
    fn missing_cells_are_dropped() {
        let file = csv_file(
            "Home,Work\n75 Appliance,60 Office\n45 Fridge,\n,70-80 Printer\n",
        );
        let mut loader = DataLoader::new();
        loader.load_csv(file.path()).unwrap();
        let table = loader.to_category_table().unwrap();

        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].name, "Home");
        assert_eq!(table.columns[0].cells, vec!["75 Appliance", "45 Fridge"]);
        assert_eq!(table.columns[1].name, "Work");
        assert_eq!(table.columns[1].cells, vec!["60 Office", "70-80 Printer"]);
        assert_eq!(table.cell_count(), 4);
    }

    #[test]
    fn numeric_looking_cells_stay_text() {
        let file = csv_file("Home,Work\n75,60\n80,65\n");
        let mut loader = DataLoader::new();
        loader.load_csv(file.path()).unwrap();
        let table = loader.to_category_table().unwrap();

        assert_eq!(table.columns[0].cells, vec!["75", "80"]);
        assert_eq!(table.columns[1].cells, vec!["60", "65"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = DataLoader::new();
        let result = loader.load_csv(dir.path().join("absent.csv"));
        assert!(matches!(result, Err(LoaderError::CsvError(_))));
    }

    #[test]
    fn table_requires_loaded_data() {
        let loader = DataLoader::new();
        assert!(matches!(
            loader.to_category_table(),
            Err(LoaderError::NoData)
        ));
    }
}
