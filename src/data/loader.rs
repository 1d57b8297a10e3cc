use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{BenchmarkDataset, BenchmarkRow, Measurement, Metric};

/// Column holding the category label of each bar group.
pub const IMPLEMENTATION_COLUMN: &str = "Implementation";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading CSV header")]
    Header(#[source] csv::Error),
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("CSV row {row}")]
    Parse {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("'{implementation}': {column} is negative ({value})")]
    NegativeStdDev {
        implementation: String,
        column: String,
        value: f64,
    },
    #[error("'{implementation}': {column} is not a finite number ({value})")]
    NonFinite {
        implementation: String,
        column: String,
        value: f64,
    },
    #[error("no benchmark rows found")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the benchmark results file.
pub fn load_csv(path: &Path) -> Result<BenchmarkDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_dataset(file)
}

/// CSV layout: header row, then one row per implementation.
///
/// Only `Implementation` and the `<Metric> Mean` / `<Metric> StdDev` pairs are
/// read; any other columns (the harness also writes Median, Min and Max) are
/// ignored.
pub fn read_dataset<R: Read>(reader: R) -> Result<BenchmarkDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(LoadError::Header)?;
    let missing: Vec<String> = required_columns()
        .into_iter()
        .filter(|col| !headers.iter().any(|h| h == col))
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result.map_err(|source| LoadError::Parse {
            row: idx + 1,
            source,
        })?;
        rows.push(raw.into_row()?);
    }

    let dataset = BenchmarkDataset::new(rows);
    if dataset.is_empty() {
        return Err(LoadError::Empty);
    }
    for name in dataset.duplicate_implementations() {
        log::warn!("Implementation '{name}' appears on more than one row");
    }
    Ok(dataset)
}

/// The nine columns every results file must carry.
pub fn required_columns() -> Vec<String> {
    std::iter::once(IMPLEMENTATION_COLUMN.to_string())
        .chain(
            Metric::ALL
                .iter()
                .flat_map(|m| [m.mean_column(), m.std_dev_column()]),
        )
        .collect()
}

// ---------------------------------------------------------------------------
// Row decoding
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Implementation")]
    implementation: String,
    #[serde(rename = "Add Mean")]
    add_mean: f64,
    #[serde(rename = "Add StdDev")]
    add_std_dev: f64,
    #[serde(rename = "Modify Mean")]
    modify_mean: f64,
    #[serde(rename = "Modify StdDev")]
    modify_std_dev: f64,
    #[serde(rename = "Delete Mean")]
    delete_mean: f64,
    #[serde(rename = "Delete StdDev")]
    delete_std_dev: f64,
    #[serde(rename = "BestPrice Mean")]
    best_price_mean: f64,
    #[serde(rename = "BestPrice StdDev")]
    best_price_std_dev: f64,
}

impl RawRow {
    fn into_row(self) -> Result<BenchmarkRow, LoadError> {
        let implementation = self.implementation;
        let measurement = |metric: Metric, mean: f64, std_dev: f64| {
            let values = [
                (metric.mean_column(), mean),
                (metric.std_dev_column(), std_dev),
            ];
            for (column, value) in values {
                if !value.is_finite() {
                    return Err(LoadError::NonFinite {
                        implementation: implementation.clone(),
                        column,
                        value,
                    });
                }
            }
            if std_dev < 0.0 {
                return Err(LoadError::NegativeStdDev {
                    implementation: implementation.clone(),
                    column: metric.std_dev_column(),
                    value: std_dev,
                });
            }
            Ok(Measurement { mean, std_dev })
        };

        let add = measurement(Metric::Add, self.add_mean, self.add_std_dev)?;
        let modify = measurement(Metric::Modify, self.modify_mean, self.modify_std_dev)?;
        let delete = measurement(Metric::Delete, self.delete_mean, self.delete_std_dev)?;
        let best_price = measurement(
            Metric::BestPrice,
            self.best_price_mean,
            self.best_price_std_dev,
        )?;

        Ok(BenchmarkRow {
            implementation,
            add,
            modify,
            delete,
            best_price,
        })
    }
}
