//! Labeled CSV record reader.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::data_handling::{Dataset, Record};

/// Configuration for reading labeled CSV files into a [`Dataset`].
#[derive(Debug, Clone)]
pub struct CsvReaderConfig {
    /// Column name holding the label.
    pub label_column: String,
    /// Optional list of feature columns to load (in order).
    /// When `None`, every non-label column is treated as a feature.
    pub feature_columns: Option<Vec<String>>,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for CsvReaderConfig {
    fn default() -> Self {
        Self {
            label_column: "label".to_string(),
            feature_columns: None,
            delimiter: b',',
        }
    }
}

/// Read a labeled CSV file with the default configuration.
pub fn read_records_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    read_records_csv_with_config(path, &CsvReaderConfig::default())
}

/// Read a labeled CSV file using a custom configuration.
pub fn read_records_csv_with_config<P: AsRef<Path>>(
    path: P,
    config: &CsvReaderConfig,
) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open records file: {}", path.as_ref().display()))?;

    let headers = reader
        .headers()
        .context("Failed to read records header row")?
        .clone();

    let label_idx = find_column(&headers, &config.label_column)
        .ok_or_else(|| anyhow!("Missing label column '{}'", config.label_column))?;

    let feature_indices = match &config.feature_columns {
        Some(names) => names
            .iter()
            .map(|name| {
                find_column(&headers, name)
                    .ok_or_else(|| anyhow!("Missing feature column '{}'", name))
            })
            .collect::<Result<Vec<usize>>>()?,
        None => (0..headers.len()).filter(|&i| i != label_idx).collect(),
    };

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row + 1))?;
        let label = parse_field(&record, label_idx, row)?;
        let features = feature_indices
            .iter()
            .map(|&idx| parse_field(&record, idx, row))
            .collect::<Result<Vec<f64>>>()?;
        records.push(Record::new(label, features));
    }

    let dataset = Dataset::from_records(records)
        .with_context(|| format!("Invalid records in {}", path.as_ref().display()))?;
    log::debug!(
        "Read {} records x {} features from {}",
        dataset.len(),
        dataset.n_features(),
        path.as_ref().display()
    );
    Ok(dataset)
}

fn parse_field(record: &StringRecord, idx: usize, row: usize) -> Result<f64> {
    let raw = record
        .get(idx)
        .ok_or_else(|| anyhow!("Row {} is missing column {}", row + 1, idx))?;
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("Row {}: cannot parse '{}' as a number", row + 1, raw))
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}
