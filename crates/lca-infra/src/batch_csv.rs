//! CSV loader for batch analysis requests
//!
//! Expected header: `material,quantity` (extra columns are ignored).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl From<CsvLoaderError> for lca_types::Error {
    fn from(err: CsvLoaderError) -> Self {
        match err {
            CsvLoaderError::IoError(e) => lca_types::Error::Io(e),
            other => lca_types::Error::BatchInput(other.to_string()),
        }
    }
}

/// One line of a batch file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    /// 1-based row number in the file, header included
    pub row: usize,
    pub material: String,
    /// Quantity in kg, as written (not yet validated as positive)
    pub quantity: f64,
}

/// Load analysis requests from a CSV file
pub fn load_requests_from_csv<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<AnalysisRequest>, CsvLoaderError> {
    let file = File::open(path)?;
    load_requests_from_reader(file)
}

/// Load analysis requests from any reader producing CSV text
pub fn load_requests_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<AnalysisRequest>, CsvLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let material_col = column_index(&headers, "material")?;
    let quantity_col = column_index(&headers, "quantity")?;

    let mut requests = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 2; // header is row 1

        let material = record.get(material_col).unwrap_or("");
        if material.is_empty() {
            continue;
        }

        let raw_quantity = record.get(quantity_col).unwrap_or("");
        let quantity = raw_quantity
            .parse::<f64>()
            .map_err(|_| CsvLoaderError::InvalidNumber {
                row,
                column: "quantity".to_string(),
                value: raw_quantity.to_string(),
            })?;

        requests.push(AnalysisRequest {
            row,
            material: material.to_string(),
            quantity,
        });
    }

    Ok(requests)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, CsvLoaderError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| CsvLoaderError::MissingColumn(name.to_string()))
}
