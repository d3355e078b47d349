//! CSV export of the loading sheet
//!
//! Sheets exports are UTF-8, sometimes with a BOM. Files re-saved from
//! desktop spreadsheet tools on Windows come out as Windows-1252, which is
//! used as a fallback when the bytes are not valid UTF-8.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::{UTF_8, WINDOWS_1252};
use loadboard_domain::{GridSource, RawGrid};
use loadboard_types::RetrievalError;
use tracing::{debug, warn};

/// Grid source backed by a CSV file
#[derive(Debug, Clone)]
pub struct CsvGridSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvGridSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Use another field delimiter (`;` for pt-BR locale exports)
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GridSource for CsvGridSource {
    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }

    fn fetch(&self) -> Result<RawGrid, RetrievalError> {
        if !self.path.exists() {
            return Err(RetrievalError::NotFound(self.path.display().to_string()));
        }
        let bytes = fs::read(&self.path)?;
        let text = decode(&bytes);
        parse_grid(&text, self.delimiter)
    }
}

/// Decode file bytes, falling back to Windows-1252
pub fn decode(bytes: &[u8]) -> String {
    let (decoded, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return decoded.into_owned();
    }
    warn!("CSV is not valid UTF-8, decoding as Windows-1252");
    let (decoded, _, _) = WINDOWS_1252.decode(bytes);
    decoded.into_owned()
}

/// Parse CSV text into a grid. Every record is kept, banner rows included,
/// and records may have different lengths.
pub fn parse_grid(text: &str, delimiter: u8) -> Result<RawGrid, RetrievalError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }
    debug!(rows = rows.len(), "CSV grid parsed");

    Ok(RawGrid::from_text_rows(rows))
}
