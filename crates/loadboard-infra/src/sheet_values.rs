//! Spreadsheet "values" dump
//!
//! Accepts the body of a sheets values read (`{"range": ..., "values":
//! [[...]]}`) or a bare array of rows. Cells may be strings, numbers,
//! booleans or null.

use std::fs;
use std::path::{Path, PathBuf};

use loadboard_domain::{Cell, GridSource, RawGrid};
use loadboard_types::RetrievalError;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ValuesBody {
    Range {
        #[serde(default)]
        range: Option<String>,
        #[serde(default, rename = "majorDimension")]
        major_dimension: Option<String>,
        #[serde(default)]
        values: Vec<Vec<Cell>>,
    },
    Rows(Vec<Vec<Cell>>),
}

/// Grid source backed by a saved values response
#[derive(Debug, Clone)]
pub struct SheetValuesSource {
    path: PathBuf,
}

impl SheetValuesSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GridSource for SheetValuesSource {
    fn describe(&self) -> String {
        format!("sheet values {}", self.path.display())
    }

    fn fetch(&self) -> Result<RawGrid, RetrievalError> {
        if !self.path.exists() {
            return Err(RetrievalError::NotFound(self.path.display().to_string()));
        }
        let content = fs::read_to_string(&self.path)?;
        parse_values(&content)
    }
}

pub fn parse_values(content: &str) -> Result<RawGrid, RetrievalError> {
    let body: ValuesBody = serde_json::from_str(content)?;
    let rows = match body {
        ValuesBody::Range {
            range,
            major_dimension,
            values,
        } => {
            if let Some(dim) = major_dimension.as_deref() {
                if dim != "ROWS" {
                    return Err(RetrievalError::Unsupported(format!(
                        "majorDimension {}",
                        dim
                    )));
                }
            }
            debug!(range = range.as_deref().unwrap_or("?"), rows = values.len(), "sheet values parsed");
            values
        }
        ValuesBody::Rows(rows) => rows,
    };
    Ok(RawGrid::new(rows))
}
