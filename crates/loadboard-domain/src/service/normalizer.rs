//! Table normalizer
//!
//! Turns the raw sheet grid into a [`Dataset`]: skips the banner rows,
//! locates columns by header name, trims cells, drops empty rows and
//! resolves the reference date.

use std::collections::HashMap;

use chrono::NaiveDate;
use loadboard_types::{CoercionWarning, SchemaError};
use tracing::{debug, info, warn};

use crate::model::{Cell, Dataset, PipelineConfig, Quantity, RawGrid, Row};

/// Format of the fallback reference date
pub const REFERENCE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Header lookup key: whitespace collapsed, lowercase
fn canonical_header(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

struct HeaderIndex {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    fn new(header: &[Cell]) -> Self {
        let names: Vec<String> = header.iter().map(|c| c.to_text().trim().to_string()).collect();
        let mut positions = HashMap::new();
        for (idx, name) in names.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            // First occurrence wins on duplicate headers
            positions.entry(canonical_header(name)).or_insert(idx);
        }
        Self { names, positions }
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.positions.get(&canonical_header(name)).copied()
    }

    fn require(&self, name: &str) -> Result<usize, SchemaError> {
        self.find(name)
            .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
    }

    fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }
}

fn cell_text(cells: &[Cell], idx: usize) -> String {
    cells.get(idx).map(Cell::to_text).unwrap_or_default()
}

/// Whole, non-negative and small enough for a `u64` without saturating
fn whole_count(n: f64) -> Option<u64> {
    (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n < u64::MAX as f64).then_some(n as u64)
}

/// Parse a package count. Blank is `Missing`; anything that is not a
/// non-negative whole number that fits a `u64` is `Invalid`.
pub fn parse_quantity(cell: &Cell) -> Quantity {
    match cell {
        c if c.is_blank() => Quantity::Missing,
        Cell::Number(n) => match whole_count(*n) {
            Some(n) => Quantity::Count(n),
            None => Quantity::Invalid(cell.to_text()),
        },
        Cell::Text(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<u64>() {
                return Quantity::Count(n);
            }
            match s.parse::<f64>().ok().and_then(whole_count) {
                Some(n) => Quantity::Count(n),
                None => Quantity::Invalid(s.to_string()),
            }
        }
        other => Quantity::Invalid(other.to_text()),
    }
}

/// Normalize a raw grid into a dataset
///
/// `today` is used as the reference date when the date column is absent or
/// entirely empty.
pub fn normalize(
    grid: &RawGrid,
    config: &PipelineConfig,
    today: NaiveDate,
) -> Result<Dataset, SchemaError> {
    let header_skip = config.header_skip;
    let header = grid
        .rows()
        .get(header_skip)
        .ok_or(SchemaError::MissingHeader {
            rows: grid.len(),
            header_skip,
        })?;

    let index = HeaderIndex::new(header);
    let columns = &config.columns;
    let cage_col = index.require(&columns.cage_id)?;
    let clock_col = index.require(&columns.ops_clock)?;
    let status_col = index.require(&columns.status)?;
    let date_col = index.find(&columns.date);
    let quantity_col = index.find(&columns.quantity);

    if quantity_col.is_none() {
        debug!(column = %columns.quantity, "quantity column absent, shipped quantity will be 0");
    }

    let mut rows = Vec::new();
    let mut warnings = Vec::new();
    let mut reference_date: Option<String> = None;
    let mut dropped_empty = 0usize;

    for (offset, raw) in grid.rows().iter().enumerate().skip(header_skip + 1) {
        let source_row = offset + 1;
        if raw.iter().all(Cell::is_blank) {
            dropped_empty += 1;
            continue;
        }
        let cells: Vec<Cell> = raw.iter().map(Cell::trimmed).collect();

        if reference_date.is_none() {
            if let Some(col) = date_col {
                let date = cell_text(&cells, col);
                if !date.is_empty() {
                    reference_date = Some(date);
                }
            }
        }

        let cage_id = cell_text(&cells, cage_col);
        if cage_id.is_empty() {
            debug!(row = source_row, "row without cage id dropped");
            continue;
        }

        let status_marker = cell_text(&cells, status_col);
        let status = config.markers.classify(&status_marker);

        let quantity = match quantity_col {
            Some(col) => cells.get(col).map(parse_quantity).unwrap_or(Quantity::Missing),
            None => Quantity::Missing,
        };
        if let (Quantity::Invalid(value), Some(col)) = (&quantity, quantity_col) {
            let warning = CoercionWarning {
                row: source_row,
                column: index.name(col).to_string(),
                value: value.clone(),
            };
            warn!("{}", warning);
            warnings.push(warning);
        }

        rows.push(Row {
            source_row,
            cage_id,
            ops_clock: cell_text(&cells, clock_col),
            status,
            status_marker,
            quantity,
        });
    }

    let reference_date = match reference_date {
        Some(date) => date,
        None => {
            debug!("no reference date in sheet, using today");
            today.format(REFERENCE_DATE_FORMAT).to_string()
        }
    };

    info!(
        rows = rows.len(),
        dropped_empty,
        warnings = warnings.len(),
        reference_date = %reference_date,
        "sheet normalized"
    );

    Ok(Dataset::new(
        rows,
        reference_date,
        warnings,
        quantity_col.is_some(),
    ))
}
