//! Raw spreadsheet grid as handed over by a grid source

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell
///
/// CSV sources only produce `Text`; sheet-values dumps may carry numbers,
/// booleans and nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Cell {
    /// True for `Empty` and for text that is only whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Bool(_) | Cell::Number(_) => false,
        }
    }

    /// Trim text cells; other cells are returned unchanged
    pub fn trimmed(&self) -> Cell {
        match self {
            Cell::Text(s) => Cell::Text(s.trim().to_string()),
            other => other.clone(),
        }
    }

    /// Display text of the cell
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Bool(b) => b.to_string(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Cell::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// Rows of cells exactly as pulled from the sheet, including the banner rows
/// above the header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGrid {
    rows: Vec<Vec<Cell>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Build a grid of text cells
    pub fn from_text_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| Cell::Text(c.into())).collect())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_cells() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::from("   ").is_blank());
        assert!(!Cell::Number(0.0).is_blank());
        assert!(!Cell::from(" OK ").is_blank());
    }

    #[test]
    fn test_trim_leaves_non_text_alone() {
        assert_eq!(Cell::from("  G-01 ").trimmed(), Cell::from("G-01"));
        assert_eq!(Cell::Number(2.5).trimmed(), Cell::Number(2.5));
        assert_eq!(Cell::Bool(true).trimmed(), Cell::Bool(true));
    }

    #[test]
    fn test_number_text() {
        assert_eq!(Cell::Number(12.0).to_text(), "12");
        assert_eq!(Cell::Number(1.5).to_text(), "1.5");
    }

    #[test]
    fn test_deserialize_mixed_row() {
        let row: Vec<Cell> = serde_json::from_str(r#"["OK", 3, null, true]"#).unwrap();
        assert_eq!(
            row,
            vec![
                Cell::from("OK"),
                Cell::Number(3.0),
                Cell::Empty,
                Cell::Bool(true)
            ]
        );
    }
}
