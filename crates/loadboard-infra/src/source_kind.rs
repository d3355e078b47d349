//! Picks a grid source for a file path

use std::path::Path;

use loadboard_domain::GridSource;
use loadboard_types::RetrievalError;
pub use loadboard_types::SourceKind;

use crate::csv_grid::CsvGridSource;
use crate::sheet_values::SheetValuesSource;

/// Infer the source kind from the file extension
pub fn infer_kind(path: &Path) -> Option<SourceKind> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "csv" | "txt" => Some(SourceKind::Csv),
        "json" => Some(SourceKind::Json),
        _ => None,
    }
}

/// Open a grid source, using `kind` when given and the extension otherwise.
/// `delimiter` only applies to CSV files.
pub fn open_source(
    path: &Path,
    kind: Option<SourceKind>,
    delimiter: Option<u8>,
) -> Result<Box<dyn GridSource>, RetrievalError> {
    let kind = kind.or_else(|| infer_kind(path)).ok_or_else(|| {
        RetrievalError::Unsupported(format!(
            "cannot tell the format of {} (use --source-kind)",
            path.display()
        ))
    })?;

    Ok(match kind {
        SourceKind::Csv => {
            let source = CsvGridSource::new(path);
            match delimiter {
                Some(d) => Box::new(source.with_delimiter(d)),
                None => Box::new(source),
            }
        }
        SourceKind::Json => Box::new(SheetValuesSource::new(path)),
    })
}
