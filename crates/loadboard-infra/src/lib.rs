//! Infrastructure layer - grid sources and profile loaders

pub mod csv_grid;
pub mod profile_loader;
pub mod sheet_values;
pub mod source_kind;

pub use csv_grid::CsvGridSource;
pub use profile_loader::ProfileLoader;
pub use sheet_values::SheetValuesSource;
pub use source_kind::{open_source, SourceKind};
