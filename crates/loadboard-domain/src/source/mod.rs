//! Grid source trait
//!
//! Implemented by the infrastructure layer for every way the loading sheet
//! can be pulled. Retries and timeouts belong to implementations.

use loadboard_types::RetrievalError;

use crate::model::RawGrid;

pub trait GridSource {
    /// Human-readable origin, used in logs and error messages
    fn describe(&self) -> String;

    /// Pull the full sheet, banner rows included
    fn fetch(&self) -> Result<RawGrid, RetrievalError>;
}

impl<T: GridSource + ?Sized> GridSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&self) -> Result<RawGrid, RetrievalError> {
        (**self).fetch()
    }
}
