//! Error taxonomy shared by the store and the console driver.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while reading, mutating or exporting the
/// catalog. None of these are fatal to the menu loop.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A line in the backing file does not hold four `;`-separated fields
    /// with numeric id and year.
    #[error("line {line_number}: malformed record {line:?}: {reason}")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    /// An add was attempted with an id that is already present.
    #[error("Book id {0} already exists.")]
    DuplicateId(i64),

    /// No record carries the requested id.
    #[error("Book id {0} not found")]
    NotFound(i64),

    /// The sort sub-menu received something other than 1 or 2.
    #[error("invalid sort option {0}")]
    InvalidSortKey(u32),

    /// The catalog file could not be read after it was opened.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A destination (catalog or CSV) could not be opened or written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
