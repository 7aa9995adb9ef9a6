//! Flat-file persistence for the catalog.
//!
//! Every operation reloads the whole file and, when it mutates anything,
//! rewrites the whole file. Nothing is cached between calls and there is no
//! locking: two processes editing the same file concurrently can lose writes.

mod books;
mod file;

use std::io;
use std::path::{Path, PathBuf};

use crate::error::CatalogError;

pub use books::SortKey;

/// Handle on a catalog file. Cheap to construct; holds no open resources.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_error(path: &Path, source: io::Error) -> CatalogError {
    CatalogError::Write {
        path: path.to_path_buf(),
        source,
    }
}
