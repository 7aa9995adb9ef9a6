use std::path::{Path, PathBuf};

/// Catalog file name, resolved against the working directory.
pub const DATA_FILE_NAME: &str = "books.txt";
/// Export target written by the "Export CSV" menu entry.
pub const EXPORT_FILE_NAME: &str = "books.csv";

/// Where the catalog lives and where exports go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub data_file: PathBuf,
    pub export_file: PathBuf,
}

impl CatalogPaths {
    /// Place both files inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            data_file: dir.join(DATA_FILE_NAME),
            export_file: dir.join(EXPORT_FILE_NAME),
        }
    }
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DATA_FILE_NAME),
            export_file: PathBuf::from(EXPORT_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_relative_to_working_dir() {
        let paths = CatalogPaths::default();
        assert_eq!(paths.data_file, Path::new("books.txt"));
        assert_eq!(paths.export_file, Path::new("books.csv"));
    }

    #[test]
    fn in_dir_roots_both_files() {
        let paths = CatalogPaths::in_dir("/tmp/shelf");
        assert_eq!(paths.data_file, Path::new("/tmp/shelf/books.txt"));
        assert_eq!(paths.export_file, Path::new("/tmp/shelf/books.csv"));
    }
}
