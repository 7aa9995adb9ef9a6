use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use tracing::{debug, warn};

use super::{write_error, CatalogStore};
use crate::error::{CatalogError, Result};
use crate::models::Book;

impl CatalogStore {
    /// Read every record from the backing file, skipping empty lines.
    ///
    /// A file that cannot be opened (most commonly because it does not exist
    /// yet) is an empty catalog. A line that fails to decode aborts the load
    /// with its 1-based line number.
    pub fn load_all(&self) -> Result<Vec<Book>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "catalog file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "could not open catalog file, treating it as empty"
                );
                return Ok(Vec::new());
            }
        };

        let mut books = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| CatalogError::Read {
                path: self.path.clone(),
                source,
            })?;
            if line.is_empty() {
                continue;
            }
            books.push(Book::decode(&line).map_err(|err| at_line(err, idx + 1))?);
        }

        debug!(path = %self.path.display(), count = books.len(), "loaded catalog");
        Ok(books)
    }

    /// Truncate the backing file and write one line per record, in order.
    pub fn save_all(&self, books: &[Book]) -> Result<()> {
        let file = File::create(&self.path).map_err(|source| write_error(&self.path, source))?;
        let mut writer = BufWriter::new(file);
        for book in books {
            writeln!(writer, "{}", book.encode()).map_err(|source| write_error(&self.path, source))?;
        }
        writer
            .flush()
            .map_err(|source| write_error(&self.path, source))?;

        debug!(path = %self.path.display(), count = books.len(), "saved catalog");
        Ok(())
    }
}

fn at_line(err: CatalogError, line_number: usize) -> CatalogError {
    match err {
        CatalogError::MalformedLine { line, reason, .. } => CatalogError::MalformedLine {
            line_number,
            line,
            reason,
        },
        other => other,
    }
}
