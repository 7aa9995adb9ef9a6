use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::{write_error, CatalogStore};
use crate::error::{CatalogError, Result};
use crate::export::render_csv;
use crate::models::Book;

/// Ordering offered by the sort sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic, ascending.
    Title,
    /// Numeric, ascending.
    Year,
}

impl SortKey {
    /// Map the sub-menu choice (`1` title, `2` year) to a key.
    pub fn from_choice(choice: u32) -> Result<Self> {
        match choice {
            1 => Ok(Self::Title),
            2 => Ok(Self::Year),
            other => Err(CatalogError::InvalidSortKey(other)),
        }
    }
}

impl CatalogStore {
    /// Append a book unless its id is already taken. A conflict leaves the
    /// file untouched.
    pub fn add(&self, book: Book) -> Result<()> {
        let mut books = self.load_all()?;
        if books.iter().any(|existing| existing.id == book.id) {
            return Err(CatalogError::DuplicateId(book.id));
        }

        let id = book.id;
        books.push(book);
        self.save_all(&books)?;
        info!(id, "added book");
        Ok(())
    }

    /// First record with the given id, if any.
    pub fn find_by_id(&self, id: i64) -> Result<Option<Book>> {
        Ok(self.load_all()?.into_iter().find(|book| book.id == id))
    }

    /// Replace title, author and year of the matching record in place. The id
    /// itself never changes.
    pub fn update(&self, id: i64, title: &str, author: &str, year: i32) -> Result<()> {
        let mut books = self.load_all()?;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        book.title = title.to_string();
        book.author = author.to_string();
        book.year = year;

        self.save_all(&books)?;
        info!(id, "updated book");
        Ok(())
    }

    /// Remove every record with the given id, returning how many went away.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let mut books = self.load_all()?;
        let before = books.len();
        books.retain(|book| book.id != id);
        let removed = before - books.len();

        if removed == 0 {
            return Err(CatalogError::NotFound(id));
        }

        self.save_all(&books)?;
        info!(id, removed, "deleted book");
        Ok(removed)
    }

    /// Sorted copy of the catalog. The backing file is not rewritten.
    pub fn sorted(&self, key: SortKey) -> Result<Vec<Book>> {
        let mut books = self.load_all()?;
        match key {
            SortKey::Title => books.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Year => books.sort_by_key(|book| book.year),
        }
        Ok(books)
    }

    /// Write the catalog as CSV to `dest`, returning the number of rows.
    pub fn export_csv(&self, dest: &Path) -> Result<usize> {
        let books = self.load_all()?;
        fs::write(dest, render_csv(&books)).map_err(|source| write_error(dest, source))?;
        debug!(dest = %dest.display(), rows = books.len(), "exported catalog");
        Ok(books.len())
    }
}
