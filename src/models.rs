//! Domain model for a single catalog entry plus its one-line text encoding.
//!
//! The line format is `id;title;author;year` with no quoting. A title or
//! author containing `;` produces a line that no longer decodes; existing
//! catalog files depend on this exact format, so it is kept as-is.

use std::fmt;

use crate::error::{CatalogError, Result};

/// Field separator used in the backing file.
pub const FIELD_SEPARATOR: char = ';';

#[derive(Debug, Clone, PartialEq, Eq)]
/// One book in the catalog.
pub struct Book {
    /// Caller-chosen identifier. Uniqueness is only checked when adding.
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Publication year. Any value is accepted.
    pub year: i32,
}

impl Book {
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// Render the record as a single catalog line (without the newline).
    pub fn encode(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.id,
            self.title,
            self.author,
            self.year,
            sep = FIELD_SEPARATOR
        )
    }

    /// Parse one catalog line. The returned error carries line number 0;
    /// callers reading a file fill in the real position.
    pub fn decode(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if parts.len() != 4 {
            return Err(malformed(
                line,
                format!("expected 4 fields, found {}", parts.len()),
            ));
        }

        let id = parts[0]
            .trim()
            .parse::<i64>()
            .map_err(|err| malformed(line, format!("bad id {:?}: {err}", parts[0])))?;
        let year = parts[3]
            .trim()
            .parse::<i32>()
            .map_err(|err| malformed(line, format!("bad year {:?}: {err}", parts[3])))?;

        Ok(Self {
            id,
            title: parts[1].to_string(),
            author: parts[2].to_string(),
            year,
        })
    }
}

fn malformed(line: &str, reason: String) -> CatalogError {
    CatalogError::MalformedLine {
        line_number: 0,
        line: line.to_string(),
        reason,
    }
}

impl fmt::Display for Book {
    /// The labelled block the console prints for search and listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        write!(f, "Year: {}", self.year)
    }
}
