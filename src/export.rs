//! CSV rendering for the "Export CSV" menu entry.
//!
//! Title and author are wrapped in double quotes but not escaped, so a value
//! containing `"` yields a row most CSV readers will misparse. Existing
//! consumers of `books.csv` expect this output verbatim.

use crate::models::Book;

pub const CSV_HEADER: &str = "ID,Title,Author,Year";

/// Build the complete CSV document, one `\n`-terminated line per book.
pub fn render_csv(books: &[Book]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + books.len() * 32);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for book in books {
        out.push_str(&csv_row(book));
        out.push('\n');
    }
    out
}

fn csv_row(book: &Book) -> String {
    format!(
        "{},\"{}\",\"{}\",{}",
        book.id, book.title, book.author, book.year
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_catalog_is_header_only() {
        assert_eq!(render_csv(&[]), "ID,Title,Author,Year\n");
    }

    #[test]
    fn text_fields_are_quoted_numbers_are_not() {
        let books = vec![
            Book::new(1, "A", "X", 2000),
            Book::new(2, "Hello, World", "Y", 1999),
        ];
        assert_eq!(
            render_csv(&books),
            "ID,Title,Author,Year\n1,\"A\",\"X\",2000\n2,\"Hello, World\",\"Y\",1999\n"
        );
    }

    #[test]
    fn embedded_quotes_pass_through_unescaped() {
        let books = vec![Book::new(3, "The \"Best\"", "Z", 2020)];
        assert!(render_csv(&books).ends_with("3,\"The \"Best\"\",\"Z\",2020\n"));
    }
}
