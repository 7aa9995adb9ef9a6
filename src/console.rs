//! Line-oriented menu driver.
//!
//! This is thin glue: it reads a choice, gathers the fields an operation
//! needs, calls into [`CatalogStore`] and prints the outcome. Store errors
//! are turned into messages; only failures of the terminal itself end the
//! loop early.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::CatalogPaths;
use crate::error::CatalogError;
use crate::models::Book;
use crate::store::{CatalogStore, SortKey};

const MENU: &str = "\nMenu:\n1.Add book\n2.Display all\n3.Search by ID\n4.Update\n5.Delete\n6.Sort\n7.Export CSV\n0.Exit\nChoice: ";
const SEPARATOR: &str = "-------------------";

/// Interactive session over any reader/writer pair. `main` wires it to
/// stdin/stdout; tests feed it a scripted buffer.
pub struct Console<R, W> {
    store: CatalogStore,
    export_path: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(paths: &CatalogPaths, input: R, output: W) -> Self {
        Self {
            store: CatalogStore::new(&paths.data_file),
            export_path: paths.export_file.clone(),
            input,
            output,
        }
    }

    /// Show the menu until the user picks `0` or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.prompt(MENU)? else {
                self.say("Goodbye!")?;
                return Ok(());
            };

            if self.handle_choice(line.trim().parse().ok())? {
                return Ok(());
            }
        }
    }

    /// Hand back the writer, mostly so tests can inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Dispatch one menu choice. Returns `true` when the session should end.
    fn handle_choice(&mut self, choice: Option<u32>) -> Result<bool> {
        match choice {
            Some(1) => self.add_book()?,
            Some(2) => self.display_all()?,
            Some(3) => self.search_by_id()?,
            Some(4) => self.update_book()?,
            Some(5) => self.delete_book()?,
            Some(6) => self.sort_books()?,
            Some(7) => self.export_csv()?,
            Some(0) => {
                self.say("Goodbye!")?;
                return Ok(true);
            }
            _ => self.say("Invalid choice.")?,
        }
        Ok(false)
    }

    fn add_book(&mut self) -> Result<()> {
        let Some(id) = self.prompt_number::<i64>("Enter ID: ")? else {
            return Ok(());
        };
        let Some(title) = self.prompt("Enter Title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter Author: ")? else {
            return Ok(());
        };
        let Some(year) = self.prompt_number::<i32>("Enter Year: ")? else {
            return Ok(());
        };

        match self.store.add(Book::new(id, title, author, year)) {
            Ok(()) => self.say("Added successfully."),
            Err(CatalogError::DuplicateId(_)) => self.say("ID already exists!"),
            Err(err) => self.report(err, "Error saving data."),
        }
    }

    fn display_all(&mut self) -> Result<()> {
        match self.store.load_all() {
            Ok(books) if books.is_empty() => self.say("No books available."),
            Ok(books) => self.print_books(&books),
            Err(err) => self.report(err, "Error reading catalog."),
        }
    }

    fn search_by_id(&mut self) -> Result<()> {
        let Some(id) = self.prompt_number::<i64>("Enter ID to search: ")? else {
            return Ok(());
        };

        match self.store.find_by_id(id) {
            Ok(Some(book)) => self.say(book),
            Ok(None) => self.say("Book not found."),
            Err(err) => self.report(err, "Book not found."),
        }
    }

    fn update_book(&mut self) -> Result<()> {
        const FAILED: &str = "Book not found or error saving data.";

        let Some(id) = self.prompt_number::<i64>("Enter ID to update: ")? else {
            return Ok(());
        };
        match self.store.find_by_id(id) {
            Ok(Some(_)) => {}
            Ok(None) => return self.say(FAILED),
            Err(err) => return self.report(err, FAILED),
        }

        let Some(title) = self.prompt("New Title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("New Author: ")? else {
            return Ok(());
        };
        let Some(year) = self.prompt_number::<i32>("New Year: ")? else {
            return Ok(());
        };

        match self.store.update(id, &title, &author, year) {
            Ok(()) => self.say("Updated successfully."),
            Err(err) => self.report(err, FAILED),
        }
    }

    fn delete_book(&mut self) -> Result<()> {
        let Some(id) = self.prompt_number::<i64>("Enter ID to delete: ")? else {
            return Ok(());
        };

        match self.store.delete(id) {
            Ok(_) => self.say("Deleted successfully."),
            Err(CatalogError::NotFound(_)) => self.say("Book not found."),
            Err(err) => self.report(err, "Error saving data."),
        }
    }

    fn sort_books(&mut self) -> Result<()> {
        let Some(line) = self.prompt("Sort by: 1-Title, 2-Year\nChoice: ")? else {
            return Ok(());
        };
        // Anything unparsable falls through to the same "invalid option" path.
        let choice = line.trim().parse().unwrap_or(0);

        let key = match SortKey::from_choice(choice) {
            Ok(key) => key,
            Err(err) => return self.report(err, "Invalid option."),
        };
        match self.store.sorted(key) {
            Ok(books) => self.print_books(&books),
            Err(err) => self.report(err, "Error reading catalog."),
        }
    }

    fn export_csv(&mut self) -> Result<()> {
        let dest = self.export_path.clone();
        match self.store.export_csv(&dest) {
            Ok(_) => self.say(format!(
                "Export completed successfully to {}",
                dest.display()
            )),
            Err(err) => self.report(err, "Error creating CSV file."),
        }
    }

    fn print_books(&mut self, books: &[Book]) -> Result<()> {
        for book in books {
            self.say(book)?;
            self.say(SEPARATOR)?;
        }
        Ok(())
    }

    /// Print the message for a failed operation. A corrupt or unreadable
    /// catalog gets its own message regardless of which operation hit it.
    fn report(&mut self, err: CatalogError, message: &str) -> Result<()> {
        debug!(error = %err, "catalog operation failed");
        match err {
            CatalogError::MalformedLine { .. } | CatalogError::Read { .. } => {
                self.say(format!("Error reading catalog: {err}"))
            }
            _ => self.say(message),
        }
    }

    fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}").context("failed to write to console")
    }

    /// Print `label` and read one line. `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Like [`Self::prompt`] but parses the answer. Unparsable input prints a
    /// message and yields `None`, which aborts the current action.
    fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<Option<T>> {
        let Some(line) = self.prompt(label)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.say("Invalid number.")?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;

    fn run_script(dir: &TempDir, script: &str) -> String {
        let paths = CatalogPaths::in_dir(dir.path());
        let mut console = Console::new(&paths, Cursor::new(script.to_string()), Vec::new());
        console.run().unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn exit_says_goodbye() {
        let dir = TempDir::new().unwrap();
        let out = run_script(&dir, "0\n");
        assert!(out.starts_with(MENU));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn end_of_input_ends_the_loop() {
        let dir = TempDir::new().unwrap();
        assert!(run_script(&dir, "").ends_with("Goodbye!\n"));
    }

    #[test]
    fn unknown_choice_redisplays_menu() {
        let dir = TempDir::new().unwrap();
        let out = run_script(&dir, "9\nabc\n0\n");
        assert_eq!(out.matches("Invalid choice.").count(), 2);
        assert_eq!(out.matches("Menu:").count(), 3);
    }

    #[test]
    fn non_numeric_id_aborts_add() {
        let dir = TempDir::new().unwrap();
        let out = run_script(&dir, "1\nten\n0\n");
        assert!(out.contains("Invalid number."));
        assert!(!dir.path().join("books.txt").exists());
    }

    #[test]
    fn empty_catalog_display() {
        let dir = TempDir::new().unwrap();
        assert!(run_script(&dir, "2\n0\n").contains("No books available."));
    }

    #[test]
    fn bad_sort_choice_is_reported() {
        let dir = TempDir::new().unwrap();
        let out = run_script(&dir, "6\n3\n6\nx\n0\n");
        assert_eq!(out.matches("Invalid option.").count(), 2);
    }

    #[test]
    fn corrupt_catalog_does_not_end_session() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("books.txt"), "1;broken\n").unwrap();
        let out = run_script(&dir, "2\n0\n");
        assert!(out.contains("Error reading catalog: line 1"));
        assert!(out.ends_with("Goodbye!\n"));
    }
}
