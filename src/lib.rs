//! Core library surface for the book catalog console application.
//!
//! The catalog is a flat `;`-delimited text file. [`CatalogStore`] owns the
//! load/mutate/save cycle, [`Console`] is the interactive menu on top of it,
//! and `main.rs` only wires the console to stdin/stdout.
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod models;
pub mod store;

pub use config::CatalogPaths;
pub use console::Console;
pub use error::CatalogError;

/// The record type every layer passes around.
pub use models::Book;

pub use store::{CatalogStore, SortKey};
