//! Binary entry point: install logging, resolve the catalog location and hand
//! stdin/stdout to the menu loop until the user exits.
use std::io;

use book_catalog::{CatalogPaths, Console};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let paths = CatalogPaths::default();
    tracing::debug!(data = %paths.data_file.display(), "starting catalog console");

    let stdin = io::stdin();
    let mut console = Console::new(&paths, stdin.lock(), io::stdout());
    console.run()
}
