//! Shared test utilities.

use tempfile::TempDir;

/// Creates an empty working directory so binary runs see no stray `.env` or
/// `mrtally.toml`.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn isolated_working_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create working directory: {error}"))
}
