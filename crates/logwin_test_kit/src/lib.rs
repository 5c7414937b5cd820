//! Test helpers shared by the logwin crates.
//!
//! Log fixtures live next to the code that uses them; these helpers load them
//! relative to the calling crate and stage them in scratch files.

use std::path::Path;

use tempfile::NamedTempFile;

/// Loads a fixture file as text.
///
/// Panics with the offending path when the file cannot be read.
pub async fn fixture(path: &str) -> String {
    tokio::fs::read_to_string(path)
        .await
        .unwrap_or_else(|e| panic!("Failed to load fixture at {path}: {e}"))
}

/// Loads a fixture relative to the calling crate's manifest directory.
///
/// # Example
/// ```ignore
/// let content = fixture!("src/fixtures/transactions.log").await;
/// ```
#[macro_export]
macro_rules! fixture {
    ($path:expr) => {
        $crate::fixture(&format!("{}/{}", env!("CARGO_MANIFEST_DIR"), $path))
    };
}

/// Writes `content` to a fresh temporary file and returns its handle.
///
/// The file is removed when the handle is dropped.
pub async fn log_file(content: impl AsRef<[u8]>) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap_or_else(|e| panic!("Failed to create temp file: {e}"));
    write(file.path(), content).await;
    file
}

async fn write(path: &Path, content: impl AsRef<[u8]>) {
    tokio::fs::write(path, content)
        .await
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()))
}
