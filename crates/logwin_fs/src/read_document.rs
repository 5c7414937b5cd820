use std::path::Path;

use anyhow::{Context, Result};
use logwin_domain::Document;
use tracing::debug;

use crate::decode;

impl crate::LogFS {
    /// Reads a whole file into a line snapshot.
    pub async fn read_document<T: AsRef<Path>>(path: T) -> Result<Document> {
        let path_ref = path.as_ref();
        let bytes = tokio::fs::read(path_ref)
            .await
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?;

        let document = Self::parse_document(&bytes)
            .with_context(|| format!("Failed to load {}", path_ref.display()))?;

        debug!(path = %path_ref.display(), lines = document.len(), "Loaded document");
        Ok(document)
    }

    /// Builds a line snapshot from raw bytes, e.g. piped input.
    pub fn parse_document(bytes: &[u8]) -> Result<Document> {
        let text = decode(bytes)?;
        Ok(Document::from_text(&text))
    }
}
