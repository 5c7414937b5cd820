use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

impl crate::LogFS {
    /// Replaces the entire content of `path` with `content`.
    ///
    /// The new content is staged in a sibling temporary file and renamed over
    /// the target, so readers see either the old document or the new one.
    /// The target's permissions are carried over when it already exists.
    pub async fn replace_document<T: AsRef<Path>>(path: T, content: &str) -> Result<()> {
        let path_ref = path.as_ref();
        let dir = match path_ref.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let staged = tempfile::Builder::new()
            .prefix(".logwin-")
            .tempfile_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?
            .into_temp_path();

        tokio::fs::write(&staged, content)
            .await
            .with_context(|| format!("Failed to write {}", staged.display()))?;

        if let Ok(metadata) = tokio::fs::metadata(path_ref).await {
            tokio::fs::set_permissions(&staged, metadata.permissions())
                .await
                .with_context(|| format!("Failed to copy permissions of {}", path_ref.display()))?;
        }

        staged
            .persist(path_ref)
            .with_context(|| format!("Failed to replace {}", path_ref.display()))?;

        debug!(path = %path_ref.display(), bytes = content.len(), "Replaced document");
        Ok(())
    }
}
