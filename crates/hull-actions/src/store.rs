//! Flat file store.
//!
//! Every (module, path) pair maps to exactly one file named
//! `<module>.<path>` directly under the project root; the namespace has no
//! nested directories.

use hull_core::EngineError;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// The on-disk location of a (module, path) pair.
pub fn file_path(root: &Path, module: &str, path: &str) -> PathBuf {
    root.join(format!("{module}.{path}"))
}

/// Read the full content of a stored file.
pub async fn read(root: &Path, module: &str, path: &str) -> Result<String, EngineError> {
    match tokio::fs::read_to_string(file_path(root, module, path)).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(EngineError::NotFound(format!(
            "File `{module}/{path}` is missing from the project root."
        ))),
        Err(e) => Err(e.into()),
    }
}

/// Create or wholly replace a stored file.
pub async fn write(root: &Path, module: &str, path: &str, content: &str) -> Result<(), EngineError> {
    tokio::fs::write(file_path(root, module, path), content).await?;
    Ok(())
}

/// Append to a stored file, creating it if absent. No separator is
/// injected between the existing and new content.
pub async fn append(root: &Path, module: &str, path: &str, content: &str) -> Result<(), EngineError> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path(root, module, path))
        .await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
