use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

/// Receives the generated archive.
#[async_trait]
pub trait ArchiveSink: Send + Sync {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Writes archives into a directory, creating it when needed. An existing
/// file with the same name is overwritten.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ArchiveSink for DirectorySink {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("failed to create output dir '{}'", self.dir.display()))?;
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to write archive '{}'", path.display()))?;
        info!(path = %path.display(), size_bytes = bytes.len(), "archive saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_directory_and_writes_archive() {
        let root = tempfile::tempdir().expect("tempdir");
        let sink = DirectorySink::new(root.path().join("out").join("nested"));

        let path = sink.save("portfolio.zip", b"PK\x03\x04").await.expect("save");

        assert_eq!(path, root.path().join("out/nested/portfolio.zip"));
        assert_eq!(std::fs::read(&path).expect("read"), b"PK\x03\x04");
    }

    #[tokio::test]
    async fn overwrites_previous_archive() {
        let root = tempfile::tempdir().expect("tempdir");
        let sink = DirectorySink::new(root.path());

        sink.save("a.zip", b"first").await.expect("first");
        let path = sink.save("a.zip", b"second").await.expect("second");

        assert_eq!(std::fs::read(path).expect("read"), b"second");
    }
}
