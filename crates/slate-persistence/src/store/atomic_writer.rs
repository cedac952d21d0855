use slate_core::SlateResult;
use std::path::Path;
use tokio::fs;

/// Write-to-temp-then-rename file writer. A crash mid-write leaves the
/// previous file contents intact.
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> SlateResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        // The temp file must live on the same filesystem as the target,
        // or the rename is not atomic.
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.path().to_path_buf();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    pub async fn read_all(path: &Path) -> SlateResult<Vec<u8>> {
        let data = fs::read(path).await?;
        tracing::debug!("read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
