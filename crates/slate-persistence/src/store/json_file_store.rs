use crate::store::atomic_writer::AtomicWriter;
use crate::traits::BoardStore;
use slate_core::{SlateError, SlateResult};
use slate_domain::Board;
use std::path::{Path, PathBuf};

/// Board persistence over a single JSON file.
///
/// The file body is the board wire shape itself (camelCase keys);
/// there is no envelope or version header.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the board for startup: a missing file yields the default
    /// empty board, and a file that fails to parse is logged and also
    /// falls back to the default rather than aborting.
    pub async fn load_or_default(&self) -> Board {
        if !self.path.exists() {
            return Board::default();
        }
        match self.load().await {
            Ok(board) => board,
            Err(e) => {
                tracing::warn!(
                    "could not read board from {}: {}; starting from an empty board",
                    self.path.display(),
                    e
                );
                Board::default()
            }
        }
    }
}

#[async_trait::async_trait]
impl BoardStore for JsonFileStore {
    async fn save(&self, board: &Board) -> SlateResult<()> {
        let bytes = serde_json::to_vec_pretty(board)
            .map_err(|e| SlateError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &bytes).await?;

        tracing::debug!(
            "saved board with {} tasks to {}",
            board.tasks.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn load(&self) -> SlateResult<Board> {
        let bytes = AtomicWriter::read_all(&self.path).await?;
        serde_json::from_slice(&bytes).map_err(|e| SlateError::Serialization(e.to_string()))
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
