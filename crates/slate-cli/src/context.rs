use slate_core::SlateResult;
use slate_domain::Board;
use slate_persistence::{BoardStore, JsonFileStore};

/// Board plus its store, loaded once per CLI invocation.
pub struct CliContext {
    pub board: Board,
    store: JsonFileStore,
}

impl CliContext {
    pub async fn load(file_path: &str) -> Self {
        let store = JsonFileStore::new(file_path);
        let board = store.load_or_default().await;
        if let Err(reason) = board.verify_integrity() {
            tracing::warn!("loaded board failed an integrity check: {reason}");
        }
        Self { board, store }
    }

    /// Persist the next board, then make it current.
    pub async fn commit(&mut self, next: Board) -> SlateResult<()> {
        self.store.save(&next).await?;
        self.board = next;
        Ok(())
    }
}
