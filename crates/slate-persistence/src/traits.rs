use async_trait::async_trait;
use slate_core::SlateResult;
use slate_domain::Board;
use std::path::Path;

/// Abstract storage for the single board blob.
///
/// Implementations persist the whole board on every save; there are no
/// partial or batched writes.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Persist the full board, replacing whatever was stored before.
    async fn save(&self, board: &Board) -> SlateResult<()>;

    /// Load the stored board.
    async fn load(&self) -> SlateResult<Board>;

    /// Whether anything has been stored yet.
    async fn exists(&self) -> bool;

    /// Location of the backing file.
    fn path(&self) -> &Path;
}
