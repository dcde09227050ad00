mod embedded;
mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PostgresRepository;

use async_trait::async_trait;

use crate::models::{Note, NoteDraft};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] refinery::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Record store backing the note handlers.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Persists a new note and returns it with its assigned id.
    async fn insert(&self, draft: NoteDraft) -> Result<Note, StoreError>;

    async fn fetch(&self, id: i64) -> Result<Option<Note>, StoreError>;

    /// All notes in ascending id order.
    async fn fetch_all(&self) -> Result<Vec<Note>, StoreError>;

    /// Replaces title and content in place. `None` if no such note exists.
    async fn update(&self, id: i64, draft: NoteDraft) -> Result<Option<Note>, StoreError>;

    /// Returns whether a note was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
