mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Movie, MovieDraft},
};

/// Backend-agnostic record store. Handlers hold an `Arc<dyn MovieStore>` so
/// tests can inject an isolated in-memory instance.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> AppResult<Vec<Movie>>;

    async fn get(&self, id: i32) -> AppResult<Option<Movie>>;

    /// Exact, case-sensitive category match.
    async fn filter_by_category(&self, category: &str) -> AppResult<Vec<Movie>>;

    /// Inserts a new record and returns it with its assigned id.
    async fn create(&self, draft: MovieDraft) -> AppResult<Movie>;

    /// Overwrites the mutable fields of the record with this id, or returns
    /// `None` if no such record exists.
    async fn update(&self, id: i32, draft: MovieDraft) -> AppResult<Option<Movie>>;

    /// Returns `false` if no record had this id.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}
