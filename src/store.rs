//! Persistence collaborator: the `TutorialStore` trait and its PostgreSQL and in-memory implementations.

mod memory;
mod postgres;

pub use memory::InMemoryTutorialStore;
pub use postgres::{ensure_database_exists, PgTutorialStore};

use crate::error::StoreError;
use crate::model::Tutorial;
use async_trait::async_trait;

/// Storage operations the HTTP layer needs. Ids are assigned by the implementation.
#[async_trait]
pub trait TutorialStore: Send + Sync {
    /// All tutorials ordered by id.
    async fn find_all(&self) -> Result<Vec<Tutorial>, StoreError>;

    /// Tutorials whose title contains `title`, ignoring case. The needle is matched literally.
    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Tutorial>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>, StoreError>;

    /// Insert when `id` is `None`, otherwise overwrite the row with that id.
    /// Returns the stored row. Overwriting a missing id yields [`StoreError::Missing`].
    async fn save(&self, tutorial: Tutorial) -> Result<Tutorial, StoreError>;

    /// Delete by id. Deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;

    async fn delete_all(&self) -> Result<(), StoreError>;

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, StoreError>;

    /// Connectivity check used by the readiness route.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Case-insensitive literal substring test shared by stores that filter in process.
pub(crate) fn title_contains(title: Option<&str>, needle: &str) -> bool {
    match title {
        Some(t) => t.to_lowercase().contains(&needle.to_lowercase()),
        None => false,
    }
}
