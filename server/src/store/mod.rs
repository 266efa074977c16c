//! Persistence boundary for to-do items.
//!
//! Handlers only see `ItemStore`; `MemoryStore` backs tests and throwaway
//! runs, `SqliteStore` backs a real file database.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{NewItem, TodoItem};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Items inserted into an empty store at startup.
pub const SEED_ITEMS: [&str; 2] = ["Walk Dog", "Buy Groceries"];

/// CRUD primitives over `TodoItem` records.
///
/// Ids are assigned by `add` and never reused, even after `remove`.
/// `list` returns items in ascending id order.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list(&self) -> Result<Vec<TodoItem>, StoreError>;

    async fn add(&self, item: NewItem) -> Result<TodoItem, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, StoreError>;

    /// Overwrite `name` and `is_complete` of the record with `item.id`.
    /// Returns `false` if no such record exists any more.
    async fn update(&self, item: &TodoItem) -> Result<bool, StoreError>;

    /// Returns `false` if the record was already gone.
    async fn remove(&self, item: &TodoItem) -> Result<bool, StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;
}

/// Insert the seed items when the store is empty. Returns `true` if it did.
pub async fn seed_if_empty(store: &dyn ItemStore) -> Result<bool, StoreError> {
    if store.count().await? > 0 {
        return Ok(false);
    }
    for name in SEED_ITEMS {
        let item = store.add(NewItem::named(name)).await?;
        tracing::info!(id = item.id, name = %item.name, "seeded todo item");
    }
    Ok(true)
}
