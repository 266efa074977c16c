use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ItemStore;
use crate::error::StoreError;
use crate::model::{NewItem, TodoItem};

#[derive(Default)]
struct Inner {
    items: BTreeMap<i64, TodoItem>,
    last_id: i64,
}

/// In-process store. Cloning shares the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> Result<Vec<TodoItem>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.items.values().cloned().collect())
    }

    async fn add(&self, item: NewItem) -> Result<TodoItem, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let stored = TodoItem {
            id: inner.last_id,
            name: item.name,
            is_complete: item.is_complete,
        };
        inner.items.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, StoreError> {
        Ok(self.inner.read().await.items.get(&id).cloned())
    }

    async fn update(&self, item: &TodoItem) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(existing) = inner.items.get_mut(&item.id) else {
            return Ok(false);
        };
        existing.name = item.name.clone();
        existing.is_complete = item.is_complete;
        Ok(true)
    }

    async fn remove(&self, item: &TodoItem) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.items.remove(&item.id).is_some())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.inner.read().await.items.len())
    }
}
