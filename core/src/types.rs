//! Wire DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently so
//! the client does not link against axum. Integration tests against the live
//! server catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

/// Request payload for creating a todo. The server assigns `id` and
/// `isComplete`, so only the name is sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Anything that identifies a todo item: a bare id or the item itself.
pub trait ItemKey {
    fn item_id(&self) -> i64;
}

impl ItemKey for i64 {
    fn item_id(&self) -> i64 {
        *self
    }
}

impl ItemKey for TodoItem {
    fn item_id(&self) -> i64 {
        self.id
    }
}

impl<K: ItemKey + ?Sized> ItemKey for &K {
    fn item_id(&self) -> i64 {
        (**self).item_id()
    }
}
