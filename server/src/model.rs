use serde::{Deserialize, Serialize};

/// A persisted to-do entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

/// Payload for creating an item. The store assigns the id; a client-sent
/// `id` field is ignored.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl NewItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_complete: false,
        }
    }
}
