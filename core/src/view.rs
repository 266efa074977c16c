//! Application-side list state driven by `TodoApi` calls.
//!
//! The list starts out `NotLoaded` and only becomes `Loaded` after a
//! successful fetch, so a renderer can tell "still loading" from "empty".

use crate::error::ApiError;
use crate::gateway::TodoApi;
use crate::types::{NewItem, TodoItem};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    NotLoaded,
    Loaded(Vec<TodoItem>),
}

/// Local mirror of the server's item list.
pub struct TodoListView<A> {
    api: A,
    state: ListState,
}

impl<A: TodoApi> TodoListView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ListState::NotLoaded,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// `None` until the first successful `load`.
    pub fn items(&self) -> Option<&[TodoItem]> {
        match &self.state {
            ListState::NotLoaded => None,
            ListState::Loaded(items) => Some(items),
        }
    }

    /// Replace the local list with the server's. On failure the previous
    /// state is kept.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        let items = self.api.fetch_all().await?;
        self.state = ListState::Loaded(items);
        Ok(())
    }

    /// Blank input is ignored without a request. The created item is
    /// appended locally instead of refetching the list.
    pub async fn add_item(&mut self, name: &str) -> Result<(), ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        let created = self.api.create(&NewItem::new(name)).await?;
        if let ListState::Loaded(items) = &mut self.state {
            items.push(created);
        }
        Ok(())
    }

    pub async fn delete_item(&mut self, item: &TodoItem) -> Result<(), ApiError> {
        self.api.remove(item).await?;
        if let ListState::Loaded(items) = &mut self.state {
            items.retain(|i| i.id != item.id);
        }
        Ok(())
    }

    /// Toggle completion of the local entry with `id`. The flag flips before
    /// the request goes out and is flipped back if the server rejects it.
    /// An id that is not in the loaded list is `NotFound` without a request.
    pub async fn update_item(&mut self, id: i64) -> Result<(), ApiError> {
        let Some(local) = self.find_local(id) else {
            return Err(ApiError::NotFound);
        };
        let previous = local.is_complete;
        local.is_complete = !previous;
        let toggled = local.clone();

        if let Err(e) = self.api.update(&toggled).await {
            tracing::warn!(id, error = %e, "update rejected, reverting local state");
            self.set_local_flag(id, previous);
            return Err(e);
        }
        Ok(())
    }

    fn find_local(&mut self, id: i64) -> Option<&mut TodoItem> {
        match &mut self.state {
            ListState::Loaded(items) => items.iter_mut().find(|i| i.id == id),
            ListState::NotLoaded => None,
        }
    }

    fn set_local_flag(&mut self, id: i64, is_complete: bool) {
        if let Some(local) = self.find_local(id) {
            local.is_complete = is_complete;
        }
    }
}
