//! Async client gateway: one call, one HTTP round-trip, one result.
//!
//! `TodoGateway` pairs the stateless `TodoClient` with a `Transport`. It does
//! not retry and does not reinterpret errors; whatever `parse_*` or the
//! transport reports is handed straight back to the caller.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{ItemKey, NewItem, TodoItem};

/// The operations a UI needs from the todo service.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<TodoItem>, ApiError>;

    async fn get(&self, id: i64) -> Result<TodoItem, ApiError>;

    /// The server fills in `id` and `is_complete`.
    async fn create(&self, input: &NewItem) -> Result<TodoItem, ApiError>;

    /// Accepts a bare id or a full item. The server answers with no body.
    async fn remove(&self, target: &(dyn ItemKey + Sync)) -> Result<(), ApiError>;

    /// Sends the full item; success carries no payload.
    async fn update(&self, item: &TodoItem) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct TodoGateway<T = ReqwestTransport> {
    client: TodoClient,
    transport: T,
}

impl TodoGateway<ReqwestTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, ReqwestTransport::new())
    }
}

impl<T: Transport> TodoGateway<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }
}

#[async_trait]
impl<T: Transport> TodoApi for TodoGateway<T> {
    async fn fetch_all(&self) -> Result<Vec<TodoItem>, ApiError> {
        let response = self.transport.execute(self.client.build_list()).await?;
        let items = self.client.parse_list(response)?;
        tracing::debug!(count = items.len(), "fetched all todo items");
        Ok(items)
    }

    async fn get(&self, id: i64) -> Result<TodoItem, ApiError> {
        let response = self.transport.execute(self.client.build_get(id)).await?;
        self.client.parse_get(response)
    }

    async fn create(&self, input: &NewItem) -> Result<TodoItem, ApiError> {
        let request = self.client.build_create(input)?;
        let response = self.transport.execute(request).await?;
        let location = response.header("location").map(str::to_string);
        let item = self.client.parse_create(response)?;
        tracing::debug!(id = item.id, location = ?location, "added todo item");
        Ok(item)
    }

    async fn remove(&self, target: &(dyn ItemKey + Sync)) -> Result<(), ApiError> {
        let id = target.item_id();
        let response = self.transport.execute(self.client.build_delete(id)).await?;
        self.client.parse_delete(response)?;
        tracing::debug!(id, "deleted todo item");
        Ok(())
    }

    async fn update(&self, item: &TodoItem) -> Result<(), ApiError> {
        let request = self.client.build_update(item)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_update(response)?;
        tracing::debug!(id = item.id, is_complete = item.is_complete, "updated todo item");
        Ok(())
    }
}

#[async_trait]
impl<A: TodoApi + ?Sized> TodoApi for Arc<A> {
    async fn fetch_all(&self) -> Result<Vec<TodoItem>, ApiError> {
        (**self).fetch_all().await
    }

    async fn get(&self, id: i64) -> Result<TodoItem, ApiError> {
        (**self).get(id).await
    }

    async fn create(&self, input: &NewItem) -> Result<TodoItem, ApiError> {
        (**self).create(input).await
    }

    async fn remove(&self, target: &(dyn ItemKey + Sync)) -> Result<(), ApiError> {
        (**self).remove(target).await
    }

    async fn update(&self, item: &TodoItem) -> Result<(), ApiError> {
        (**self).update(item).await
    }
}
