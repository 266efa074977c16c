//! HTTP service for the to-do list.
//!
//! `app` builds the router over any `ItemStore`; `run` seeds the store if it
//! is empty and then serves on the given listener.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod observability;
pub mod store;

pub use api::SharedStore;
pub use config::ServerConfig;
pub use error::{AppError, ServerError, StoreError};
pub use model::{NewItem, TodoItem};
pub use store::{seed_if_empty, ItemStore, MemoryStore, SqliteStore};

/// Tags each request with a random UUID in `x-request-id`.
#[derive(Clone, Copy, Default)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

pub fn app(store: SharedStore) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    Router::new()
        .route(api::ITEMS_PATH, get(api::list_items).post(api::create_item))
        .route(
            "/api/todo/{id}",
            get(api::get_item).put(api::update_item).delete(api::delete_item),
        )
        .with_state(store)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(trace)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Open the store selected by `config`: a SQLite file when `DATABASE_PATH`
/// is set, otherwise an in-memory store.
pub fn open_store(config: &ServerConfig) -> Result<SharedStore, StoreError> {
    match &config.database_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "using sqlite store");
            Ok(Arc::new(SqliteStore::open(path)?))
        }
        None => {
            tracing::info!("using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), ServerError> {
    if seed_if_empty(store.as_ref()).await? {
        tracing::info!("store was empty, inserted seed items");
    }
    axum::serve(listener, app(store)).await?;
    Ok(())
}
