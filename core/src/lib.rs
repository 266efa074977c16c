//! Client side of the todo service.
//!
//! # Overview
//! - `TodoClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO).
//! - `Transport` executes those requests; `ReqwestTransport` is the default.
//! - `TodoGateway` joins the two into the async `TodoApi` a UI calls.
//! - `TodoListView` keeps the UI's copy of the list in step with `TodoApi`.
//!
//! DTOs are defined independently from the server crate; integration tests
//! catch schema drift.

pub mod client;
pub mod error;
pub mod gateway;
pub mod http;
pub mod transport;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use error::ApiError;
pub use gateway::{TodoApi, TodoGateway};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{ItemKey, NewItem, TodoItem};
pub use view::{ListState, TodoListView};
