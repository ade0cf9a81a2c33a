//! Client core for the taskboard stores.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the todo
//! and user stores without touching the network (host-does-IO pattern), and
//! holds the arithmetic the stats aggregator applies to what it fetched.
//!
//! # Design
//! - `TodoStoreClient` and `UserStoreClient` are stateless; they hold only a
//!   base URL.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - The wire DTOs live here and are shared by the servers, so the stores and
//!   their consumers cannot drift apart.

pub mod client;
pub mod error;
pub mod http;
pub mod stats;
pub mod types;

pub use client::{TodoStoreClient, UserStoreClient};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use stats::summarize;
pub use types::{
    NewTodo, NewUser, StatsResponse, Todo, TodoPatch, TodoStatus, User, UserPatch,
};
