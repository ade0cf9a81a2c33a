//! Wire DTOs shared by the stores, the aggregator and their clients.
//!
//! # Design
//! Field names follow the camelCase JSON the services exchange. Payload
//! types (`NewTodo`, `NewUser`) never carry an id; ids are assigned by the
//! owning store. Patch types only apply the fields present in the JSON; a
//! nullable field sent as `null` is cleared.

use serde::{Deserialize, Deserializer, Serialize};

/// A todo record as stored and returned by the todo store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub content: String,
    pub due_date: Option<String>,
    pub done: bool,
}

/// Request payload for creating a todo. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub content: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub done: bool,
}

/// Request payload for updating a todo.
///
/// `due_date` is `None` when the field is absent and `Some(None)` when it
/// was sent as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

/// Wraps whatever the field holds, `null` included, so that only an absent
/// field falls back to the `None` default.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The part of a todo record the stats aggregator counts.
///
/// Every other field is ignored, so rows the full `Todo` would reject (a
/// `null` content, a missing id) are still counted. A missing or `null`
/// `done` counts as not done.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct TodoStatus {
    #[serde(default)]
    pub done: Option<bool>,
}

impl TodoStatus {
    pub fn is_done(&self) -> bool {
        self.done.unwrap_or(false)
    }
}

/// A user record as stored and returned by the user store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub active: bool,
}

/// Request payload for creating a user. `username` and `email` are required
/// and must be unique within the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

/// Request payload for updating a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Summary returned by the stats aggregator. Never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_todos: u64,
    pub completed_todos: u64,
    pub pending_todos: u64,
    pub completion_rate: f64,
    pub total_users: u64,
}
