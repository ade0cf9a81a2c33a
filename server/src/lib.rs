//! HTTP services for taskboard: the todo store, the user store and the
//! stats aggregator that reads both.

pub mod config;
pub mod error;
pub mod extract;
pub mod stats;
pub mod telemetry;
pub mod todo_store;
pub mod user_store;
pub mod web;
