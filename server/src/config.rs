//! Command-line and environment configuration for the three binaries.

use std::time::Duration;

use clap::{Args, Parser};

use crate::telemetry::LogFormat;

/// Options every service accepts.
#[derive(Debug, Clone, Args)]
pub struct ServerArgs {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl ServerArgs {
    pub fn bind_address(&self, port: u16) -> String {
        format!("{}:{port}", self.host)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-store", about = "Todo record store")]
pub struct TodoStoreConfig {
    #[command(flatten)]
    pub server: ServerArgs,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "user-store", about = "User record store")]
pub struct UserStoreConfig {
    #[command(flatten)]
    pub server: ServerArgs,

    #[arg(long, env = "PORT", default_value_t = 8081)]
    pub port: u16,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "stats-service", about = "Aggregates todo and user counts")]
pub struct StatsConfig {
    #[command(flatten)]
    pub server: ServerArgs,

    #[arg(long, env = "PORT", default_value_t = 8082)]
    pub port: u16,

    /// Base URL of the todo store.
    #[arg(long, env = "TODO_SERVICE_URL", default_value = "http://localhost:8080")]
    pub todo_service_url: String,

    /// Base URL of the user store.
    #[arg(long, env = "USER_SERVICE_URL", default_value = "http://localhost:8081")]
    pub user_service_url: String,

    /// Per-request timeout for calls to either store.
    #[arg(long, env = "UPSTREAM_TIMEOUT_MS", default_value_t = 5000)]
    pub upstream_timeout_ms: u64,
}

impl StatsConfig {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }
}
