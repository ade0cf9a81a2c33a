//! Stats aggregator: reads both stores and summarizes them.
//!
//! Each store read falls back to an empty source on failure, so one store
//! being down degrades the numbers instead of failing the request. Only a
//! failure of the aggregation itself answers 503.

pub mod upstream;

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use taskboard_core::{summarize, StatsResponse};
use tokio::net::TcpListener;

pub use upstream::{HttpUpstream, Upstream, UpstreamError};

use crate::{error::ServiceError, web};

pub const HEALTH_MESSAGE: &str = "Stats Service is running";

pub type SharedUpstream = Arc<dyn Upstream>;

pub fn router(upstream: SharedUpstream) -> Router {
    let routes = Router::new()
        .route("/api/stats", get(stats))
        .route("/api/health", get(health))
        .with_state(upstream);
    web::with_common_layers(routes)
}

pub async fn run(listener: TcpListener, upstream: SharedUpstream) -> Result<(), std::io::Error> {
    web::serve(listener, router(upstream)).await
}

/// Fetch both stores concurrently and summarize whatever came back.
pub async fn compute(upstream: SharedUpstream) -> Result<StatsResponse, ServiceError> {
    let todos = tokio::spawn({
        let upstream = Arc::clone(&upstream);
        async move {
            match upstream.fetch_todos().await {
                Ok(todos) => todos,
                Err(error) => {
                    tracing::warn!(error = %error, "todo store unavailable, counting no todos");
                    Vec::new()
                }
            }
        }
    });

    let users = tokio::spawn(async move {
        match upstream.count_users().await {
            Ok(count) => count,
            Err(error) => {
                tracing::warn!(error = %error, "user store unavailable, counting no users");
                0
            }
        }
    });

    let (todos, users) = tokio::join!(todos, users);
    let todos = todos.map_err(|e| ServiceError::Unavailable(format!("todo fetch task: {e}")))?;
    let users = users.map_err(|e| ServiceError::Unavailable(format!("user fetch task: {e}")))?;

    Ok(summarize(&todos, users))
}

async fn stats(State(upstream): State<SharedUpstream>) -> Result<Json<StatsResponse>, ServiceError> {
    let stats = compute(upstream).await?;
    tracing::debug!(
        total_todos = stats.total_todos,
        total_users = stats.total_users,
        "stats computed"
    );
    Ok(Json(stats))
}

async fn health() -> &'static str {
    HEALTH_MESSAGE
}
