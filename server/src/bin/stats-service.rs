use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use taskboard_server::{
    config::StatsConfig,
    stats::{self, HttpUpstream},
    telemetry,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StatsConfig::parse();
    telemetry::init(config.server.log_format);

    tracing::info!(
        todo_service_url = %config.todo_service_url,
        user_service_url = %config.user_service_url,
        upstream_timeout_ms = config.upstream_timeout_ms,
        "configuration loaded"
    );

    let upstream = HttpUpstream::new(
        &config.todo_service_url,
        &config.user_service_url,
        config.upstream_timeout(),
    )
    .context("failed to build upstream http client")?;

    let addr = config.server.bind_address(config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    stats::run(listener, Arc::new(upstream)).await?;
    Ok(())
}
