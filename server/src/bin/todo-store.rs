use anyhow::Context;
use clap::Parser;
use taskboard_server::{config::TodoStoreConfig, telemetry, todo_store};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = TodoStoreConfig::parse();
    telemetry::init(config.server.log_format);

    let addr = config.server.bind_address(config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    todo_store::run(listener).await?;
    Ok(())
}
