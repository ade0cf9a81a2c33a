use anyhow::Context;
use clap::Parser;
use taskboard_server::{config::UserStoreConfig, telemetry, user_store};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = UserStoreConfig::parse();
    telemetry::init(config.server.log_format);

    let addr = config.server.bind_address(config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    user_store::run(listener).await?;
    Ok(())
}
