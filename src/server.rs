use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crypto_toolbox::config::{self, ServerConfig};
use crypto_toolbox::{logging, service};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    logging::init("crypto_toolbox=info,server=info");

    let mut config = ServerConfig::from_env();
    if let Some(addr) = env::args().nth(1) {
        config.bind_addr = addr;
    }

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid address '{}'", config.bind_addr))?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        max_text_bytes = config.limits.max_text_bytes,
        max_sample_count = config.limits.max_sample_count,
        "Listening"
    );

    service::serve(listener, config.limits).await?;
    Ok(())
}
