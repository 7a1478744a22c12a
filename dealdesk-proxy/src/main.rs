//! Local dev proxy binary.
//!
//! # Environment Variables
//!
//! - `DEALDESK_PROXY_ADDR`: listen address (default: 127.0.0.1:3000)
//! - `DEALDESK_CAPIQ_TARGET`: CapIQ origin (default: <https://api.capitaliq.com>)
//! - `DEALDESK_ALPHASENSE_TARGET`: AlphaSense origin (default: <https://api.alphasense.com>)
//! - `RUST_LOG`: log filter (default: info)

use dealdesk_proxy::{ProxyConfig, router, serve};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ProxyConfig::from_env()?;
    tracing::info!(
        listen = %config.listen,
        capiq = %config.capiq_target,
        alphasense = %config.alphasense_target,
        "starting dealdesk proxy"
    );

    let listener = TcpListener::bind(config.listen).await?;
    let app = router(config)?;

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
        signal_token.cancel();
    });

    serve(listener, app, shutdown).await?;
    tracing::info!("dealdesk proxy stopped");
    Ok(())
}
