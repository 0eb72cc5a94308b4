//! `leafscan serve`: local HTTP server for the browser UI.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Args;
use leafscan_ai::ModelCache;
use leafscan_web::{AppState, create_router};
use tracing::{info, warn};

use crate::ModelArgs;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long, env = "LEAFSCAN_BIND", default_value = "127.0.0.1:8501")]
    pub bind: SocketAddr,
    #[command(flatten)]
    pub model: ModelArgs,
    /// Largest accepted upload, in bytes.
    #[arg(long, env = "LEAFSCAN_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
    /// Load the model on the first request instead of at startup.
    #[arg(long)]
    pub no_preload: bool,
}

pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let models = ModelCache::onnx(args.model.path.clone());

    // A missing model is not fatal: pages still render and uploads report it.
    if !args.no_preload
        && let Err(e) = models.get().await
    {
        warn!(
            error = %e,
            model = %args.model.path.display(),
            "model preload failed; will retry on first request"
        );
    }

    let router = create_router(AppState::new(models, args.max_upload_bytes));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    info!(addr = %listener.local_addr()?, "leafscan v{} listening", env!("CARGO_PKG_VERSION"));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
