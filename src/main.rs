use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use upload_gateway::{api::create_router, ApplicationBuilder, Config};

#[derive(Parser)]
#[command(name = "upload-gateway", about = "Presigned upload gateway for S3-compatible storage")]
struct Cli {
    /// Overrides LISTEN_ADDR
    #[arg(long)]
    listen_addr: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with structured logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    }

    info!("Starting upload gateway");

    // Load configuration
    let mut config = Config::from_env().map_err(anyhow::Error::msg)?;
    if let Some(listen_addr) = cli.listen_addr {
        config.listen_addr = listen_addr;
    }
    config.validate().map_err(anyhow::Error::msg)?;
    info!(
        presign_expiry_secs = config.presign_expiry_secs,
        cors_permissive = config.cors_permissive,
        "Configuration loaded and validated"
    );

    let listen_addr = config.listen_addr.clone();
    let state = ApplicationBuilder::new(config)
        .with_s3_storage()
        .map_err(|e| anyhow::anyhow!("failed to initialize storage client: {}", e))?
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build application: {}", e))?;

    let app = create_router(state);

    // Start server
    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", listen_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
