use anyhow::Result;
use clap::Parser;
use meeting_registry::{create_router, AppState, Config};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "meeting-registry")]
#[command(about = "In-memory meeting registry with a static demo page")]
struct Args {
    /// Path to the config file (extension inferred, may be absent)
    #[arg(long, default_value = "config/meeting-registry")]
    config: String,

    /// Override the configured listening port
    #[arg(long)]
    port: Option<u16>,

    /// Override the directory served for non-API requests
    #[arg(long)]
    static_root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut cfg = Config::load(&args.config)?;
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }
    if let Some(root) = args.static_root {
        cfg.static_files.root = root;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Serving static files from {}", cfg.static_files.root.display());

    let state = AppState::new(cfg.join_base(), cfg.static_files.root.clone());
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running at http://localhost:{}", cfg.service.http.port);
    info!(
        "Open http://localhost:{}/demo.html in your browser",
        cfg.service.http.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
