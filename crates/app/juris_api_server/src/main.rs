//! Juris API server binary.
//!
//! Serves the chat page, its wasm bundle and the JSON API on one port.

use clap::Parser;
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "juris_api_server", about = "Juris legal-research chat server")]
struct Args {
    /// Address to listen on. Overrides `BIND_ADDR`.
    #[arg(long, env = "BIND_ADDR")]
    bind: Option<String>,

    /// Port to listen on on 127.0.0.1 (0 = ephemeral). Overrides `--bind`.
    #[arg(long)]
    port: Option<u16>,

    /// Directory holding the `wasm-pack --target web` output.
    #[arg(long, env = "WASM_PKG_DIR")]
    wasm_pkg_dir: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,juris_api=debug,juris_core=debug")
            }),
        )
        .init();

    let args = Args::parse();

    let mut config = juris_api::config::ApiConfig::from_env();
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(port) = args.port {
        config.bind_addr = format!("127.0.0.1:{port}");
    }
    if let Some(dir) = args.wasm_pkg_dir {
        config.wasm_pkg_dir = dir;
    }

    info!(
        model = %config.llm.model,
        base_url = %config.llm.base_url,
        years = ?(config.generator.year_from()..config.generator.year_until()),
        "starting juris_api_server"
    );
    if config.llm.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; chat requests will fail until it is");
    }
    if !config.wasm_pkg_dir.is_dir() {
        warn!(
            dir = %config.wasm_pkg_dir.display(),
            "wasm bundle not found; run `wasm-pack build crates/wasm/juris_wasm --target web`"
        );
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    let state = juris_api::AppState::from_config(config);
    let app = juris_api::router(state);

    info!(addr = %local_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
