use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ocr_gateway::api::{create_router, AppState};
use ocr_gateway::config::{self, Config};
use ocr_gateway::ocr::{build_engine, OcrProvider};

#[derive(Parser)]
#[command(name = "ocr-gateway")]
#[command(about = "HTTP gateway for recognizing text in images")]
struct Args {
    /// Interface to bind, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overrides PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let default_filter = if config::dev_mode_from_env() {
        "ocr_gateway=debug,tower_http=debug"
    } else {
        "ocr_gateway=info,tower_http=debug"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if config.server.dev_mode {
        tracing::debug!(?config, "Development mode enabled");
    }

    tracing::info!(
        "Initializing OCR engine: {} ({})... (models load on first run)",
        config.ocr.engine,
        config.ocr.languages
    );
    let engine = build_engine(&config.ocr)?;
    let ocr = OcrProvider::new(engine, &config.ocr);
    tracing::info!("OCR engine initialized");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, ocr);
    let app = create_router(state);

    tracing::info!("OCR gateway starting on http://{}", addr);
    tracing::info!("  OCR endpoint: http://{}/ocr", addr);
    tracing::info!("  Config:       http://{}/config", addr);
    tracing::info!("  OpenAPI spec: http://{}/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections...");
}
