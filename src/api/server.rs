use super::upload;
use crate::config::Config;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::post;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Read-only state shared by every request.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub upload_dir: Option<PathBuf>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            upload_dir: config.upload_dir.clone(),
        }
    }

    /// Creates a uniquely named `.bam` scratch file for one upload.
    pub fn create_temp_file(&self) -> std::io::Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("upload-").suffix(".bam");
        match &self.upload_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
    }
}

pub fn router(config: &Config) -> Router {
    let state = Arc::new(AppState::from_config(config));

    Router::new()
        .route("/upload/fasta/", post(upload::upload_fasta))
        .route("/upload/bam/", post(upload::upload_bam))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes()))
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: Config) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    if let Some(dir) = &config.upload_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create upload directory {}", dir.display()))?;
    }

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
