use crate::api;
use crate::config::Config;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
    max_upload_mb: Option<usize>,
    upload_dir: Option<PathBuf>,
) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(max_upload_mb) = max_upload_mb {
        config.max_upload_mb = max_upload_mb;
    }
    if upload_dir.is_some() {
        config.upload_dir = upload_dir;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(api::serve(config))
}
