use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,

    /// Directory for BAM scratch files; the system temp dir when unset.
    #[serde(default)]
    pub upload_dir: Option<PathBuf>,

    /// Origins allowed to call the API from a browser. Empty allows any.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_upload_mb() -> usize {
    64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_mb: default_max_upload_mb(),
            upload_dir: None,
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from the platform config directory, falling back
    /// to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("com", "plasmid-analyzer", "plasmid-analyzer") {
            let config_path = proj_dirs.config_dir().join("config.toml");

            if config_path.exists() {
                match Self::from_path(&config_path) {
                    Ok(config) => {
                        log::debug!("Loaded configuration from {}", config_path.display());
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring configuration file: {:#}", e),
                }
            }
        }
        Config::default()
    }

    /// Loads an explicitly named file, which must exist and parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}
