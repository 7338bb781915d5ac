use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub rust_log: String,
    /// Alternative profile document; the embedded one is used when unset.
    pub data_path: Option<PathBuf>,
    pub pdf_converter_url: String,
    pub export_dir: PathBuf,
    /// Share destination. Unset means the share facility is unavailable.
    pub share_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            bind_addr: non_empty("BIND_ADDR")
                .unwrap_or_else(|| "127.0.0.1".to_string())
                .parse::<IpAddr>()
                .context("BIND_ADDR must be a valid IP address")?,
            port: non_empty("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            data_path: non_empty("PORTFOLIO_DATA_PATH").map(PathBuf::from),
            pdf_converter_url: non_empty("PDF_CONVERTER_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            export_dir: non_empty("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join("folio-exports")),
            share_dir: non_empty("SHARE_DIR").map(PathBuf::from),
        })
    }
}
