use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 3001;

/// Application configuration loaded from environment variables.
/// Every variable is optional; a malformed `PORT` fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory served as the fallback route.
    pub public_dir: PathBuf,
    /// Where accepted photos are written; served under `/uploads`.
    pub uploads_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let public_dir = PathBuf::from(optional_env("PUBLIC_DIR").unwrap_or_else(|| "public".into()));
        let uploads_dir = optional_env("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| public_dir.join("uploads"));

        Ok(Config {
            port: match optional_env("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
                None => DEFAULT_PORT,
            },
            public_dir,
            uploads_dir,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
