use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::Rng;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Largest accepted photo, in bytes (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Public URL prefix the uploads directory is mounted under.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// One stored photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    pub filename: String,
    pub path: PathBuf,
    pub url: String,
}

/// Disk directory that accepted photos are written into.
///
/// Files are never removed; replaced photos stay behind as orphans.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create uploads dir {}", self.dir.display()))?;
        info!("Uploads directory: {}", self.dir.display());
        Ok(())
    }

    /// Writes `bytes` under a freshly generated name. Returns once the file
    /// is fully on disk.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<UploadedAsset> {
        let filename = generate_filename(
            original_name,
            chrono::Utc::now().timestamp_millis(),
            random_suffix(),
        );
        let path = self.dir.join(&filename);

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .with_context(|| format!("Failed to create {}", path.display()))?;
        file.write_all(bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        file.flush().await?;

        info!(filename = %filename, size = bytes.len(), "Photo stored");

        Ok(UploadedAsset {
            url: format!("{UPLOADS_URL_PREFIX}/{filename}"),
            filename,
            path,
        })
    }
}

/// `{millis}-{suffix}-{sanitized original name}`.
pub fn generate_filename(original_name: &str, millis: i64, suffix: u32) -> String {
    format!("{millis}-{suffix}-{}", sanitize_filename(original_name))
}

/// Uniform 9-digit number.
fn random_suffix() -> u32 {
    let mut rng = rand::rng();
    rng.random_range(100_000_000..1_000_000_000)
}

/// Keeps the last path component and maps anything outside
/// `[A-Za-z0-9._-]` to `_`, so the name stays inside the uploads dir and
/// needs no URL escaping.
fn sanitize_filename(original_name: &str) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
