//! Hand-off of a finished document to the user's save/share destination.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareOptions {
    pub mime_type: &'static str,
    pub uti: &'static str,
    pub dialog_title: &'static str,
}

pub const PDF_SHARE: ShareOptions = ShareOptions {
    mime_type: "application/pdf",
    uti: ".pdf",
    dialog_title: "Save or Share Resume",
};

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Failed to share {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn is_available(&self) -> bool;

    /// Shares `file`, returning where it ended up.
    async fn share(&self, file: &Path, options: &ShareOptions) -> Result<PathBuf, ShareError>;
}

/// Saves shared documents into a fixed directory. Without a directory the
/// facility reports itself unavailable.
#[derive(Debug, Clone, Default)]
pub struct DirectoryShare {
    dir: Option<PathBuf>,
}

impl DirectoryShare {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }
}

#[async_trait]
impl ShareTarget for DirectoryShare {
    async fn is_available(&self) -> bool {
        self.dir.is_some()
    }

    async fn share(&self, file: &Path, options: &ShareOptions) -> Result<PathBuf, ShareError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| ShareError::Io { path, source }
        };
        let dir = self.dir.as_deref().ok_or_else(|| ShareError::Io {
            path: file.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no share directory configured",
            ),
        })?;

        tokio::fs::create_dir_all(dir).await.map_err(io_err(dir))?;
        let name = file.file_name().unwrap_or(OsStr::new("resume.pdf"));
        let dest = dir.join(name);
        tokio::fs::copy(file, &dest).await.map_err(io_err(&dest))?;

        info!(
            "{}: {} ({}, {}) -> {}",
            options.dialog_title,
            file.display(),
            options.mime_type,
            options.uti,
            dest.display()
        );
        Ok(dest)
    }
}
