//! Export: render, convert to PDF, write the file, then share it.
//!
//! Only one export runs at a time: a request arriving while another is in
//! flight is refused, not queued. Export never touches edit state, so a
//! failed export can simply be retried.

pub mod converter;
pub mod handlers;
pub mod share;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::resume::ResumeData;
use crate::render::{document_title, render_resume};
use converter::{ConverterError, PdfConverter, LETTER};
use share::{ShareError, ShareTarget, PDF_SHARE};

pub const MANUAL_ACCESS_NOTICE: &str =
    "Your resume PDF has been created. Please use a file manager app to access it.";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("An export is already in progress")]
    InProgress,

    #[error("PDF conversion failed: {0}")]
    Conversion(#[from] ConverterError),

    #[error("Failed to write PDF: {0}")]
    Io(#[from] io::Error),

    #[error("Sharing failed: {0}")]
    Share(#[from] ShareError),
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub export_id: Uuid,
    pub file: PathBuf,
    pub mime_type: &'static str,
    /// Destination reported by the share facility, when it was available.
    pub shared_to: Option<PathBuf>,
    /// Non-fatal message for the user (share facility unavailable).
    pub notice: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct Exporter {
    converter: Arc<dyn PdfConverter>,
    share: Arc<dyn ShareTarget>,
    export_dir: PathBuf,
    exporting: AtomicBool,
}

/// Clears the in-flight flag on every exit path.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Exporter {
    pub fn new(
        converter: Arc<dyn PdfConverter>,
        share: Arc<dyn ShareTarget>,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            converter,
            share,
            export_dir,
            exporting: AtomicBool::new(false),
        }
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting.load(Ordering::Acquire)
    }

    pub async fn export(&self, resume: &ResumeData) -> Result<ExportReport, ExportError> {
        if self
            .exporting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Export requested while another export is running");
            return Err(ExportError::InProgress);
        }
        let _in_flight = InFlight(&self.exporting);

        let export_id = Uuid::new_v4();
        info!("Export {export_id}: rendering resume");
        let html = render_resume(resume);

        let pdf = self.converter.convert(&html, &LETTER).await.map_err(|e| {
            error!("Export {export_id}: conversion failed: {e}");
            e
        })?;

        let file = write_pdf(&self.export_dir, &document_title(resume), pdf).await?;
        info!("Export {export_id}: wrote {}", file.display());

        let (shared_to, notice) = if self.share.is_available().await {
            let dest = self.share.share(&file, &PDF_SHARE).await.map_err(|e| {
                error!("Export {export_id}: share failed: {e}");
                e
            })?;
            (Some(dest), None)
        } else {
            warn!(
                "Export {export_id}: share facility unavailable, PDF left at {}",
                file.display()
            );
            (None, Some(MANUAL_ACCESS_NOTICE.to_string()))
        };

        Ok(ExportReport {
            export_id,
            file,
            mime_type: PDF_SHARE.mime_type,
            shared_to,
            notice,
            created_at: Utc::now(),
        })
    }
}

/// Writes the document under a unique `<stem>-*.pdf` name and keeps it.
async fn write_pdf(dir: &Path, stem: &str, pdf: Bytes) -> io::Result<PathBuf> {
    let dir = dir.to_path_buf();
    let prefix = format!("{stem}-");
    let path = tokio::task::spawn_blocking(move || -> io::Result<PathBuf> {
        std::fs::create_dir_all(&dir)?;
        let mut file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".pdf")
            .tempfile_in(&dir)?;
        file.write_all(&pdf)?;
        file.flush()?;
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    })
    .await
    .map_err(io::Error::other)??;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use converter::PageSetup;
    use share::{DirectoryShare, ShareOptions};
    use tokio::sync::Notify;

    use crate::models::resume::{Education, Experience, PersonalInfo};

    struct StaticConverter;

    #[async_trait]
    impl PdfConverter for StaticConverter {
        async fn convert(&self, html: &str, page: &PageSetup) -> Result<Bytes, ConverterError> {
            assert!(html.contains("Technical Skills"));
            assert_eq!(*page, LETTER);
            Ok(Bytes::from_static(b"%PDF-1.7 fake"))
        }
    }

    struct FailingConverter;

    #[async_trait]
    impl PdfConverter for FailingConverter {
        async fn convert(&self, _html: &str, _page: &PageSetup) -> Result<Bytes, ConverterError> {
            Err(ConverterError::Empty)
        }
    }

    /// Blocks inside `convert` until released.
    struct GatedConverter {
        started: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl PdfConverter for GatedConverter {
        async fn convert(&self, _html: &str, _page: &PageSetup) -> Result<Bytes, ConverterError> {
            self.started.notify_one();
            self.release.notified().await;
            Ok(Bytes::from_static(b"%PDF-1.7 gated"))
        }
    }

    struct BrokenShare;

    #[async_trait]
    impl ShareTarget for BrokenShare {
        async fn is_available(&self) -> bool {
            true
        }

        async fn share(&self, file: &Path, _options: &ShareOptions) -> Result<PathBuf, ShareError> {
            Err(ShareError::Io {
                path: file.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    fn resume() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Alex Morgan".to_string(),
                ..Default::default()
            },
            experience: vec![Experience::default()],
            education: vec![Education::default()],
            projects: None,
            skills: vec!["Rust".to_string()],
        }
    }

    #[tokio::test]
    async fn test_export_without_share_returns_notice() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(
            Arc::new(StaticConverter),
            Arc::new(DirectoryShare::new(None)),
            dir.path().to_path_buf(),
        );
        let report = exporter.export(&resume()).await.unwrap();
        assert_eq!(report.notice.as_deref(), Some(MANUAL_ACCESS_NOTICE));
        assert_eq!(report.shared_to, None);
        assert_eq!(report.mime_type, "application/pdf");
        assert!(report.file.starts_with(dir.path()));
        let name = report.file.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("Resume_Alex_Morgan-") && name.ends_with(".pdf"));
        assert_eq!(std::fs::read(&report.file).unwrap(), b"%PDF-1.7 fake");
        assert!(!exporter.is_exporting());
    }

    #[tokio::test]
    async fn test_export_with_share_copies_file() {
        let dir = tempfile::tempdir().unwrap();
        let share_dir = dir.path().join("shared");
        let exporter = Exporter::new(
            Arc::new(StaticConverter),
            Arc::new(DirectoryShare::new(Some(share_dir.clone()))),
            dir.path().join("exports"),
        );
        let report = exporter.export(&resume()).await.unwrap();
        let shared = report.shared_to.unwrap();
        assert!(shared.starts_with(&share_dir));
        assert!(shared.exists());
        assert_eq!(report.notice, None);
    }

    #[tokio::test]
    async fn test_conversion_failure_is_error_and_releases_flag() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(
            Arc::new(FailingConverter),
            Arc::new(DirectoryShare::new(None)),
            dir.path().to_path_buf(),
        );
        let err = exporter.export(&resume()).await.unwrap_err();
        assert!(matches!(err, ExportError::Conversion(ConverterError::Empty)));
        assert!(!exporter.is_exporting());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_share_failure_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(
            Arc::new(StaticConverter),
            Arc::new(BrokenShare),
            dir.path().to_path_buf(),
        );
        let err = exporter.export(&resume()).await.unwrap_err();
        assert!(matches!(err, ExportError::Share(_)));
        assert!(!exporter.is_exporting());
    }

    #[tokio::test]
    async fn test_concurrent_export_refused() {
        let dir = tempfile::tempdir().unwrap();
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let exporter = Arc::new(Exporter::new(
            Arc::new(GatedConverter {
                started: Arc::clone(&started),
                release: Arc::clone(&release),
            }),
            Arc::new(DirectoryShare::new(None)),
            dir.path().to_path_buf(),
        ));

        let first = {
            let exporter = Arc::clone(&exporter);
            tokio::spawn(async move { exporter.export(&resume()).await })
        };
        started.notified().await;
        assert!(exporter.is_exporting());
        assert!(matches!(
            exporter.export(&resume()).await,
            Err(ExportError::InProgress)
        ));

        release.notify_one();
        let report = first.await.unwrap().unwrap();
        assert!(report.file.exists());
        assert!(!exporter.is_exporting());
    }

    #[tokio::test]
    async fn test_export_is_retryable() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(
            Arc::new(StaticConverter),
            Arc::new(DirectoryShare::new(None)),
            dir.path().to_path_buf(),
        );
        let a = exporter.export(&resume()).await.unwrap();
        let b = exporter.export(&resume()).await.unwrap();
        assert_ne!(a.file, b.file);
        assert_ne!(a.export_id, b.export_id);
    }
}
