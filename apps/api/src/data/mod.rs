//! Turns the raw profile document into the default aggregates.
//! Runs once at startup; any failure here is fatal to initialization.

pub mod mapper;
pub mod source;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::portfolio::PortfolioData;
use crate::models::resume::ResumeData;
use source::RawSource;

/// Profile document compiled into the binary, used when no path is configured.
pub const EMBEDDED_SOURCE: &str = include_str!("../../assets/basic_info.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read data source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data source: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid data source: {0}")]
    Invalid(String),
}

/// The two canonical aggregates derived from one source document.
#[derive(Debug, Clone)]
pub struct DefaultData {
    pub portfolio: PortfolioData,
    pub resume: ResumeData,
}

/// Loads from `path` if given, otherwise from the embedded document.
pub fn load(path: Option<&Path>) -> Result<DefaultData, LoadError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Loading profile data from {}", path.display());
            from_json_str(&text)
        }
        None => {
            info!("Loading embedded profile data");
            from_json_str(EMBEDDED_SOURCE)
        }
    }
}

pub fn from_json_str(text: &str) -> Result<DefaultData, LoadError> {
    let raw: RawSource = serde_json::from_str(text)?;
    validate(&raw)?;

    let data = DefaultData {
        portfolio: mapper::to_portfolio(&raw),
        resume: mapper::to_resume(&raw),
    };
    info!(
        "Profile data loaded: {} experience, {} education, {} projects, {} skills",
        data.resume.experience.len(),
        data.resume.education.len(),
        data.portfolio.projects.len(),
        data.resume.skills.len()
    );
    Ok(data)
}

/// The editor requires at least one experience and one education entry.
fn validate(raw: &RawSource) -> Result<(), LoadError> {
    if raw.experience.is_empty() {
        return Err(LoadError::Invalid(
            "experience must contain at least one entry".to_string(),
        ));
    }
    if raw.education.is_empty() {
        return Err(LoadError::Invalid(
            "education must contain at least one entry".to_string(),
        ));
    }
    Ok(())
}
