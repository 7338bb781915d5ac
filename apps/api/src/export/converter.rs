//! HTML → PDF conversion. The rasterizer itself is an external service;
//! this module only speaks its HTTP API.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

const CONVERT_HTML_PATH: &str = "/forms/chromium/convert/html";

#[derive(Debug, Error)]
pub enum ConverterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Converter error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Converter returned an empty document")]
    Empty,
}

/// Paper geometry handed to the converter, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub paper_width: f32,
    pub paper_height: f32,
    /// Page margins are set by the stylesheet; the converter adds none.
    pub margin: f32,
    pub single_page: bool,
}

/// US letter, one page.
pub const LETTER: PageSetup = PageSetup {
    paper_width: 8.5,
    paper_height: 11.0,
    margin: 0.0,
    single_page: true,
};

#[async_trait]
pub trait PdfConverter: Send + Sync {
    async fn convert(&self, html: &str, page: &PageSetup) -> Result<Bytes, ConverterError>;
}

/// Talks to a Gotenberg-compatible Chromium conversion endpoint.
#[derive(Clone)]
pub struct GotenbergConverter {
    client: Client,
    endpoint: String,
}

impl GotenbergConverter {
    pub fn new(base_url: &str) -> Result<Self, ConverterError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONVERT_HTML_PATH),
        })
    }

    #[cfg(test)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PdfConverter for GotenbergConverter {
    async fn convert(&self, html: &str, page: &PageSetup) -> Result<Bytes, ConverterError> {
        let index = Part::text(html.to_string())
            .file_name("index.html")
            .mime_str("text/html")?;
        let margin = page.margin.to_string();
        let form = Form::new()
            .part("files", index)
            .text("paperWidth", page.paper_width.to_string())
            .text("paperHeight", page.paper_height.to_string())
            .text("marginTop", margin.clone())
            .text("marginBottom", margin.clone())
            .text("marginLeft", margin.clone())
            .text("marginRight", margin)
            .text("singlePage", page.single_page.to_string())
            .text("printBackground", "true");

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("PDF converter returned {}: {}", status, message);
            return Err(ConverterError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let pdf = response.bytes().await?;
        if pdf.is_empty() {
            return Err(ConverterError::Empty);
        }
        debug!("PDF converter produced {} bytes", pdf.len());
        Ok(pdf)
    }
}
