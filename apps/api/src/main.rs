mod config;
mod data;
mod editor;
mod errors;
mod export;
mod models;
mod portfolio;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::converter::GotenbergConverter;
use crate::export::share::DirectoryShare;
use crate::export::Exporter;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Bad profile data is a packaging defect: refuse to start.
    let defaults = data::load(config.data_path.as_deref()).context("loading profile data")?;
    info!(
        "Profile loaded: {} experience, {} education, {} projects",
        defaults.resume.experience.len(),
        defaults.resume.education.len(),
        defaults.portfolio.projects.len()
    );

    let converter = GotenbergConverter::new(&config.pdf_converter_url)?;
    info!("PDF converter: {}", config.pdf_converter_url);

    let share = DirectoryShare::new(config.share_dir.clone());
    if config.share_dir.is_none() {
        info!("SHARE_DIR not set; exports stay in {}", config.export_dir.display());
    }

    let exporter = Exporter::new(
        Arc::new(converter),
        Arc::new(share),
        config.export_dir.clone(),
    );

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let state = AppState::new(defaults, exporter);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
