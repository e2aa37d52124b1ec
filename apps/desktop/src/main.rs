#![windows_subsystem = "windows"]

mod app;
mod components;
mod config;
mod launcher;

use crate::app::AppState;
use crate::config::AppConfig;
use crate::launcher::DesktopApp;
use vencfg_logger::Logger;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(None)?;

    let mut builder = Logger::builder(env!("CARGO_PKG_NAME"))
        .console(config.logging.console)
        .level(config.logging.level()?);
    if let Some(path) = &config.logging.path {
        builder = builder.path(path);
        if config.logging.json {
            builder = builder.json();
        }
    }
    let _logger = builder.init()?;

    let state = AppState::load(config.catalog_dir.as_deref())?;
    tracing::info!(plugins = state.catalog.plugins().len(), "catalog ready");

    DesktopApp::new()
        .with_title(&config.window.title)
        .with_size(config.window.width, config.window.height)
        .launch(app::App, state);

    Ok(())
}
