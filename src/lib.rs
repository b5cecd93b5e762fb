//! Nav Menu - navigation menu service.
//!
//! Fetches a user's navigation menu from the community site API, groups the
//! flat list into display sections and serves the resulting screen model
//! through a small companion HTTP API.

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::services::companion_server::{start_companion_server, CompanionServerHandle};
use crate::services::{HttpMenuTransport, LoadingSignal, MenuFetcher, MenuStore};
use std::sync::Arc;

/// Wire the fetcher to a real HTTP transport.
pub fn build_fetcher(config: &AppConfig) -> Result<MenuFetcher, AppError> {
    let transport = HttpMenuTransport::new(&config.menu)?;
    Ok(MenuFetcher::new(
        Arc::new(transport),
        &config.menu,
        config.retry,
        LoadingSignal::new(),
        MenuStore::new(),
    ))
}

/// Start the companion server and run the initial menu fetch.
pub async fn run(config: AppConfig) -> Result<CompanionServerHandle, AppError> {
    if config.menu.auth_token.is_empty() {
        log::warn!("[menu] No auth token configured; the menu will be fetched anonymously");
    }

    let fetcher = build_fetcher(&config)?;
    let handle = start_companion_server(&config.companion, fetcher.clone()).await?;

    // The screen fetches once when it first appears
    commands::trigger_refresh(&fetcher);

    Ok(handle)
}
