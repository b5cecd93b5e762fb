//! Navigation fetch with bounded, fixed-delay retries.
//!
//! Each attempt raises the loading flag and clears it again as soon as the
//! attempt finishes, successful or not, so observers see the indicator
//! flicker between retries. Transport and decode failures are retried the
//! same way; configuration failures are not retried at all.
//!
//! Concurrent calls are not de-duplicated: each runs its own loop and the
//! last successful one wins the store.

use crate::error::AppError;
use crate::models::{FetchResult, MenuLayout};
use crate::services::grouping;
use crate::services::loading::LoadingSignal;
use crate::services::menu_client::{decode_navigation, redacted, MenuClientConfig, MenuTransport};
use crate::services::menu_store::MenuStore;
use crate::services::retry::RetryPolicy;
use reqwest::Url;
use std::sync::Arc;

/// Fetches the navigation menu into a shared [`MenuStore`].
#[derive(Clone)]
pub struct MenuFetcher {
    transport: Arc<dyn MenuTransport>,
    url: Result<Url, AppError>,
    policy: RetryPolicy,
    loading: LoadingSignal,
    store: MenuStore,
}

impl MenuFetcher {
    /// Create a fetcher for the configured endpoint.
    ///
    /// A malformed endpoint does not fail here; it surfaces as
    /// [`AppError::Config`] from [`MenuFetcher::fetch`].
    pub fn new(
        transport: Arc<dyn MenuTransport>,
        config: &MenuClientConfig,
        policy: RetryPolicy,
        loading: LoadingSignal,
        store: MenuStore,
    ) -> Self {
        Self {
            transport,
            url: config.navigation_url(),
            policy,
            loading,
            store,
        }
    }

    pub fn loading(&self) -> &LoadingSignal {
        &self.loading
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Fetch the menu, retrying per the policy.
    ///
    /// On success the result replaces the stored one and is returned. After
    /// the last failed attempt the failure is recorded in the store, the
    /// previous result is left untouched and the final error is returned.
    pub async fn fetch(&self) -> Result<Arc<FetchResult>, AppError> {
        let mut attempt: u32 = 0;

        loop {
            attempt = attempt.saturating_add(1);
            self.loading.start();
            log::info!(
                "[menu] Fetching navigation menu (attempt {} of {})",
                attempt,
                self.policy.max_attempts()
            );

            let error = match self.attempt().await {
                Ok(result) => {
                    let result = self.store.replace(result).await;
                    self.loading.stop();
                    log::debug!("[menu] Navigation data: {:?}", result);
                    log::info!(
                        "[menu] Navigation menu fetched: {} entries, session {}",
                        result.menus.len(),
                        result.session_id
                    );
                    return Ok(result);
                }
                Err(e) => e,
            };

            self.loading.stop();
            log::warn!("[menu] Failed to fetch navigation menu: {}", error);

            if !error.is_retryable() || !self.policy.should_retry(attempt) {
                log::error!(
                    "[menu] Giving up on navigation menu after {} attempt(s): {}",
                    attempt,
                    error
                );
                self.store.record_failure(error.clone(), attempt).await;
                return Err(error);
            }

            let delay = self.policy.delay_after(attempt);
            log::info!(
                "[menu] Retrying in {:?} (retry {} of {})",
                delay,
                attempt,
                self.policy.max_retries
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// One request/decode round trip.
    async fn attempt(&self) -> Result<FetchResult, AppError> {
        let url = self.url.as_ref().map_err(Clone::clone)?;
        log::debug!("[menu] GET {}", redacted(url));
        let body = self.transport.get(url).await?;
        decode_navigation(&body)
    }

    /// Sections and action entries derived from the current result.
    ///
    /// Recomputed on every call; empty until a fetch succeeds.
    pub async fn layout(&self) -> MenuLayout {
        match self.store.current().await {
            Some(result) => grouping::group(&result.menus),
            None => MenuLayout::default(),
        }
    }
}
