//! Shared cell holding the latest navigation fetch.

use crate::error::AppError;
use crate::models::FetchResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The last fetch that gave up after exhausting its attempts.
#[derive(Debug, Clone, Serialize)]
pub struct FetchFailure {
    pub error: AppError,

    /// Attempts made before giving up.
    pub attempts: u32,

    pub failed_at: DateTime<Utc>,
}

/// Snapshot of the store contents.
#[derive(Debug, Clone, Default)]
pub struct MenuSnapshot {
    pub result: Option<Arc<FetchResult>>,

    pub fetched_at: Option<DateTime<Utc>>,

    /// Set when the most recent completed fetch failed.
    pub last_failure: Option<FetchFailure>,
}

#[derive(Debug, Default)]
struct MenuState {
    result: Option<Arc<FetchResult>>,
    fetched_at: Option<DateTime<Utc>>,
    last_failure: Option<FetchFailure>,
}

/// Cloneable handle to the shared menu state.
///
/// Writes replace the whole result; the last writer wins.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    state: Arc<RwLock<MenuState>>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly decoded result, replacing any previous one.
    pub async fn replace(&self, result: FetchResult) -> Arc<FetchResult> {
        let result = Arc::new(result);
        let mut state = self.state.write().await;
        state.result = Some(result.clone());
        state.fetched_at = Some(Utc::now());
        state.last_failure = None;
        result
    }

    /// Record a fetch that gave up. The previous result, if any, is kept.
    pub async fn record_failure(&self, error: AppError, attempts: u32) {
        let mut state = self.state.write().await;
        state.last_failure = Some(FetchFailure {
            error,
            attempts,
            failed_at: Utc::now(),
        });
    }

    /// Latest result, if any fetch has succeeded.
    pub async fn current(&self) -> Option<Arc<FetchResult>> {
        self.state.read().await.result.clone()
    }

    pub async fn snapshot(&self) -> MenuSnapshot {
        let state = self.state.read().await;
        MenuSnapshot {
            result: state.result.clone(),
            fetched_at: state.fetched_at,
            last_failure: state.last_failure.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(session_id: &str) -> FetchResult {
        FetchResult {
            menus: vec![],
            notification_count: 0,
            friend_request_count: 0,
            message_count: 0,
            logged_in_user_id: 0,
            session_id: session_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MenuStore::new();
        assert!(store.current().await.is_none());
        let snapshot = store.snapshot().await;
        assert!(snapshot.fetched_at.is_none());
        assert!(snapshot.last_failure.is_none());
    }

    #[tokio::test]
    async fn test_replace_is_wholesale() {
        let store = MenuStore::new();
        store.replace(result("first")).await;
        store.replace(result("second")).await;
        assert_eq!(store.current().await.unwrap().session_id, "second");
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_result() {
        let store = MenuStore::new();
        store.replace(result("kept")).await;
        store
            .record_failure(AppError::transport("offline"), 4)
            .await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.result.unwrap().session_id, "kept");
        assert_eq!(snapshot.last_failure.unwrap().attempts, 4);
    }

    #[tokio::test]
    async fn test_success_clears_failure() {
        let store = MenuStore::new();
        store.record_failure(AppError::decode("bad"), 1).await;
        store.replace(result("fresh")).await;
        assert!(store.snapshot().await.last_failure.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MenuStore::new();
        let reader = store.clone();
        store.replace(result("shared")).await;
        assert_eq!(reader.current().await.unwrap().session_id, "shared");
    }
}
