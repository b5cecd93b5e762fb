//! Shared helpers for integration tests.

#![allow(dead_code)]

use futures::future::BoxFuture;
use nav_menu_lib::error::AppError;
use nav_menu_lib::services::{
    LoadingSignal, MenuClientConfig, MenuFetcher, MenuStore, MenuTransport, RetryPolicy,
};
use reqwest::Url;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Realistic navigation payload: untitled leading entry, a 6-entry APPS
/// section, an empty header, HELP & MORE with both action entries mixed in.
pub const NAVIGATION_JSON: &str = include_str!("../fixtures/navigation.json");

/// Transport that replays a fixed script of responses.
///
/// Each response yields to the scheduler once before completing, so tasks
/// watching the loading flag observe it raised during the request.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<Vec<u8>, AppError>>>,
    calls: AtomicU32,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<Vec<u8>, AppError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicU32::new(0),
        })
    }

    /// Fail `failures` times with a transport error, then serve the fixture.
    pub fn failing_then_ok(failures: usize) -> Arc<Self> {
        let mut script: Vec<Result<Vec<u8>, AppError>> = (0..failures)
            .map(|_| Err(AppError::transport("Failed to connect to server")))
            .collect();
        script.push(Ok(NAVIGATION_JSON.as_bytes().to_vec()));
        Self::new(script)
    }

    pub fn always_failing() -> Arc<Self> {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MenuTransport for ScriptedTransport {
    fn get<'a>(&'a self, _url: &'a Url) -> BoxFuture<'a, Result<Vec<u8>, AppError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::transport("Request timed out")));
        Box::pin(async move {
            tokio::task::yield_now().await;
            next
        })
    }
}

/// Record every change of the loading flag, in order.
///
/// The recording task runs until the test's runtime shuts down.
pub fn record_loading(signal: &LoadingSignal) -> Arc<Mutex<Vec<bool>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut rx = signal.subscribe();
    let sink = seen.clone();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let value = *rx.borrow_and_update();
            sink.lock().unwrap().push(value);
        }
    });
    seen
}

/// Fetcher over the given transport with the default endpoint config.
pub fn fetcher_with(transport: Arc<ScriptedTransport>, policy: RetryPolicy) -> MenuFetcher {
    MenuFetcher::new(
        transport,
        &MenuClientConfig::default(),
        policy,
        LoadingSignal::new(),
        MenuStore::new(),
    )
}
