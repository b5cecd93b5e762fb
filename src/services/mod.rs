//! Business logic services.
//!
//! This module contains the core logic for fetching the navigation menu,
//! grouping it into sections and serving it to a frontend.
//!
//! Services are designed to be testable and independent of the HTTP surface.

pub mod companion_api;
pub mod companion_server;
pub mod grouping;
pub mod loading;
pub mod menu_client;
pub mod menu_fetcher;
pub mod menu_store;
pub mod retry;

pub use grouping::group;
pub use loading::LoadingSignal;
pub use menu_client::{HttpMenuTransport, MenuClientConfig, MenuTransport};
pub use menu_fetcher::MenuFetcher;
pub use menu_store::MenuStore;
pub use retry::RetryPolicy;
