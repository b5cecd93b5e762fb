//! Data models for the application.
//!
//! These models represent the decoded navigation payload and the grouped
//! views derived from it. All of them serialize for the companion API.

pub mod menu;
pub mod navigation;
pub mod section;

// Re-exports for convenient access
pub use menu::{ActionKind, MenuItem, MenuKind, RATE_APP_CLASS, SIGN_OUT_CLASS};
pub use navigation::FetchResult;
pub use section::{MenuLayout, Section, COLLAPSIBLE_SECTION_TITLE};
