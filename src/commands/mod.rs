//! Menu screen command handlers.
//!
//! This module contains the operations a menu screen invokes:
//! - `menu`: screen view model, refresh triggers

pub mod menu;

pub use menu::{get_menu_screen, refresh_menu, trigger_refresh, MenuScreen, ScreenOptions};
