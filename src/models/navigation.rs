//! Decoded navigation payload.

use super::menu::MenuItem;
use serde::Serialize;

/// Everything one successful navigation fetch yields.
///
/// Replaced wholesale on every successful fetch; never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult {
    /// Flat menu list, headers included, in server order.
    pub menus: Vec<MenuItem>,

    pub notification_count: i64,

    pub friend_request_count: i64,

    pub message_count: i64,

    /// Zero when the token belongs to no signed-in user.
    pub logged_in_user_id: i64,

    pub session_id: String,
}
