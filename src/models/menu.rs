//! Menu item model.

use serde::{Deserialize, Serialize};

/// Class of the "rate this app" prompt entry.
pub const RATE_APP_CLASS: &str = "core_main_sesapi_rate";

/// Class of the sign-out entry.
pub const SIGN_OUT_CLASS: &str = "core_mini_auth";

/// Kind of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuKind {
    /// Starts a new titled group; never displayed as an item itself.
    SectionHeader,
    /// Regular navigable entry.
    Entry,
}

impl From<i64> for MenuKind {
    fn from(raw: i64) -> Self {
        match raw {
            0 => Self::SectionHeader,
            _ => Self::Entry, // Anything other than a header is displayed
        }
    }
}

/// Standalone controls surfaced outside the section grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    RateApp,
    SignOut,
}

impl ActionKind {
    /// Match an entry class against the action sentinels.
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            RATE_APP_CLASS => Some(Self::RateApp),
            SIGN_OUT_CLASS => Some(Self::SignOut),
            _ => None,
        }
    }

    /// The entry class this action is encoded as.
    pub fn class(&self) -> &'static str {
        match self {
            Self::RateApp => RATE_APP_CLASS,
            Self::SignOut => SIGN_OUT_CLASS,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RateApp => write!(f, "rate_app"),
            Self::SignOut => write!(f, "sign_out"),
        }
    }
}

/// A single entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Header or regular entry.
    pub kind: MenuKind,

    /// Owning module on the server side, when reported.
    pub module: Option<String>,

    /// Display label.
    pub label: String,

    /// Icon image URL.
    pub icon_url: String,

    /// Navigation target URL.
    pub target_url: String,

    /// Server-side class; also identifies action entries.
    pub action_class: String,
}

impl MenuItem {
    /// Identity used for list rendering.
    ///
    /// Unique only as far as `(label, icon, class)` is unique in the payload.
    pub fn id(&self) -> String {
        format!("{}-{}-{}", self.label, self.icon_url, self.action_class)
    }

    pub fn is_header(&self) -> bool {
        self.kind == MenuKind::SectionHeader
    }

    /// The action this entry stands for, if any. Independent of `kind`.
    pub fn action_kind(&self) -> Option<ActionKind> {
        ActionKind::from_class(&self.action_class)
    }
}
