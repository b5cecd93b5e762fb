//! Grouped menu sections.

use super::menu::MenuItem;
use serde::Serialize;

/// Title of the only section that renders collapsed.
pub const COLLAPSIBLE_SECTION_TITLE: &str = "APPS";

/// A titled group of menu entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Header label, or `None` for entries preceding any header.
    pub title: Option<String>,

    /// Non-header entries in payload order. Never empty.
    pub items: Vec<MenuItem>,

    pub collapsible: bool,
}

impl Section {
    /// Close a run of entries under the given header.
    pub fn new(title: Option<String>, items: Vec<MenuItem>) -> Self {
        let collapsible = title.as_deref() == Some(COLLAPSIBLE_SECTION_TITLE);
        Self {
            title,
            items,
            collapsible,
        }
    }
}

/// Output of grouping a flat menu list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuLayout {
    pub sections: Vec<Section>,

    /// Rate-app and sign-out entries, in payload order.
    pub actions: Vec<MenuItem>,
}

impl MenuLayout {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.actions.is_empty()
    }
}
