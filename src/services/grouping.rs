//! Grouping of the flat menu list into display sections.
//!
//! The server sends one flat list in which header entries (`type == 0`)
//! introduce the entries that follow them. Rate-app and sign-out entries are
//! pulled out first so they never land in a section, wherever they appear.

use crate::models::{MenuItem, MenuLayout, Section};

/// Group a flat menu list into sections plus standalone action entries.
///
/// - Order is preserved within and across sections.
/// - A header only yields a section if at least one entry follows it before
///   the next header or the end of the list.
/// - Entries before the first header form an untitled section.
pub fn group(items: &[MenuItem]) -> MenuLayout {
    let (actions, regular): (Vec<&MenuItem>, Vec<&MenuItem>) =
        items.iter().partition(|item| item.action_kind().is_some());

    let mut sections = Vec::new();
    let mut current_header: Option<&str> = None;
    let mut current_items: Vec<MenuItem> = Vec::new();

    for item in regular {
        if item.is_header() {
            if !current_items.is_empty() {
                sections.push(Section::new(
                    current_header.map(str::to_string),
                    std::mem::take(&mut current_items),
                ));
            }
            current_header = Some(item.label.as_str());
        } else {
            current_items.push(item.clone());
        }
    }

    if !current_items.is_empty() {
        sections.push(Section::new(
            current_header.map(str::to_string),
            current_items,
        ));
    }

    MenuLayout {
        sections,
        actions: actions.into_iter().cloned().collect(),
    }
}
