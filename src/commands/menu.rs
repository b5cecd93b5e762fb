//! Menu screen commands.
//!
//! These are the operations a menu screen calls: read the view model to
//! render, and trigger a fetch. The companion API exposes them over HTTP.

use crate::error::AppError;
use crate::models::{ActionKind, FetchResult, MenuItem, Section};
use crate::services::grouping;
use crate::services::menu_fetcher::MenuFetcher;
use crate::services::menu_store::FetchFailure;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Screen header title.
pub const SCREEN_TITLE: &str = "Menu";

/// Country-currency-language selector label.
pub const LOCALE_LABEL: &str = "IND-INR-EN";

/// Items a collapsed section shows before "See More".
pub const COLLAPSED_PREVIEW_LEN: usize = 4;

/// Options for rendering the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenOptions {
    /// Whether the user expanded the collapsible section.
    pub expanded: bool,
}

/// State of the most recent fetch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FetchStatus {
    /// Nothing fetched yet and nothing in flight.
    Idle,
    /// A fetch attempt is in flight.
    Loading,
    /// Showing data from a successful fetch.
    Loaded { fetched_at: DateTime<Utc> },
    /// The last fetch gave up.
    Failed {
        message: String,
        attempts: u32,
        failed_at: DateTime<Utc>,
    },
}

/// Header strip above the sections.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenHeader {
    pub title: String,
    pub locale_label: String,
}

/// Profile card and badge counts.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub user_id: i64,
    pub notification_count: i64,
    pub friend_request_count: i64,
    pub message_count: i64,
}

impl From<&FetchResult> for ProfileSummary {
    fn from(result: &FetchResult) -> Self {
        Self {
            user_id: result.logged_in_user_id,
            notification_count: result.notification_count,
            friend_request_count: result.friend_request_count,
            message_count: result.message_count,
        }
    }
}

/// One grid tile.
#[derive(Debug, Clone, Serialize)]
pub struct MenuTile {
    pub id: String,
    pub label: String,
    pub icon_url: String,
    pub target_url: String,
}

impl From<&MenuItem> for MenuTile {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id(),
            label: item.label.clone(),
            icon_url: item.icon_url.clone(),
            target_url: item.target_url.clone(),
        }
    }
}

/// A section as it should be displayed.
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    /// Header label as sent by the server.
    pub title: Option<String>,

    /// Header label for display.
    pub display_title: Option<String>,

    pub collapsible: bool,

    /// Tiles to render, possibly truncated.
    pub items: Vec<MenuTile>,

    /// Tiles hidden behind "See More".
    pub hidden_count: usize,

    pub show_see_more: bool,
}

impl SectionView {
    fn from_section(section: &Section, options: ScreenOptions) -> Self {
        let collapsed = section.collapsible && !options.expanded;
        let visible = if collapsed {
            &section.items[..section.items.len().min(COLLAPSED_PREVIEW_LEN)]
        } else {
            &section.items[..]
        };

        Self {
            title: section.title.clone(),
            display_title: section.title.as_deref().map(capitalize_words),
            collapsible: section.collapsible,
            items: visible.iter().map(MenuTile::from).collect(),
            hidden_count: section.items.len() - visible.len(),
            // The affordance shows while collapsed, even if nothing is hidden
            show_see_more: collapsed,
        }
    }
}

/// Visual treatment of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStyle {
    /// Filled card with icon and bold label.
    Prominent,
    /// Outlined, red, label only.
    Destructive,
}

/// A standalone action button.
#[derive(Debug, Clone, Serialize)]
pub struct ActionButton {
    pub id: String,
    pub action: ActionKind,
    pub label: String,
    /// Only prominent buttons show an icon.
    pub icon_url: Option<String>,
    pub target_url: String,
    pub style: ActionStyle,
}

impl ActionButton {
    fn from_item(item: &MenuItem) -> Option<Self> {
        let action = item.action_kind()?;
        let (style, icon_url) = match action {
            ActionKind::RateApp => (ActionStyle::Prominent, Some(item.icon_url.clone())),
            ActionKind::SignOut => (ActionStyle::Destructive, None),
        };

        Some(Self {
            id: item.id(),
            action,
            label: item.label.clone(),
            icon_url,
            target_url: item.target_url.clone(),
            style,
        })
    }
}

/// Everything a menu screen renders.
#[derive(Debug, Clone, Serialize)]
pub struct MenuScreen {
    pub header: ScreenHeader,
    pub is_loading: bool,
    pub status: FetchStatus,
    pub profile: Option<ProfileSummary>,
    pub session_id: Option<String>,
    pub sections: Vec<SectionView>,
    pub actions: Vec<ActionButton>,
}

/// Build the screen view model from the fetcher's current state.
///
/// Sections and actions are regrouped from the stored result on every call.
pub async fn get_menu_screen(fetcher: &MenuFetcher, options: ScreenOptions) -> MenuScreen {
    let snapshot = fetcher.store().snapshot().await;
    let is_loading = fetcher.loading().is_loading();

    let status = fetch_status(
        is_loading,
        snapshot.fetched_at,
        snapshot.last_failure.as_ref(),
    );

    let (profile, session_id, sections, actions) = match snapshot.result.as_deref() {
        Some(result) => {
            let layout = grouping::group(&result.menus);
            (
                Some(ProfileSummary::from(result)),
                Some(result.session_id.clone()),
                layout
                    .sections
                    .iter()
                    .map(|s| SectionView::from_section(s, options))
                    .collect(),
                layout
                    .actions
                    .iter()
                    .filter_map(ActionButton::from_item)
                    .collect(),
            )
        }
        None => (None, None, Vec::new(), Vec::new()),
    };

    MenuScreen {
        header: ScreenHeader {
            title: SCREEN_TITLE.to_string(),
            locale_label: LOCALE_LABEL.to_string(),
        },
        is_loading,
        status,
        profile,
        session_id,
        sections,
        actions,
    }
}

/// Run a fetch to completion and return the refreshed screen.
pub async fn refresh_menu(
    fetcher: &MenuFetcher,
    options: ScreenOptions,
) -> Result<MenuScreen, AppError> {
    fetcher.fetch().await?;
    Ok(get_menu_screen(fetcher, options).await)
}

/// Start a fetch in the background and return immediately.
pub fn trigger_refresh(fetcher: &MenuFetcher) {
    let fetcher = fetcher.clone();
    tokio::spawn(async move {
        // fetch() already logged the terminal failure
        if let Err(e) = fetcher.fetch().await {
            log::debug!("[menu] Background refresh failed: {}", e);
        }
    });
}

fn fetch_status(
    is_loading: bool,
    fetched_at: Option<DateTime<Utc>>,
    last_failure: Option<&FetchFailure>,
) -> FetchStatus {
    if is_loading {
        return FetchStatus::Loading;
    }
    if let Some(failure) = last_failure {
        return FetchStatus::Failed {
            message: failure.error.to_string(),
            attempts: failure.attempts,
            failed_at: failure.failed_at,
        };
    }
    match fetched_at {
        Some(fetched_at) => FetchStatus::Loaded { fetched_at },
        None => FetchStatus::Idle,
    }
}

/// Capitalize each whitespace-separated word: `"HELP & MORE"` → `"Help & More"`.
pub fn capitalize_words(title: &str) -> String {
    title
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
