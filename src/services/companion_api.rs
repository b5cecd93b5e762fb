//! REST API routes for the companion server.
//!
//! These routes expose the menu screen commands over HTTP so a web or mobile
//! frontend can render the menu with plain fetch() calls.

use crate::commands::menu::{self, MenuScreen, ScreenOptions};
use crate::error::AppError;
use crate::services::companion_server::CompanionState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

// ── Error handling ───────────────────────────────────────────────────────────

/// JSON error response.
#[derive(Serialize)]
struct ApiError {
    code: String,
    message: String,
}

/// Wrapper to make AppError usable as an axum error response.
struct ApiErr(AppError);

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            AppError::Transport { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE"),
            AppError::Decode { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_INVALID"),
            AppError::Config { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "MISCONFIGURED"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };
        (
            status,
            Json(ApiError {
                code: code.to_string(),
                message: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<AppError> for ApiErr {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

// ── Query parameter types ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScreenQuery {
    #[serde(default)]
    expanded: bool,
}

#[derive(Deserialize)]
struct RefreshQuery {
    #[serde(default)]
    expanded: bool,
    #[serde(default)]
    wait: bool,
}

#[derive(Serialize)]
struct LoadingResponse {
    is_loading: bool,
}

// ── Route builder ────────────────────────────────────────────────────────────

/// Build the menu API routes.
pub fn menu_api_routes() -> Router<CompanionState> {
    Router::new()
        .route("/api/menu", get(get_menu))
        .route("/api/menu/loading", get(get_loading))
        .route("/api/menu/refresh", post(refresh))
}

// ── Handlers ─────────────────────────────────────────────────────────────────

async fn get_menu(
    State(state): State<CompanionState>,
    Query(query): Query<ScreenQuery>,
) -> Json<MenuScreen> {
    let options = ScreenOptions {
        expanded: query.expanded,
    };
    Json(menu::get_menu_screen(&state.fetcher, options).await)
}

async fn get_loading(State(state): State<CompanionState>) -> Json<LoadingResponse> {
    Json(LoadingResponse {
        is_loading: state.fetcher.loading().is_loading(),
    })
}

/// Trigger a fetch. With `wait=true` the response is the refreshed screen or
/// the terminal error; otherwise the fetch runs in the background.
async fn refresh(
    State(state): State<CompanionState>,
    Query(query): Query<RefreshQuery>,
) -> Result<Response, ApiErr> {
    let options = ScreenOptions {
        expanded: query.expanded,
    };

    if query.wait {
        let screen = menu::refresh_menu(&state.fetcher, options).await?;
        return Ok(Json(screen).into_response());
    }

    menu::trigger_refresh(&state.fetcher);
    Ok(StatusCode::ACCEPTED.into_response())
}
