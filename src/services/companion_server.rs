//! Companion HTTP server.
//!
//! Embeds an axum HTTP server exposing the menu screen API. The caller owns
//! the returned handle; dropping it does not stop the server, `stop()` does.

use crate::error::AppError;
use crate::services::companion_api::menu_api_routes;
use crate::services::menu_fetcher::MenuFetcher;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde::Deserialize;
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;

/// Companion server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    pub host: String,
    pub port: u16,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3210,
        }
    }
}

/// Shared state for the companion server's axum routes.
#[derive(Clone)]
pub struct CompanionState {
    pub fetcher: MenuFetcher,
}

/// Handle to control the running companion server.
pub struct CompanionServerHandle {
    cancel_token: CancellationToken,
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl CompanionServerHandle {
    /// Address the server actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop the server gracefully and wait for it to finish.
    pub async fn stop(self) {
        log::info!("[companion] Stopping server on {}", self.addr);
        self.cancel_token.cancel();
        if let Err(e) = self.task.await {
            log::error!("[companion] Server task failed: {}", e);
        }
    }
}

/// Build the full router: menu API plus a JSON 404 for everything else.
pub fn router(state: CompanionState) -> Router {
    Router::new()
        .merge(menu_api_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Start the companion HTTP server.
///
/// Port 0 binds an ephemeral port; see [`CompanionServerHandle::local_addr`].
pub async fn start_companion_server(
    config: &CompanionConfig,
    fetcher: MenuFetcher,
) -> Result<CompanionServerHandle, AppError> {
    let bind = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .map_err(|e| AppError::config_field(format!("Failed to bind to {}: {}", bind, e), "port"))?;
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::internal(format!("Failed to read bound address: {}", e)))?;

    let app = router(CompanionState { fetcher });

    let cancel_token = CancellationToken::new();
    let cancel_clone = cancel_token.clone();

    log::info!("[companion] Server starting on http://{}", addr);

    let task = tokio::spawn(async move {
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            cancel_clone.cancelled().await;
        });

        if let Err(e) = server.await {
            log::error!("[companion] Server error: {}", e);
        }

        log::info!("[companion] Server stopped");
    });

    Ok(CompanionServerHandle {
        cancel_token,
        addr,
        task,
    })
}

async fn not_found(uri: Uri) -> Response {
    log::debug!("[companion] No route for {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "code": "NOT_FOUND",
            "message": format!("No route for {}", uri.path()),
        })),
    )
        .into_response()
}
