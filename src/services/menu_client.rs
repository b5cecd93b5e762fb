//! Navigation API client.
//!
//! Builds the navigation request URL, performs the HTTP round trip and decodes
//! the payload into a [`FetchResult`].

use crate::error::AppError;
use crate::models::{FetchResult, MenuItem, MenuKind};
use futures::future::BoxFuture;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;

/// Navigation endpoint of the demo community site.
pub const DEFAULT_ENDPOINT: &str = "https://demo.socialnetworking.solutions/sesapi/navigation";

/// Navigation client configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuClientConfig {
    /// Navigation endpoint without query string.
    pub endpoint: String,

    /// Value of the `restApi` query parameter.
    pub rest_api: String,

    /// Value of the `sesapi_platform` query parameter.
    pub platform: String,

    /// Static token sent as the `auth_token` query parameter.
    pub auth_token: String,

    /// Request timeout in seconds. Must be non-zero.
    pub timeout_secs: u64,
}

impl Default for MenuClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            rest_api: String::new(),
            platform: String::new(),
            auth_token: String::new(),
            timeout_secs: 30,
        }
    }
}

impl MenuClientConfig {
    /// Full request URL including query parameters.
    pub fn navigation_url(&self) -> Result<Url, AppError> {
        if self.endpoint.trim().is_empty() {
            return Err(AppError::config_field("Navigation endpoint is empty", "endpoint"));
        }

        Url::parse_with_params(
            self.endpoint.trim(),
            &[
                ("restApi", self.rest_api.as_str()),
                ("sesapi_platform", self.platform.as_str()),
                ("auth_token", self.auth_token.as_str()),
            ],
        )
        .map_err(|e| {
            AppError::config_field(format!("Invalid navigation endpoint: {}", e), "endpoint")
        })
    }
}

/// Root object of the navigation response.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationResponse {
    pub result: NavigationResult,
    pub session_id: String,
}

/// `result` object of the navigation response.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationResult {
    pub menus: Vec<NavigationMenu>,
    pub notification_count: i64,
    pub friend_req_count: i64,
    pub message_count: i64,
    pub loggedin_user_id: i64,
}

/// Menu entry as sent by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationMenu {
    /// 0 = section header, 1 = regular entry.
    #[serde(rename = "type")]
    pub menu_type: i64,
    pub module: Option<String>,
    pub label: String,
    pub icon: String,
    pub url: String,
    pub class: String,
}

impl From<NavigationMenu> for MenuItem {
    fn from(menu: NavigationMenu) -> Self {
        Self {
            kind: MenuKind::from(menu.menu_type),
            module: menu.module,
            label: menu.label,
            icon_url: menu.icon,
            target_url: menu.url,
            action_class: menu.class,
        }
    }
}

impl From<NavigationResponse> for FetchResult {
    fn from(response: NavigationResponse) -> Self {
        let result = response.result;
        Self {
            menus: result.menus.into_iter().map(MenuItem::from).collect(),
            notification_count: result.notification_count,
            friend_request_count: result.friend_req_count,
            message_count: result.message_count,
            logged_in_user_id: result.loggedin_user_id,
            session_id: response.session_id,
        }
    }
}

/// Decode a raw navigation payload.
pub fn decode_navigation(body: &[u8]) -> Result<FetchResult, AppError> {
    let response: NavigationResponse = serde_json::from_slice(body)?;
    Ok(response.into())
}

/// Capability to perform one GET and hand back the raw body.
///
/// Implementations report connectivity problems and non-success statuses as
/// [`AppError::Transport`]; decoding is left to the caller.
pub trait MenuTransport: Send + Sync {
    fn get<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<Vec<u8>, AppError>>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpMenuTransport {
    client: Client,
}

impl HttpMenuTransport {
    /// Create a new transport.
    pub fn new(config: &MenuClientConfig) -> Result<Self, AppError> {
        if config.timeout_secs == 0 {
            return Err(AppError::config_field(
                "Request timeout must be at least 1 second",
                "timeout_secs",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(AppError::transport_status(
                format!("Request failed ({})", status),
                status.as_u16(),
            ));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

impl MenuTransport for HttpMenuTransport {
    fn get<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<Vec<u8>, AppError>> {
        Box::pin(self.fetch_bytes(url))
    }
}

/// Endpoint part of a URL, safe to log (no query string, so no token).
pub fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    shown.set_query(None);
    shown.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "result": {
            "menus": [
                {"type": 0, "label": "APPS", "icon": "", "url": "", "class": ""},
                {"type": 1, "module": "album", "label": "Albums",
                 "icon": "https://cdn.example.com/albums.png",
                 "url": "https://demo.example.com/albums", "class": "core_main_album"},
                {"type": 1, "module": null, "label": "Sign Out", "icon": "",
                 "url": "logout", "class": "core_mini_auth"}
            ],
            "notification_count": 2,
            "friend_req_count": 1,
            "message_count": 5,
            "loggedin_user_id": 0
        },
        "session_id": "abc123"
    }"#;

    #[test]
    fn test_navigation_url_has_query_params() {
        let config = MenuClientConfig {
            rest_api: "Sesapi".to_string(),
            platform: "1".to_string(),
            auth_token: "tok en".to_string(),
            ..Default::default()
        };

        let url = config.navigation_url().unwrap();
        assert_eq!(url.path(), "/sesapi/navigation");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("restApi".to_string(), "Sesapi".to_string()),
                ("sesapi_platform".to_string(), "1".to_string()),
                ("auth_token".to_string(), "tok en".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_endpoint_is_config_error() {
        let config = MenuClientConfig {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.navigation_url(),
            Err(AppError::Config { .. })
        ));

        let empty = MenuClientConfig {
            endpoint: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(empty.navigation_url(), Err(AppError::Config { .. })));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = MenuClientConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        match HttpMenuTransport::new(&config) {
            Err(AppError::Config { field, .. }) => {
                assert_eq!(field.as_deref(), Some("timeout_secs"))
            }
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }

        let config = MenuClientConfig {
            timeout_secs: 1,
            ..Default::default()
        };
        assert!(HttpMenuTransport::new(&config).is_ok());
    }

    #[test]
    fn test_redacted_drops_token() {
        let config = MenuClientConfig {
            auth_token: "secret".to_string(),
            ..Default::default()
        };
        let url = config.navigation_url().unwrap();
        let shown = redacted(&url);
        assert_eq!(shown, DEFAULT_ENDPOINT);
        assert!(!shown.contains("secret"));
    }

    #[test]
    fn test_decode_sample_payload() {
        let result = decode_navigation(SAMPLE.as_bytes()).unwrap();

        assert_eq!(result.session_id, "abc123");
        assert_eq!(result.notification_count, 2);
        assert_eq!(result.friend_request_count, 1);
        assert_eq!(result.message_count, 5);
        assert_eq!(result.logged_in_user_id, 0);
        assert_eq!(result.menus.len(), 3);
        assert!(result.menus[0].is_header());
        assert_eq!(result.menus[1].module.as_deref(), Some("album"));
        assert_eq!(result.menus[1].icon_url, "https://cdn.example.com/albums.png");
        assert_eq!(result.menus[2].module, None);
        assert!(result.menus[2].action_kind().is_some());
    }

    #[test]
    fn test_decode_rejects_unexpected_shape() {
        let err = decode_navigation(br#"{"result": {"menus": []}, "session_id": "x"}"#)
            .unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));

        let err = decode_navigation(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));
    }
}
