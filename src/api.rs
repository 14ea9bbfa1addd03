// API client module: a small blocking HTTP client for the dashboard's card
// endpoints. Every call sends one request and returns the decoded
// `{success, ...}` body; deciding what a logical failure means for the
// board is left to the `dashboard` module.

use crate::board::CardId;
use crate::config::Config;
use crate::error::{DashboardError, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Operations the dashboard needs from the backend. `ApiClient` is the real
/// implementation; tests plug in a fake.
pub trait CardBackend {
    fn update_card(&self, id: &CardId, req: &UpdateCardRequest) -> Result<ApiResponse>;
    fn delete_card(&self, id: &CardId) -> Result<ApiResponse>;
    fn create_card(&self, req: &CreateCardRequest) -> Result<ApiResponse>;
}

/// Blocking client holding the base URL of the backend and the optional
/// session cookie for authenticated calls.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    session: Option<String>,
}

/// Body of `PUT /api/cards/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UpdateCardRequest {
    pub title: String,
    pub content: String,
}

/// Body of `POST /api/cards`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateCardRequest {
    pub title: String,
    pub content: String,
    pub card_type: String,
    pub position: i64,
}

impl CreateCardRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        CreateCardRequest {
            title: title.into(),
            content: content.into(),
            card_type: "default".into(),
            position: 0,
        }
    }
}

/// Every card endpoint answers `{success: bool}`; failures may add an
/// `error` string, creation adds the new `id`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl ApiClient {
    /// Fails when the configured API URL cannot carry a path
    /// (e.g. `mailto:`) or does not parse at all.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| DashboardError::InvalidUrl(format!("{}: {}", config.api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(DashboardError::InvalidUrl(config.api_url.clone()));
        }
        let client = Client::builder().build()?;
        Ok(ApiClient {
            client,
            base_url,
            session: config.session.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// `<base>/api/cards`, keeping any path prefix of the base URL.
    fn collection_url(&self) -> Url {
        self.url_with(&["api", "cards"])
    }

    /// `<base>/api/cards/<id>`. The id is a single percent-encoded segment,
    /// so `/` or `?` inside it cannot reach another resource.
    fn card_url(&self, id: &CardId) -> Url {
        self.url_with(&["api", "cards", id.as_str()])
    }

    fn url_with(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `from_config`: the base always has a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// JSON content type on every call, plus the session cookie when set.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(session) = &self.session {
            match HeaderValue::from_str(&format!("session={}", session)) {
                Ok(val) => {
                    headers.insert(COOKIE, val);
                }
                Err(_) => warn!("session value is not a valid header, sending request without it"),
            }
        }
        headers
    }

    fn send(&self, req: RequestBuilder, what: &str) -> Result<ApiResponse> {
        let res = req.headers(self.headers()).send()?;
        decode_response(res, what)
    }
}

impl CardBackend for ApiClient {
    fn update_card(&self, id: &CardId, req: &UpdateCardRequest) -> Result<ApiResponse> {
        let url = self.card_url(id);
        debug!(%url, "PUT card");
        self.send(self.client.put(url).json(req), "update card")
    }

    fn delete_card(&self, id: &CardId) -> Result<ApiResponse> {
        let url = self.card_url(id);
        debug!(%url, "DELETE card");
        self.send(self.client.delete(url), "delete card")
    }

    fn create_card(&self, req: &CreateCardRequest) -> Result<ApiResponse> {
        let url = self.collection_url();
        debug!(%url, "POST card");
        self.send(self.client.post(url).json(req), "create card")
    }
}

/// The backend reports logical failures as `{success: false}` on 4xx/5xx
/// statuses, so the body is decoded regardless of the status code. Only a
/// body that is not the expected JSON is an error.
fn decode_response(res: Response, what: &str) -> Result<ApiResponse> {
    let status = res.status();
    let text = res.text()?;
    match serde_json::from_str::<ApiResponse>(&text) {
        Ok(body) => {
            if let Some(detail) = &body.error {
                debug!(%status, detail = %detail, "{} rejected", what);
            }
            Ok(body)
        }
        Err(e) => {
            let snippet: String = text.chars().take(120).collect();
            Err(DashboardError::Decode(format!(
                "{} returned {} with non-JSON body ({}): {}",
                what, status, e, snippet
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str, session: Option<&str>) -> ApiClient {
        let cfg = Config {
            api_url: url.into(),
            session: session.map(String::from),
            board_path: "board.json".into(),
        };
        ApiClient::from_config(&cfg).unwrap()
    }

    #[test]
    fn card_url_interpolates_id() {
        let api = client("http://localhost:5000", None);
        assert_eq!(api.card_url(&CardId::from(7)).as_str(), "http://localhost:5000/api/cards/7");
    }

    #[test]
    fn card_url_escapes_path_characters_in_id() {
        let api = client("http://localhost:5000", None);
        let url = api.card_url(&CardId::from("1/../2?x=y"));
        assert_eq!(url.path(), "/api/cards/1%2F..%2F2%3Fx=y");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let api = client("https://example.org/dash/", None);
        assert_eq!(api.collection_url().as_str(), "https://example.org/dash/api/cards");
        assert_eq!(api.card_url(&CardId::from(3)).path(), "/dash/api/cards/3");
    }

    #[test]
    fn unusable_base_url_is_rejected() {
        let cfg = Config {
            api_url: "not a url".into(),
            session: None,
            board_path: "board.json".into(),
        };
        assert!(matches!(ApiClient::from_config(&cfg), Err(DashboardError::InvalidUrl(_))));
    }

    #[test]
    fn session_becomes_cookie_header() {
        let api = client("http://localhost:5000", Some("tok"));
        let headers = api.headers();
        assert_eq!(headers.get(COOKIE).unwrap(), "session=tok");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn invalid_session_is_dropped() {
        let api = client("http://localhost:5000", Some("bad\nvalue"));
        assert!(api.headers().get(COOKIE).is_none());
    }

    #[test]
    fn failure_body_keeps_error_detail() {
        let body: ApiResponse =
            serde_json::from_str(r#"{"success": false, "error": "Card not found"}"#).unwrap();
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Card not found"));
        assert_eq!(body.id, None);
    }
}
