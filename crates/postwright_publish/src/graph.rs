//! Graph API implementation of the session seam.

use crate::app_id::AppId;
use crate::session::{FacebookPage, FacebookSession, FacebookUser};
use async_trait::async_trait;
use postwright_error::{PostwrightResult, PublishError, PublishErrorKind};
use serde::Deserialize;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const GRAPH_BASE: &str = "https://graph.facebook.com/v19.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding a user access token for headless use.
pub const USER_TOKEN_ENV: &str = "FACEBOOK_USER_TOKEN";

/// [`FacebookSession`] over the Graph REST API.
///
/// Interactive login has no headless equivalent, so `login` resolves
/// the user token from the environment and `check_login_status`
/// verifies it silently against `/me`.
#[derive(Debug)]
pub struct GraphSession {
    http: reqwest::Client,
    app_id: Mutex<Option<AppId>>,
}

impl GraphSession {
    /// Create an uninitialized session.
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client with static configuration");
        Self {
            http,
            app_id: Mutex::new(None),
        }
    }

    fn env_token() -> Option<String> {
        std::env::var(USER_TOKEN_ENV)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Extract the backend's own error message from a Graph error body,
    /// falling back to the raw text.
    fn backend_message(body: &str) -> String {
        serde_json::from_str::<GraphErrorBody>(body)
            .ok()
            .map(|b| b.error.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| body.to_string())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, String> {
        let url = format!("{GRAPH_BASE}{path}");
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;
        if !status.is_success() {
            return Err(Self::backend_message(&body));
        }
        serde_json::from_str(&body).map_err(|e| e.to_string())
    }
}

impl Default for GraphSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FacebookSession for GraphSession {
    async fn init(&self, app_id: &AppId) -> PostwrightResult<()> {
        let mut slot = self.app_id.lock().expect("app id lock");
        if slot.is_none() {
            debug!(app_id = %app_id, "session initialized");
            *slot = Some(app_id.clone());
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn check_login_status(&self) -> PostwrightResult<Option<String>> {
        let Some(token) = Self::env_token() else {
            return Ok(None);
        };
        // A stale token is "not logged in", not an error.
        match self.me(&token).await {
            Ok(_) => Ok(Some(token)),
            Err(e) => {
                warn!(error = %e, "stored token did not restore a session");
                Ok(None)
            }
        }
    }

    async fn login(&self) -> PostwrightResult<String> {
        Self::env_token().ok_or_else(|| {
            PublishError::new(PublishErrorKind::LoginFailed(format!(
                "no user token available; set {USER_TOKEN_ENV}"
            )))
            .into()
        })
    }

    #[instrument(skip(self, user_token))]
    async fn me(&self, user_token: &str) -> PostwrightResult<FacebookUser> {
        let user: GraphUser = self
            .get_json(
                "/me",
                &[
                    ("fields", "id,name,picture{url}"),
                    ("access_token", user_token),
                ],
            )
            .await
            .map_err(|m| PublishError::new(PublishErrorKind::UserFetch(m)))?;
        Ok(FacebookUser {
            id: user.id,
            name: user.name,
            picture: user.picture.map(|p| p.data.url),
        })
    }

    #[instrument(skip(self, user_token))]
    async fn accounts(&self, user_token: &str) -> PostwrightResult<Vec<FacebookPage>> {
        let list: PageList = self
            .get_json(
                "/me/accounts",
                &[
                    ("fields", "id,name,access_token,category"),
                    ("access_token", user_token),
                ],
            )
            .await
            .map_err(|m| PublishError::new(PublishErrorKind::PagesFetch(m)))?;
        Ok(list
            .data
            .into_iter()
            .map(|p| FacebookPage {
                id: p.id,
                name: p.name,
                access_token: p.access_token,
                category: p.category,
            })
            .collect())
    }

    #[instrument(skip(self, page, message, image_url), fields(page_id = %page.id))]
    async fn publish(
        &self,
        page: &FacebookPage,
        message: &str,
        image_url: Option<&str>,
    ) -> PostwrightResult<String> {
        // Inline data: URIs cannot be fetched by the backend; only a
        // public image URL goes through the photos endpoint.
        let public_image = image_url.filter(|u| u.starts_with("http"));
        let (path, params) = match public_image {
            Some(url) => (
                format!("/{}/photos", page.id),
                vec![
                    ("url", url.to_string()),
                    ("caption", message.to_string()),
                    ("access_token", page.access_token.clone()),
                ],
            ),
            None => (
                format!("/{}/feed", page.id),
                vec![
                    ("message", message.to_string()),
                    ("access_token", page.access_token.clone()),
                ],
            ),
        };

        let url = format!("{GRAPH_BASE}{path}");
        let response = self
            .http
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Http(e.to_string())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Http(e.to_string())))?;

        if !status.is_success() {
            return Err(PublishError::new(PublishErrorKind::PublishRejected(
                Self::backend_message(&body),
            ))
            .into());
        }

        let created: PublishResponse = serde_json::from_str(&body)
            .map_err(|e| PublishError::new(PublishErrorKind::Http(e.to_string())))?;
        created
            .post_id
            .or(created.id)
            .ok_or_else(|| {
                PublishError::new(PublishErrorKind::PublishRejected(
                    "backend returned no post id".to_string(),
                ))
                .into()
            })
    }
}

#[derive(Debug, Deserialize)]
struct GraphUser {
    id: String,
    name: String,
    #[serde(default)]
    picture: Option<GraphPicture>,
}

#[derive(Debug, Deserialize)]
struct GraphPicture {
    data: GraphPictureData,
}

#[derive(Debug, Deserialize)]
struct GraphPictureData {
    url: String,
}

#[derive(Debug, Deserialize)]
struct GraphPage {
    id: String,
    name: String,
    access_token: String,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageList {
    #[serde(default)]
    data: Vec<GraphPage>,
}

#[derive(Debug, Deserialize)]
struct PublishResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    post_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    error: GraphError,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    #[serde(default)]
    message: String,
}
