//! The Facebook session seam.

use crate::app_id::AppId;
use async_trait::async_trait;
use postwright_error::PostwrightResult;

/// The logged-in Facebook user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacebookUser {
    /// Graph user id
    pub id: String,
    /// Display name
    pub name: String,
    /// Profile picture URL, when the backend supplied one
    pub picture: Option<String>,
}

/// A page the user administers.
///
/// The access token is scoped to this page and never leaves process
/// memory; persistence stores only `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacebookPage {
    /// Page id
    pub id: String,
    /// Page display name
    pub name: String,
    /// Page-scoped access token
    pub access_token: String,
    /// Page category label, when the backend supplied one
    pub category: Option<String>,
}

/// Awaitable session over the Facebook platform.
///
/// Implementations are expected to be cheap to call out of order: the
/// orchestrator drives the sequence, the session only executes it.
#[async_trait]
pub trait FacebookSession: Send + Sync {
    /// Initialize the session for the given app. Idempotent; calling
    /// again after a successful init is a no-op.
    async fn init(&self, app_id: &AppId) -> PostwrightResult<()>;

    /// Silently check for a restorable login.
    ///
    /// Returns a user access token when a previous session can be
    /// resumed without user interaction, `None` otherwise. Never
    /// prompts and never errors on "not logged in".
    async fn check_login_status(&self) -> PostwrightResult<Option<String>>;

    /// Perform an interactive login and return the user access token.
    async fn login(&self) -> PostwrightResult<String>;

    /// Fetch the logged-in user's identity.
    async fn me(&self, user_token: &str) -> PostwrightResult<FacebookUser>;

    /// List the pages the user administers, with page-scoped tokens.
    async fn accounts(&self, user_token: &str) -> PostwrightResult<Vec<FacebookPage>>;

    /// Publish `message` (and optionally an image) to `page`, returning
    /// the created post id.
    async fn publish(
        &self,
        page: &FacebookPage,
        message: &str,
        image_url: Option<&str>,
    ) -> PostwrightResult<String>;
}
