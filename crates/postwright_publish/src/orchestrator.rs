//! The connect → select page → publish state machine.

use crate::app_id::AppId;
use crate::manual::{ComposeActions, manual_publish};
use crate::session::{FacebookPage, FacebookSession, FacebookUser};
use postwright_core::{GeneratedPost, Platform};
use postwright_error::{PostwrightResult, PublishError, PublishErrorKind};
use postwright_storage::Preferences;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Environment variable that overrides the cached App ID.
pub const APP_ID_ENV: &str = "FACEBOOK_APP_ID";

/// Where the publish flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PublishState {
    /// No session; connect first
    Disconnected,
    /// Connect in flight
    Connecting,
    /// Session established, no page chosen yet
    Connected,
    /// A page is selected; publishing is available
    PageSelected,
    /// Publish in flight
    Publishing,
    /// Last publish succeeded
    Published,
    /// Last publish failed; the action is re-offered
    PublishFailed,
}

/// How a post left the building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Published through the platform API
    Direct {
        /// Id of the created post
        post_id: String,
    },
    /// Handed to the compose-URL fallback
    Manual,
}

/// Drives the Facebook publish flow over a [`FacebookSession`].
///
/// The orchestrator owns all flow state; the session only executes
/// individual calls. Page access tokens stay inside the page list here
/// and are never handed to the preference store.
pub struct PublishOrchestrator {
    session: Arc<dyn FacebookSession>,
    preferences: Preferences,
    state: PublishState,
    user: Option<FacebookUser>,
    pages: Vec<FacebookPage>,
    selected: Option<usize>,
    last_post_id: Option<String>,
    last_error: Option<String>,
}

impl PublishOrchestrator {
    /// Create a disconnected orchestrator.
    pub fn new(session: Arc<dyn FacebookSession>, preferences: Preferences) -> Self {
        Self {
            session,
            preferences,
            state: PublishState::Disconnected,
            user: None,
            pages: Vec::new(),
            selected: None,
            last_post_id: None,
            last_error: None,
        }
    }

    /// Current flow state.
    pub fn state(&self) -> PublishState {
        self.state
    }

    /// The connected user, once a session exists.
    pub fn user(&self) -> Option<&FacebookUser> {
        self.user.as_ref()
    }

    /// Pages available for publishing.
    pub fn pages(&self) -> &[FacebookPage] {
        &self.pages
    }

    /// The currently selected page.
    pub fn selected_page(&self) -> Option<&FacebookPage> {
        self.selected.and_then(|i| self.pages.get(i))
    }

    /// Id of the last successfully published post.
    pub fn last_post_id(&self) -> Option<&str> {
        self.last_post_id.as_deref()
    }

    /// Backend message from the last failed publish.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the user opted into the manual compose fallback.
    pub fn manual_mode(&self) -> PostwrightResult<bool> {
        self.preferences.manual_mode()
    }

    /// Persist the manual-mode choice.
    pub fn set_manual_mode(&self, enabled: bool) -> PostwrightResult<()> {
        self.preferences.set_manual_mode(enabled)
    }

    /// Validate and cache an App ID supplied by the user.
    ///
    /// Rejects malformed input before any network traffic; the cached
    /// value is only written on success.
    pub fn set_app_id(&self, input: &str) -> PostwrightResult<AppId> {
        let app_id: AppId = input.parse()?;
        self.preferences.set_app_id(app_id.as_str())?;
        Ok(app_id)
    }

    /// The credential the next connect will use, if any.
    ///
    /// The environment wins over the cached value; the cached value is
    /// left untouched either way. A malformed cached value is ignored
    /// with a warning rather than wedging the flow.
    pub fn resolve_app_id(&self) -> PostwrightResult<Option<AppId>> {
        let env_value = std::env::var(APP_ID_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        let cached = self.preferences.app_id()?;
        Ok(resolve_app_id(env_value.as_deref(), cached.as_deref()))
    }

    /// Establish a session: init, restore or perform login, fetch the
    /// user and their pages, and auto-select a page.
    ///
    /// The cached page id is preferred for auto-selection; otherwise
    /// the first page wins. With no pages the state stays `Connected`.
    #[instrument(skip(self))]
    pub async fn connect(&mut self) -> PostwrightResult<()> {
        let Some(app_id) = self.resolve_app_id()? else {
            return Err(PublishError::new(PublishErrorKind::MissingAppId).into());
        };

        self.state = PublishState::Connecting;
        match self.establish(&app_id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.state = PublishState::Disconnected;
                Err(e)
            }
        }
    }

    async fn establish(&mut self, app_id: &AppId) -> PostwrightResult<()> {
        self.session.init(app_id).await?;

        let token = match self.session.check_login_status().await? {
            Some(token) => {
                info!("restored existing session");
                token
            }
            None => self.session.login().await?,
        };

        self.user = Some(self.session.me(&token).await?);
        self.pages = self.session.accounts(&token).await?;

        let remembered = self.preferences.selected_page_id()?;
        self.selected = remembered
            .and_then(|id| self.pages.iter().position(|p| p.id == id))
            .or(if self.pages.is_empty() { None } else { Some(0) });

        self.state = if self.selected.is_some() {
            PublishState::PageSelected
        } else {
            warn!("user administers no pages");
            PublishState::Connected
        };
        Ok(())
    }

    /// Select a page by id and remember the choice.
    pub fn select_page(&mut self, page_id: &str) -> PostwrightResult<()> {
        let Some(index) = self.pages.iter().position(|p| p.id == page_id) else {
            return Err(PublishError::new(PublishErrorKind::NoPageSelected).into());
        };
        self.selected = Some(index);
        self.preferences.set_selected_page_id(page_id)?;
        self.state = PublishState::PageSelected;
        Ok(())
    }

    /// Whether a publish can be attempted right now.
    pub fn can_publish(&self) -> bool {
        self.selected.is_some()
            && matches!(
                self.state,
                PublishState::PageSelected | PublishState::Published | PublishState::PublishFailed
            )
    }

    /// Publish a post through the selected page.
    ///
    /// On failure the backend's message is preserved and the state
    /// re-offers the action; nothing is retried automatically.
    #[instrument(skip(self, post))]
    pub async fn publish(&mut self, post: &GeneratedPost) -> PostwrightResult<String> {
        if self.user.is_none() {
            return Err(PublishError::new(PublishErrorKind::NotConnected).into());
        }
        if !self.can_publish() {
            return Err(PublishError::new(PublishErrorKind::NoPageSelected).into());
        }
        let page = self
            .selected_page()
            .cloned()
            .ok_or_else(|| PublishError::new(PublishErrorKind::NoPageSelected))?;

        self.state = PublishState::Publishing;
        match self
            .session
            .publish(&page, &post.content, post.image_url.as_deref())
            .await
        {
            Ok(post_id) => {
                info!(post_id = %post_id, page_id = %page.id, "post published");
                self.last_post_id = Some(post_id.clone());
                self.last_error = None;
                self.state = PublishState::Published;
                Ok(post_id)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.state = PublishState::PublishFailed;
                Err(e)
            }
        }
    }

    /// Publish a post the way the current platform and preferences
    /// dictate: the one direct-publish platform goes through the state
    /// machine unless manual mode is set; everything else uses the
    /// compose fallback and touches no session.
    pub async fn publish_post(
        &mut self,
        post: &GeneratedPost,
        platform: Platform,
        actions: &dyn ComposeActions,
    ) -> PostwrightResult<PublishOutcome> {
        if platform.supports_direct_publish() && !self.manual_mode()? {
            let post_id = self.publish(post).await?;
            Ok(PublishOutcome::Direct { post_id })
        } else {
            manual_publish(actions, platform, post)?;
            Ok(PublishOutcome::Manual)
        }
    }

    /// Drop the session. Cached preferences survive for the next
    /// connect.
    pub fn disconnect(&mut self) {
        self.user = None;
        self.pages.clear();
        self.selected = None;
        self.state = PublishState::Disconnected;
    }
}

impl std::fmt::Debug for PublishOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishOrchestrator")
            .field("state", &self.state)
            .field("pages", &self.pages.len())
            .finish_non_exhaustive()
    }
}

/// Pick the credential: environment first, cached second.
fn resolve_app_id(env_value: Option<&str>, cached: Option<&str>) -> Option<AppId> {
    if let Some(env_value) = env_value {
        match env_value.parse::<AppId>() {
            Ok(id) => return Some(id),
            Err(e) => warn!(error = %e, "ignoring malformed {APP_ID_ENV}"),
        }
    }
    if let Some(cached) = cached {
        match cached.parse::<AppId>() {
            Ok(id) => return Some(id),
            Err(e) => warn!(error = %e, "ignoring malformed cached app id"),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_wins_over_cached() {
        let id = resolve_app_id(Some("111"), Some("222")).unwrap();
        assert_eq!(id.as_str(), "111");
    }

    #[test]
    fn cached_is_used_when_environment_is_absent() {
        let id = resolve_app_id(None, Some("222")).unwrap();
        assert_eq!(id.as_str(), "222");
    }

    #[test]
    fn malformed_environment_falls_back_to_cached() {
        let id = resolve_app_id(Some("not-an-id"), Some("222")).unwrap();
        assert_eq!(id.as_str(), "222");
    }

    #[test]
    fn nothing_configured_yields_none() {
        assert!(resolve_app_id(None, None).is_none());
        assert!(resolve_app_id(Some("junk"), Some("also junk")).is_none());
    }
}
