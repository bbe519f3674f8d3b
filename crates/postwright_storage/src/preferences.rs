//! Typed accessors over the raw key/value store.

use crate::store::KeyValueStore;
use postwright_error::PostwrightResult;
use std::sync::Arc;

/// Key for the manual-publish-mode flag.
pub const KEY_MANUAL_MODE: &str = "fb_manual_mode";
/// Key for the cached Facebook App ID.
pub const KEY_APP_ID: &str = "fb_app_id";
/// Key for the last selected page id. The page access token is never
/// stored; only this opaque identifier is.
pub const KEY_SELECTED_PAGE_ID: &str = "fb_selected_page_id";

/// Remembered publishing settings.
#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn KeyValueStore>,
}

impl Preferences {
    /// Wrap a key/value store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Whether the user opted into manual (compose-URL) publishing.
    /// Defaults to `false` when nothing has been stored.
    pub fn manual_mode(&self) -> PostwrightResult<bool> {
        Ok(self
            .store
            .get(KEY_MANUAL_MODE)?
            .is_some_and(|v| v == "true"))
    }

    /// Record the manual-mode choice.
    pub fn set_manual_mode(&self, enabled: bool) -> PostwrightResult<()> {
        self.store
            .set(KEY_MANUAL_MODE, if enabled { "true" } else { "false" })
    }

    /// The cached Facebook App ID, if one has been saved.
    pub fn app_id(&self) -> PostwrightResult<Option<String>> {
        self.store.get(KEY_APP_ID)
    }

    /// Cache a validated App ID for the next session.
    pub fn set_app_id(&self, app_id: &str) -> PostwrightResult<()> {
        self.store.set(KEY_APP_ID, app_id)
    }

    /// Forget the cached App ID.
    pub fn clear_app_id(&self) -> PostwrightResult<()> {
        self.store.remove(KEY_APP_ID)
    }

    /// The id of the page the user last published to.
    pub fn selected_page_id(&self) -> PostwrightResult<Option<String>> {
        self.store.get(KEY_SELECTED_PAGE_ID)
    }

    /// Remember a page selection for the next session.
    pub fn set_selected_page_id(&self, page_id: &str) -> PostwrightResult<()> {
        self.store.set(KEY_SELECTED_PAGE_ID, page_id)
    }

    /// Forget the remembered page selection.
    pub fn clear_selected_page_id(&self) -> PostwrightResult<()> {
        self.store.remove(KEY_SELECTED_PAGE_ID)
    }
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}
