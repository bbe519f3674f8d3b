//! Local preference storage for Postwright.
//!
//! Settings the app remembers between sessions (manual-publish mode,
//! the Facebook App ID, the selected page) live behind the
//! [`KeyValueStore`] trait. [`FileStore`] persists them as a single
//! JSON document under the user's config directory; [`MemoryStore`]
//! backs tests and one-off runs.
//!
//! Credentials never pass through this crate: access tokens stay in
//! memory for the lifetime of a session and only opaque identifiers
//! (an App ID, a page id) are written to disk.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;
mod preferences;
mod store;

pub use file::FileStore;
pub use postwright_error::{StorageError, StorageErrorKind};
pub use preferences::Preferences;
pub use store::{KeyValueStore, MemoryStore};
