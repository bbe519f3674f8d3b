//! Facebook publishing and the manual compose fallback.
//!
//! Direct publishing exists for exactly one platform. The
//! [`PublishOrchestrator`] drives the connect → select page → publish
//! state machine over a [`FacebookSession`] seam; every other platform
//! (and Facebook itself, when the user opts into manual mode) goes
//! through the [`ComposeActions`] fallback: copy the text, download the
//! image, open the platform's composer URL.
//!
//! Page access tokens live only inside the session for its lifetime;
//! the preference store sees nothing but opaque ids.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app_id;
mod graph;
mod manual;
mod orchestrator;
mod session;

pub use app_id::AppId;
pub use graph::{GraphSession, USER_TOKEN_ENV};
pub use manual::{ComposeActions, compose_url, manual_publish};
pub use orchestrator::{APP_ID_ENV, PublishOrchestrator, PublishOutcome, PublishState};
pub use postwright_error::{PublishError, PublishErrorKind};
pub use session::{FacebookPage, FacebookSession, FacebookUser};
