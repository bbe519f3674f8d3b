//! Publish flow error types.

/// Publish-specific error conditions.
///
/// Connect and publish failures are non-fatal: the orchestrator returns
/// to a state that re-offers the failed action. Backend messages are
/// preserved verbatim so the caller can surface them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PublishErrorKind {
    /// No application identifier configured or cached
    #[display("Facebook App ID is missing; enter it to proceed")]
    MissingAppId,
    /// No valid session; connect before fetching identity or pages
    #[display("Not connected to Facebook")]
    NotConnected,
    /// No page selected for publishing
    #[display("No Facebook Page selected")]
    NoPageSelected,
    /// Login was cancelled or not fully authorized
    #[display("Facebook login failed: {}", _0)]
    LoginFailed(String),
    /// Identity fetch failed
    #[display("Failed to fetch Facebook user: {}", _0)]
    UserFetch(String),
    /// Page listing failed
    #[display("Failed to fetch Facebook pages: {}", _0)]
    PagesFetch(String),
    /// The Graph API rejected the publish call
    #[display("Failed to publish post: {}", _0)]
    PublishRejected(String),
    /// Transport-level failure talking to the Graph API
    #[display("Facebook request failed: {}", _0)]
    Http(String),
}

/// Publish error with source location tracking.
///
/// # Examples
///
/// ```
/// use postwright_error::{PublishError, PublishErrorKind};
///
/// let err = PublishError::new(PublishErrorKind::NoPageSelected);
/// assert!(format!("{}", err).contains("Page"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    /// The kind of error that occurred
    pub kind: PublishErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PublishError {
    /// Create a new PublishError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
