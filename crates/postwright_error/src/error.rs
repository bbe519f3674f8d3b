//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, PublishError, StorageError, ValidationError};

/// The foundation error enum for the Postwright workspace.
///
/// # Examples
///
/// ```
/// use postwright_error::{PostwrightError, ConfigError};
///
/// let config_err = ConfigError::new("missing key");
/// let err: PostwrightError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PostwrightErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Gemini backend error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Publish flow error
    #[from(PublishError)]
    Publish(PublishError),
    /// Preference storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Postwright error with kind discrimination.
///
/// # Examples
///
/// ```
/// use postwright_error::{PostwrightResult, ConfigError};
///
/// fn might_fail() -> PostwrightResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Postwright Error: {}", _0)]
pub struct PostwrightError(Box<PostwrightErrorKind>);

impl PostwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: PostwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostwrightErrorKind {
        &self.0
    }

    /// Check whether this error is backend quota/resource exhaustion.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.kind(), PostwrightErrorKind::Gemini(e) if e.is_rate_limited())
    }
}

// Generic From implementation for any type that converts to PostwrightErrorKind
impl<T> From<T> for PostwrightError
where
    T: Into<PostwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Postwright operations.
pub type PostwrightResult<T> = std::result::Result<T, PostwrightError>;
