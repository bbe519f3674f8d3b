//! Gemini-specific error types.

/// Gemini-specific error conditions.
///
/// A missing API key is a [`crate::ConfigError`], raised before any
/// network call; the kinds here all originate from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GeminiErrorKind {
    /// Backend quota or resource exhaustion.
    ///
    /// Distinguished from generic failure so callers can present a
    /// "try again later" message rather than a raw error.
    #[display("Generation limit reached: {}", _0)]
    RateLimited(String),
    /// API request failed
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Base64 decoding of an inline image payload failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// Response body did not match the expected wire shape
    #[display("Invalid Gemini response: {}", _0)]
    InvalidResponse(String),
}

impl GeminiErrorKind {
    /// Check whether this error is quota/resource exhaustion.
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::RateLimited(_)
                | GeminiErrorKind::HttpError {
                    status_code: 429,
                    ..
                }
        )
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use postwright_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::RateLimited("quota exceeded".into()));
/// assert!(err.is_rate_limited());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Check whether this error is quota/resource exhaustion.
    pub fn is_rate_limited(&self) -> bool {
        self.kind.is_rate_limited()
    }
}
