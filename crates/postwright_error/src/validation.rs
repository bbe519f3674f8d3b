//! Input validation error types.
//!
//! Validation errors are resolved at the input boundary: the offending
//! action is blocked and inline guidance is shown. They never reach the
//! network layer.

/// Specific validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Custom topic selected but no topic text supplied
    #[display("A custom topic was selected but the topic text is empty")]
    EmptyCustomTopic,
    /// App id field left blank
    #[display("Please enter a Facebook App ID")]
    EmptyAppId,
    /// App id contains non-digit characters.
    ///
    /// Distinguishes "wrong kind of id" (a profile name or email pasted
    /// into the app-id field) from a generic malformed value.
    #[display(
        "Invalid App ID '{}': it must be a numeric ID (e.g. 123456789). \
         A profile name or URL slug is not an App ID; create an app at \
         developers.facebook.com",
        _0
    )]
    NonNumericAppId(String),
    /// Requested schedule time is not in the future
    #[display("Scheduled time {} is not in the future", _0)]
    PastScheduleTime(String),
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use postwright_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::NonNumericAppId("johnsmith".into()));
/// assert!(format!("{}", err).contains("numeric"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
