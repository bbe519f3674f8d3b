//! Preference storage error types.

/// Storage-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StorageErrorKind {
    /// Filesystem operation failed
    #[display("Storage I/O error: {}", _0)]
    Io(String),
    /// Preference file could not be serialized or parsed
    #[display("Preference serialization error: {}", _0)]
    Serde(String),
    /// No usable location for the preference file
    #[display("No configuration directory available")]
    NoConfigDir,
}

/// Storage error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new StorageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
