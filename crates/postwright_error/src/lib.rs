//! Error types for the Postwright content studio.
//!
//! This crate provides the foundation error types used throughout the
//! Postwright workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use postwright_error::{PostwrightResult, ConfigError};
//!
//! fn load_key() -> PostwrightResult<String> {
//!     Err(ConfigError::new("GEMINI_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod publish;
mod storage;
mod validation;

pub use config::ConfigError;
pub use error::{PostwrightError, PostwrightErrorKind, PostwrightResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use publish::{PublishError, PublishErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
