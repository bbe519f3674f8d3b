//! Postwright - AI-assisted social post studio.
//!
//! Postwright turns a topic, a tone, and a target platform into a
//! ready-to-publish social post: research-grounded text, a matching
//! illustration, and either a direct publish to a Facebook Page or a
//! compose-URL handoff for every other platform.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use postwright::{GeminiClient, ImageStyle, Platform, PostConfig, Studio};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(GeminiClient::new()?);
//!     let studio = Studio::new(client.clone(), client.clone(), client);
//!
//!     let config = PostConfig::builder()
//!         .platform(Platform::LinkedIn)
//!         .build()?;
//!     let composition = studio.compose(&config, ImageStyle::Minimalist).await?;
//!     println!("{}", composition.post.content);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Postwright is organized as a workspace with focused crates:
//!
//! - `postwright_core` - Configuration model, platform profiles, the post entity
//! - `postwright_prompt` - Prompt construction and model-output recovery
//! - `postwright_models` - Gemini clients behind the driver traits
//! - `postwright_studio` - The concurrent generation pipeline
//! - `postwright_publish` - Facebook publishing and the compose fallback
//! - `postwright_storage` - Local preference persistence
//! - `postwright_error` - Error types
//!
//! This crate (`postwright`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use postwright_core::{
    AspectRatio, GeneratedPost, GroundingSource, ImageStyle, Platform, PlatformProfile,
    PostConfig, PostConfigBuilder, Tone, Topic, init_tracing,
};
pub use postwright_error::{
    ConfigError, GeminiError, GeminiErrorKind, PostwrightError, PostwrightErrorKind,
    PostwrightResult, PublishError, PublishErrorKind, StorageError, StorageErrorKind,
    ValidationError, ValidationErrorKind,
};
pub use postwright_models::{
    GeminiClient, ImageGenerator, RawModelResponse, Rewriter, TextGenerator,
};
pub use postwright_prompt::{
    DecodedPost, FORBIDDEN_VOCABULARY, ImageRequest, PromptSpec, append_hashtag_block,
    build_image_request, build_prompt, build_rewrite_prompt, decode, dedup_sources,
    normalize_hashtags,
};
pub use postwright_publish::{
    AppId, ComposeActions, FacebookPage, FacebookSession, FacebookUser, GraphSession,
    PublishOrchestrator, PublishOutcome, PublishState, compose_url, manual_publish,
};
pub use postwright_storage::{FileStore, KeyValueStore, MemoryStore, Preferences};
pub use postwright_studio::{Composition, Studio, schedule};
