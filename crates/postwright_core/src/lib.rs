//! Core data types for the Postwright content studio.
//!
//! This crate provides the configuration model, the generated-post entity,
//! and the canonical per-platform profile table referenced by every other
//! crate in the workspace. Keeping the platform table in one place is what
//! prevents character limits and hashtag policy from drifting between the
//! prompt builder, the decoder, and the publish flow.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod platform;
mod post;
mod style;
mod telemetry;
mod tone;
mod topic;

pub use config::{PostConfig, PostConfigBuilder};
pub use platform::{AspectRatio, Platform, PlatformProfile};
pub use post::{GeneratedPost, GroundingSource};
pub use style::ImageStyle;
pub use telemetry::init_tracing;
pub use tone::Tone;
pub use topic::Topic;
