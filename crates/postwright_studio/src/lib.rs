//! The generation pipeline.
//!
//! [`Studio`] ties the prompt builder, the model drivers, and the
//! decoder together: one `compose` call validates the configuration,
//! runs text and image generation concurrently, and returns a fully
//! normalized [`postwright_core::GeneratedPost`]. Image trouble never
//! sinks a composition; the post simply ships without an image.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod schedule;
mod studio;

pub use schedule::schedule;
pub use studio::{Composition, Studio};
