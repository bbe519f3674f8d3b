//! Gemini-backed generation, image, and rewrite clients.
//!
//! The network sits behind three small driver traits so the pipeline
//! and its tests never depend on a live backend: [`TextGenerator`],
//! [`ImageGenerator`], and [`Rewriter`]. [`GeminiClient`] implements
//! all three over the Gemini REST API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod driver;
mod gemini;
mod wire;

pub use driver::{ImageGenerator, RawModelResponse, Rewriter, TextGenerator};
pub use gemini::GeminiClient;
