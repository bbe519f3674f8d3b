//! Prompt construction and model-output recovery.
//!
//! Everything in this crate is pure: configuration in, strings out. The
//! prompt builder maps a [`postwright_core::PostConfig`] to a structured
//! instruction set; the decoder recovers a structured post from whatever
//! the model actually returned, with a guaranteed non-throwing contract.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod decoder;
mod image;
mod normalize;

pub use builder::{FORBIDDEN_VOCABULARY, PromptSpec, build_prompt, build_rewrite_prompt};
pub use decoder::{DecodedPost, decode};
pub use image::{ImageRequest, build_image_request};
pub use normalize::{append_hashtag_block, dedup_sources, normalize_hashtags};
