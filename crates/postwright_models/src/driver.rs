//! Driver traits seaming the pipeline from the network.

use async_trait::async_trait;
use postwright_core::{GroundingSource, Platform};
use postwright_error::PostwrightResult;
use postwright_prompt::{ImageRequest, PromptSpec};

/// Raw output of a text-generation call: free-form text expected to
/// contain embedded JSON, plus the backend's grounding references in
/// response order (not yet deduplicated).
#[derive(Debug, Clone, PartialEq)]
pub struct RawModelResponse {
    /// Model output text; `"{}"` when the backend returned none
    pub text: String,
    /// Web references attached by the grounding tool
    pub grounding_refs: Vec<GroundingSource>,
}

/// Text generation with search/grounding capability.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation request. Backend quota exhaustion surfaces as
    /// the distinguished rate-limit error kind.
    async fn generate(&self, spec: &PromptSpec) -> PostwrightResult<RawModelResponse>;
}

/// Best-effort image generation.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate an image, returned as a displayable `data:` URI.
    ///
    /// `Ok(None)` means the backend produced no image part; callers
    /// treat both `Ok(None)` and `Err` as "no image".
    async fn generate_image(&self, request: &ImageRequest) -> PostwrightResult<Option<String>>;
}

/// Single-shot rewrite of existing post content into another register.
#[async_trait]
pub trait Rewriter: Send + Sync {
    /// Rewrite `content` for `audience`. On failure the caller leaves
    /// the existing content unchanged.
    async fn rewrite(
        &self,
        content: &str,
        platform: Platform,
        audience: &str,
    ) -> PostwrightResult<String>;
}
