//! The composition pipeline over the driver traits.

use postwright_core::{AspectRatio, GeneratedPost, ImageStyle, Platform, PostConfig};
use postwright_error::PostwrightResult;
use postwright_models::{ImageGenerator, Rewriter, TextGenerator};
use postwright_prompt::{
    append_hashtag_block, build_image_request, build_prompt, decode, dedup_sources,
    normalize_hashtags,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, instrument, warn};

/// The result of one composition, tagged with its request id so a
/// caller that fired a newer request can discard this one.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Id assigned when the request was admitted
    pub request_id: u64,
    /// The finished post
    pub post: GeneratedPost,
}

/// Orchestrates prompt building, concurrent text+image generation, and
/// output normalization.
///
/// The drivers are trait objects so tests (and future backends) can
/// substitute fakes without touching the pipeline.
pub struct Studio {
    text: Arc<dyn TextGenerator>,
    image: Arc<dyn ImageGenerator>,
    rewriter: Arc<dyn Rewriter>,
    // Monotonic request counter; the latest admitted id is "current".
    request_seq: AtomicU64,
}

impl Studio {
    /// Create a studio over the three model drivers.
    pub fn new(
        text: Arc<dyn TextGenerator>,
        image: Arc<dyn ImageGenerator>,
        rewriter: Arc<dyn Rewriter>,
    ) -> Self {
        Self {
            text,
            image,
            rewriter,
            request_seq: AtomicU64::new(0),
        }
    }

    /// Whether `request_id` is still the most recently admitted request.
    ///
    /// A caller that kicked off a new composition while an older one was
    /// in flight uses this to drop the stale result.
    pub fn is_current(&self, request_id: u64) -> bool {
        self.request_seq.load(Ordering::SeqCst) == request_id
    }

    fn admit_request(&self) -> u64 {
        self.request_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Compose a post: validate, build the prompt, then run text and
    /// image generation concurrently.
    ///
    /// Text failure fails the whole composition. Image failure is
    /// logged and the post is returned without an image.
    #[instrument(skip(self, config), fields(platform = %config.platform()))]
    pub async fn compose(
        &self,
        config: &PostConfig,
        style: ImageStyle,
    ) -> PostwrightResult<Composition> {
        config.validate()?;

        let request_id = self.admit_request();
        let prompt = build_prompt(config);
        let image_request = build_image_request(config, style, None, None);

        let (text_result, image_result) = tokio::join!(
            self.text.generate(&prompt),
            self.image.generate_image(&image_request),
        );

        let raw = text_result?;
        let image_url = match image_result {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "image generation failed, continuing without an image");
                None
            }
        };

        let decoded = decode(&raw.text);
        let hashtags = normalize_hashtags(&decoded.hashtags);
        let content = if *config.include_hashtags() {
            append_hashtag_block(&decoded.post_content, &hashtags, *config.platform())
        } else {
            decoded.post_content
        };

        let post = GeneratedPost {
            research_summary: decoded.research_summary,
            content_angle: decoded.content_angle,
            content,
            hashtags,
            image_url,
            sources: dedup_sources(raw.grounding_refs),
            timestamp: GeneratedPost::now_millis(),
            scheduled_for: None,
        };

        info!(request_id, sources = post.sources.len(), "composition finished");
        Ok(Composition { request_id, post })
    }

    /// Rewrite the post body for a different audience, returning the
    /// replacement text. The caller applies it with
    /// [`GeneratedPost::replace_content`]; on error the existing
    /// content stays untouched.
    ///
    /// Runs independently of [`regenerate_image`]: the two touch
    /// disjoint fields and may be awaited concurrently.
    ///
    /// [`regenerate_image`]: Studio::regenerate_image
    #[instrument(skip(self, post), fields(platform = %platform, audience = %audience))]
    pub async fn rewrite_content(
        &self,
        post: &GeneratedPost,
        platform: Platform,
        audience: &str,
    ) -> PostwrightResult<String> {
        self.rewriter.rewrite(&post.content, platform, audience).await
    }

    /// Generate a replacement image, returning its `data:` URI.
    ///
    /// `Ok(None)` means the backend produced no image; the caller keeps
    /// whatever image the post already has.
    #[instrument(skip(self, config, manual_prompt))]
    pub async fn regenerate_image(
        &self,
        config: &PostConfig,
        style: ImageStyle,
        aspect_ratio: Option<AspectRatio>,
        manual_prompt: Option<&str>,
    ) -> PostwrightResult<Option<String>> {
        let request = build_image_request(config, style, aspect_ratio, manual_prompt);
        self.image.generate_image(&request).await
    }
}

impl std::fmt::Debug for Studio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("request_seq", &self.request_seq)
            .finish_non_exhaustive()
    }
}
