//! The generated-post entity and its provenance records.

use serde::{Deserialize, Serialize};

/// Web reference returned by the backend as provenance for claims in
/// the generated text. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    /// Page title, when the backend supplied one
    pub title: Option<String>,
    /// Source URI; the deduplication key
    pub uri: String,
}

/// A generated social post.
///
/// Created atomically by the text and image pipelines running together.
/// After creation only two mutations are permitted, each replacing a
/// whole field: [`replace_content`] and [`set_image_url`]. A rewrite in
/// flight and an image regeneration in flight touch disjoint fields and
/// may proceed concurrently.
///
/// [`replace_content`]: GeneratedPost::replace_content
/// [`set_image_url`]: GeneratedPost::set_image_url
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPost {
    /// Human-readable synthesis of the research findings
    pub research_summary: String,
    /// Label of the editorial angle the model chose
    pub content_angle: String,
    /// Final post body, markdown-flavored
    pub content: String,
    /// Normalized hashtags, insertion order from the model output
    pub hashtags: Vec<String>,
    /// External URL or inline `data:` URI; absent until an image
    /// request succeeds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Deduplicated provenance records, first-occurrence order
    pub sources: Vec<GroundingSource>,
    /// Creation time, epoch milliseconds
    pub timestamp: i64,
    /// ISO-8601 schedule time, set only by the scheduling feature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
}

impl GeneratedPost {
    /// Current time in epoch milliseconds, for the `timestamp` field.
    pub fn now_millis() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    /// Replace the whole post body. Used by the rewrite flow; partial
    /// writes are not permitted.
    pub fn replace_content(&mut self, content: String) {
        self.content = content;
    }

    /// Replace the image reference wholesale.
    pub fn set_image_url(&mut self, url: String) {
        self.image_url = Some(url);
    }
}
