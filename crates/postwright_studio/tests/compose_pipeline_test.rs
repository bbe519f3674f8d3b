//! End-to-end pipeline tests over fake model drivers.

use async_trait::async_trait;
use postwright_core::{GroundingSource, ImageStyle, Platform, PostConfig};
use postwright_error::{GeminiError, GeminiErrorKind, PostwrightResult};
use postwright_models::{ImageGenerator, RawModelResponse, Rewriter, TextGenerator};
use postwright_prompt::{ImageRequest, PromptSpec};
use postwright_studio::Studio;
use std::sync::Arc;

struct FakeText {
    text: String,
    refs: Vec<GroundingSource>,
    fail: Option<GeminiErrorKind>,
}

impl FakeText {
    fn returning(text: &str) -> Self {
        Self {
            text: text.to_string(),
            refs: vec![],
            fail: None,
        }
    }

    fn failing(kind: GeminiErrorKind) -> Self {
        Self {
            text: String::new(),
            refs: vec![],
            fail: Some(kind),
        }
    }
}

#[async_trait]
impl TextGenerator for FakeText {
    async fn generate(&self, _spec: &PromptSpec) -> PostwrightResult<RawModelResponse> {
        if let Some(kind) = &self.fail {
            return Err(GeminiError::new(kind.clone()).into());
        }
        Ok(RawModelResponse {
            text: self.text.clone(),
            grounding_refs: self.refs.clone(),
        })
    }
}

struct FakeImage {
    url: Option<String>,
    fail: bool,
}

#[async_trait]
impl ImageGenerator for FakeImage {
    async fn generate_image(&self, _request: &ImageRequest) -> PostwrightResult<Option<String>> {
        if self.fail {
            return Err(
                GeminiError::new(GeminiErrorKind::ApiRequest("image backend down".into())).into(),
            );
        }
        Ok(self.url.clone())
    }
}

struct FakeRewriter;

#[async_trait]
impl Rewriter for FakeRewriter {
    async fn rewrite(
        &self,
        content: &str,
        _platform: Platform,
        audience: &str,
    ) -> PostwrightResult<String> {
        Ok(format!("[{audience}] {content}"))
    }
}

fn studio(text: FakeText, image: FakeImage) -> Studio {
    Studio::new(Arc::new(text), Arc::new(image), Arc::new(FakeRewriter))
}

const WELL_FORMED: &str = r##"```json
{"researchSummary":"Agents are moving into production.",
 "contentAngle":"Contrarian",
 "postContent":"Agents ship when the data contract holds.",
 "hashtags":["ai","#DataEngineering"]}
```"##;

#[tokio::test]
async fn compose_returns_a_normalized_post() {
    let mut text = FakeText::returning(WELL_FORMED);
    text.refs = vec![
        GroundingSource {
            title: Some("Report".into()),
            uri: "https://a.example".into(),
        },
        GroundingSource {
            title: None,
            uri: "https://a.example".into(),
        },
    ];
    let studio = studio(
        text,
        FakeImage {
            url: Some("data:image/png;base64,aGk=".into()),
            fail: false,
        },
    );
    let config = PostConfig::builder()
        .platform(Platform::LinkedIn)
        .build()
        .unwrap();

    let composition = studio.compose(&config, ImageStyle::default()).await.unwrap();
    let post = &composition.post;

    assert_eq!(post.research_summary, "Agents are moving into production.");
    assert_eq!(post.content_angle, "Contrarian");
    assert_eq!(
        post.content,
        "Agents ship when the data contract holds.\n\n#ai #DataEngineering"
    );
    assert_eq!(post.hashtags, vec!["#ai", "#DataEngineering"]);
    assert_eq!(post.image_url.as_deref(), Some("data:image/png;base64,aGk="));
    assert_eq!(post.sources.len(), 1);
    assert!(post.timestamp > 0);
    assert_eq!(post.scheduled_for, None);
}

#[tokio::test]
async fn hashtag_block_respects_the_modifier() {
    let studio = studio(
        FakeText::returning(WELL_FORMED),
        FakeImage {
            url: None,
            fail: false,
        },
    );
    let config = PostConfig::builder()
        .platform(Platform::LinkedIn)
        .include_hashtags(false)
        .build()
        .unwrap();

    let composition = studio.compose(&config, ImageStyle::default()).await.unwrap();
    assert_eq!(
        composition.post.content,
        "Agents ship when the data contract holds."
    );
    // Tags are still decoded even when not appended.
    assert_eq!(composition.post.hashtags.len(), 2);
}

#[tokio::test]
async fn image_failure_degrades_to_no_image() {
    let studio = studio(
        FakeText::returning(WELL_FORMED),
        FakeImage {
            url: None,
            fail: true,
        },
    );
    let config = PostConfig::builder().build().unwrap();

    let composition = studio.compose(&config, ImageStyle::default()).await.unwrap();
    assert_eq!(composition.post.image_url, None);
}

#[tokio::test]
async fn text_failure_fails_the_composition() {
    let studio = studio(
        FakeText::failing(GeminiErrorKind::ApiRequest("boom".into())),
        FakeImage {
            url: None,
            fail: false,
        },
    );
    let config = PostConfig::builder().build().unwrap();

    assert!(studio.compose(&config, ImageStyle::default()).await.is_err());
}

#[tokio::test]
async fn quota_exhaustion_is_distinguishable() {
    let studio = studio(
        FakeText::failing(GeminiErrorKind::RateLimited("quota exceeded".into())),
        FakeImage {
            url: None,
            fail: false,
        },
    );
    let config = PostConfig::builder().build().unwrap();

    let err = studio
        .compose(&config, ImageStyle::default())
        .await
        .unwrap_err();
    assert!(err.is_rate_limited());
}

#[tokio::test]
async fn malformed_output_still_yields_a_post() {
    let studio = studio(
        FakeText::returning("The model ignored the format and just wrote prose."),
        FakeImage {
            url: None,
            fail: false,
        },
    );
    let config = PostConfig::builder().build().unwrap();

    let composition = studio.compose(&config, ImageStyle::default()).await.unwrap();
    assert_eq!(
        composition.post.research_summary,
        "Could not parse research summary."
    );
    assert_eq!(
        composition.post.content,
        "The model ignored the format and just wrote prose."
    );
    assert!(composition.post.hashtags.is_empty());
}

#[tokio::test]
async fn newer_request_supersedes_older_results() {
    let studio = studio(
        FakeText::returning(WELL_FORMED),
        FakeImage {
            url: None,
            fail: false,
        },
    );
    let config = PostConfig::builder().build().unwrap();

    let first = studio.compose(&config, ImageStyle::default()).await.unwrap();
    let second = studio.compose(&config, ImageStyle::default()).await.unwrap();

    assert!(!studio.is_current(first.request_id));
    assert!(studio.is_current(second.request_id));
}

#[tokio::test]
async fn validation_failure_never_reaches_the_drivers() {
    struct PanickingText;

    #[async_trait]
    impl TextGenerator for PanickingText {
        async fn generate(&self, _spec: &PromptSpec) -> PostwrightResult<RawModelResponse> {
            panic!("driver must not be called for invalid input");
        }
    }

    let studio = Studio::new(
        Arc::new(PanickingText),
        Arc::new(FakeImage {
            url: None,
            fail: false,
        }),
        Arc::new(FakeRewriter),
    );
    let config = PostConfig::builder()
        .topic(postwright_core::Topic::Custom)
        .custom_topic("   ")
        .build()
        .unwrap();

    assert!(studio.compose(&config, ImageStyle::default()).await.is_err());
}

#[tokio::test]
async fn rewrite_returns_replacement_text_without_mutating() {
    let studio = studio(
        FakeText::returning(WELL_FORMED),
        FakeImage {
            url: None,
            fail: false,
        },
    );
    let config = PostConfig::builder().build().unwrap();

    let composition = studio.compose(&config, ImageStyle::default()).await.unwrap();
    let original = composition.post.content.clone();

    let rewritten = studio
        .rewrite_content(&composition.post, Platform::X, "startup founders")
        .await
        .unwrap();

    assert!(rewritten.starts_with("[startup founders] "));
    assert_eq!(composition.post.content, original);
}
