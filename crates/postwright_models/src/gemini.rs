//! Gemini REST API client.
//!
//! One client implements all three driver traits: text generation with
//! the search/grounding tool, best-effort image generation, and the
//! single-shot rewrite. The client talks to the REST endpoint directly;
//! the wire shapes live in [`crate::wire`].

use crate::driver::{ImageGenerator, RawModelResponse, Rewriter, TextGenerator};
use crate::wire::{
    ApiErrorBody, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, Tool,
};
use async_trait::async_trait;
use base64::Engine;
use postwright_core::{GroundingSource, Platform};
use postwright_error::{ConfigError, GeminiError, GeminiErrorKind, PostwrightResult};
use postwright_prompt::{ImageRequest, PromptSpec, build_rewrite_prompt};
use std::time::Duration;
use tracing::{debug, instrument, warn};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const TEXT_MODEL: &str = "gemini-2.5-flash";
const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Bounded timeout applied to every backend call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

/// Client for the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    /// Create a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// Fails fast before any network call when the key is missing.
    pub fn new() -> PostwrightResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::new("GEMINI_API_KEY environment variable not set"))?;
        Ok(Self::with_api_key(api_key))
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client with static configuration");

        Self {
            client,
            api_key: api_key.into(),
            text_model: TEXT_MODEL.to_string(),
            image_model: IMAGE_MODEL.to_string(),
        }
    }

    /// Send one `generateContent` request and decode the response.
    async fn post_generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = format!("{API_BASE}/{model}:generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                        "request to {model} timed out"
                    )))
                } else {
                    GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_failure(status.as_u16(), &body));
        }

        response.json::<GenerateContentResponse>().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string()))
        })
    }

    /// Translate a non-2xx response into the right error kind.
    ///
    /// Quota exhaustion (HTTP 429 or a `RESOURCE_EXHAUSTED` status in
    /// the error body) maps to the distinguished rate-limit kind so the
    /// caller can say "try again later" instead of showing a raw error.
    fn classify_failure(status_code: u16, body: &str) -> GeminiError {
        let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
        let message = parsed
            .as_ref()
            .map(|b| b.error.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| body.to_string());

        let exhausted = status_code == 429
            || parsed
                .as_ref()
                .is_some_and(|b| b.error.status == "RESOURCE_EXHAUSTED");

        if exhausted {
            GeminiError::new(GeminiErrorKind::RateLimited(message))
        } else {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message,
            })
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, spec), fields(model = %self.text_model))]
    async fn generate(&self, spec: &PromptSpec) -> PostwrightResult<RawModelResponse> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(Some("user"), &spec.user_prompt)],
            system_instruction: Some(Content::text(None, &spec.system_instruction)),
            tools: spec.use_search.then(|| vec![Tool::google_search()]),
            generation_config: Some(GenerationConfig {
                temperature: Some(spec.temperature),
                image_config: None,
            }),
        };

        let response = self.post_generate(&self.text_model, &request).await?;

        // Empty model output is not an error: the decoder turns "{}"
        // into a safe fallback post.
        let mut text = response.text();
        if text.trim().is_empty() {
            debug!("backend returned empty text, substituting empty object");
            text = "{}".to_string();
        }

        let grounding_refs = response
            .web_references()
            .into_iter()
            .map(|(title, uri)| GroundingSource { title, uri })
            .collect();

        Ok(RawModelResponse {
            text,
            grounding_refs,
        })
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    #[instrument(skip(self, request), fields(model = %self.image_model))]
    async fn generate_image(&self, request: &ImageRequest) -> PostwrightResult<Option<String>> {
        let wire_request = GenerateContentRequest {
            contents: vec![Content::text(Some("user"), &request.prompt)],
            system_instruction: None,
            tools: None,
            generation_config: Some(GenerationConfig {
                temperature: None,
                image_config: Some(ImageConfig {
                    aspect_ratio: request.aspect_ratio.to_string(),
                }),
            }),
        };

        let response = self.post_generate(&self.image_model, &wire_request).await?;

        let Some(inline) = response.first_inline_image() else {
            debug!("no inline image part in response");
            return Ok(None);
        };

        // Validate the payload before handing out a data URI.
        base64::engine::general_purpose::STANDARD
            .decode(&inline.data)
            .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;

        Ok(Some(format!(
            "data:{};base64,{}",
            inline.mime_type, inline.data
        )))
    }
}

#[async_trait]
impl Rewriter for GeminiClient {
    #[instrument(skip(self, content), fields(platform = %platform, audience = %audience))]
    async fn rewrite(
        &self,
        content: &str,
        platform: Platform,
        audience: &str,
    ) -> PostwrightResult<String> {
        let spec = build_rewrite_prompt(content, platform, audience);

        let request = GenerateContentRequest {
            contents: vec![Content::text(Some("user"), &spec.user_prompt)],
            system_instruction: Some(Content::text(None, &spec.system_instruction)),
            tools: None,
            generation_config: Some(GenerationConfig {
                temperature: Some(spec.temperature),
                image_config: None,
            }),
        };

        let response = self.post_generate(&self.text_model, &request).await?;
        let text = response.text().trim().to_string();

        if text.is_empty() {
            warn!("rewrite returned empty text");
            return Err(GeminiError::new(GeminiErrorKind::InvalidResponse(
                "rewrite returned empty text".to_string(),
            ))
            .into());
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_429_maps_to_rate_limited() {
        let err = GeminiClient::classify_failure(429, "");
        assert!(err.is_rate_limited());
    }

    #[test]
    fn resource_exhausted_status_maps_to_rate_limited() {
        let body = r#"{"error":{"code":400,"message":"Quota exceeded for model","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = GeminiClient::classify_failure(400, body);
        assert!(err.is_rate_limited());
        assert!(format!("{err}").contains("Quota exceeded for model"));
    }

    #[test]
    fn other_failures_keep_the_backend_message() {
        let body = r#"{"error":{"code":400,"message":"Invalid argument","status":"INVALID_ARGUMENT"}}"#;
        let err = GeminiClient::classify_failure(400, body);
        assert!(!err.is_rate_limited());
        assert!(format!("{err}").contains("Invalid argument"));
    }

    #[test]
    fn unparseable_error_body_falls_back_to_raw_text() {
        let err = GeminiClient::classify_failure(500, "internal blew up");
        assert!(format!("{err}").contains("internal blew up"));
    }
}
