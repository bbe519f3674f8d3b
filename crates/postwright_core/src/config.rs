//! The per-request generation configuration.

use crate::{ImageStyle, Platform, Tone, Topic};
use postwright_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Immutable-per-request description of what to generate.
///
/// The boolean content modifiers are independent and compose freely; the
/// prompt builder evaluates them in a fixed declaration order. The
/// `custom_topic` field is ignored unless `topic == Topic::Custom`.
///
/// # Examples
///
/// ```
/// use postwright_core::{PostConfig, Platform, Topic, Tone};
///
/// let config = PostConfig::builder()
///     .platform(Platform::X)
///     .topic(Topic::Custom)
///     .custom_topic("RAG evaluation pitfalls".to_string())
///     .tone(Tone::Skeptical)
///     .build()
///     .unwrap();
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.effective_topic(), "RAG evaluation pitfalls");
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PostConfig {
    /// Target platform
    #[builder(default = "Platform::LinkedIn")]
    platform: Platform,
    /// Topic from the fixed catalog
    #[builder(default = "Topic::AutonomousDataAgents")]
    topic: Topic,
    /// Free-text topic, required non-empty when `topic == Custom`
    #[builder(default)]
    custom_topic: String,
    /// Editorial register
    #[builder(default = "Tone::Educational")]
    tone: Tone,
    /// Preferred visual style for the companion image
    #[builder(default)]
    image_style: ImageStyle,
    /// Use emojis naturally in the body
    #[builder(default = "true")]
    include_emoji: bool,
    /// Append a normalized hashtag block (platform policy permitting)
    #[builder(default = "true")]
    include_hashtags: bool,
    /// Include a two-step prompt-chain example
    #[builder(default)]
    include_prompt_chaining: bool,
    /// End with an explicit call to action
    #[builder(default)]
    include_cta: bool,
    /// Structure the body as a before/after or A-vs-B comparison
    #[builder(default)]
    comparison_format: bool,
    /// Open with a one-line TL;DR
    #[builder(default)]
    tldr_summary: bool,
    /// Close with a short future-outlook section
    #[builder(default)]
    include_future_outlook: bool,
    /// Include a devil's-advocate counterpoint
    #[builder(default)]
    include_devils_advocate: bool,
    /// Include concrete implementation steps
    #[builder(default)]
    include_implementation_steps: bool,
}

impl PostConfig {
    /// Start building a configuration.
    pub fn builder() -> PostConfigBuilder {
        PostConfigBuilder::default()
    }

    /// The topic text actually used for generation.
    ///
    /// Returns the catalog topic's display name, or the free text when
    /// the custom sentinel is selected. Callers must run [`validate`]
    /// first; a blank custom topic yields an empty string here.
    ///
    /// [`validate`]: PostConfig::validate
    pub fn effective_topic(&self) -> String {
        if self.topic.is_custom() {
            self.custom_topic.trim().to_string()
        } else {
            self.topic.to_string()
        }
    }

    /// Reject configurations that must not reach the generation client.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.topic.is_custom() && self.custom_topic.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyCustomTopic));
        }
        Ok(())
    }
}

impl Default for PostConfig {
    fn default() -> Self {
        PostConfig::builder().build().expect("all fields have defaults")
    }
}
