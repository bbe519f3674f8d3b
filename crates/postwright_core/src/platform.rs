//! Target platforms and the canonical per-platform profile table.
//!
//! Every call site that needs a character limit, aspect ratio, hashtag
//! policy, or compose URL reads it from [`PlatformProfile`]. The table is
//! the single source of truth for per-platform business rules.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Social platform a post is generated for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display,
)]
pub enum Platform {
    /// LinkedIn feed post
    #[display("LinkedIn")]
    LinkedIn,
    /// Single tweet on X
    #[display("X (Twitter)")]
    X,
    /// Instagram caption
    #[display("Instagram")]
    Instagram,
    /// Facebook page post
    #[display("Facebook")]
    Facebook,
    /// Medium article
    #[display("Medium")]
    Medium,
}

/// Image aspect ratio hint passed to the image backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum AspectRatio {
    /// 1:1, image-grid platforms
    #[display("1:1")]
    Square,
    /// 4:3, feed photos
    #[display("4:3")]
    Standard,
    /// 16:9, link previews and wide feeds
    #[display("16:9")]
    Wide,
}

/// Per-platform generation and publishing rules.
///
/// `sweet_spot` is the empirically preferred body length, distinct from
/// `char_limit`, the platform's hard maximum (`None` = effectively
/// unbounded for post-length purposes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Voice and structural guidance injected into the prompt
    pub voice: &'static str,
    /// Length/format constraint injected into the prompt
    pub constraint: &'static str,
    /// Hard character limit, where the platform enforces one
    pub char_limit: Option<u32>,
    /// Preferred body length range, human-readable
    pub sweet_spot: &'static str,
    /// Default image aspect ratio when none is supplied
    pub aspect_ratio: AspectRatio,
    /// Whether a trailing hashtag block is appended to the content
    pub append_hashtags: bool,
    /// Base URL of the platform's composer (fallback publish path)
    pub compose_base: &'static str,
    /// Whether the composer URL accepts pre-filled text
    pub compose_accepts_text: bool,
}

impl Platform {
    /// Look up the canonical profile for this platform.
    pub fn profile(&self) -> &'static PlatformProfile {
        match self {
            Platform::LinkedIn => &PlatformProfile {
                voice: "Professional but warm. Insight-driven. Use spacing for readability.",
                constraint: "900-1300 characters.",
                char_limit: Some(3000),
                sweet_spot: "900-1300 characters",
                aspect_ratio: AspectRatio::Wide,
                append_hashtags: true,
                compose_base: "https://www.linkedin.com/feed/?shareActive=true",
                compose_accepts_text: true,
            },
            Platform::X => &PlatformProfile {
                voice: "Viral one-liner. High impact. No fluff. Use arrows (->) for causality.",
                constraint: "Strictly under 280 characters TOTAL. Single tweet only. NO THREADS.",
                char_limit: Some(280),
                sweet_spot: "200-270 characters",
                aspect_ratio: AspectRatio::Wide,
                append_hashtags: true,
                compose_base: "https://twitter.com/intent/tweet",
                compose_accepts_text: true,
            },
            Platform::Instagram => &PlatformProfile {
                voice: "Relatable, lifestyle-tech blend. First line must be a hook.",
                constraint: "Keep it under 150 words. Focus on the visual hook.",
                char_limit: Some(2200),
                sweet_spot: "under 150 words",
                aspect_ratio: AspectRatio::Square,
                append_hashtags: true,
                compose_base: "https://www.instagram.com/",
                compose_accepts_text: false,
            },
            Platform::Facebook => &PlatformProfile {
                voice: "Friendly, community-focused, slightly informal.",
                constraint: "300-700 characters. Conversational.",
                char_limit: Some(63_206),
                sweet_spot: "300-700 characters",
                aspect_ratio: AspectRatio::Standard,
                append_hashtags: true,
                compose_base: "https://www.facebook.com/",
                compose_accepts_text: false,
            },
            // Medium tags live in their own field on the story, so a
            // trailing tag block is never appended to the body.
            Platform::Medium => &PlatformProfile {
                voice: "Deep dive, educational, storytelling. Detailed examples. \
                        Structure: Context -> The Problem -> The New Solution -> Implication.",
                constraint: "600-800 words. Use Markdown headers (##).",
                char_limit: None,
                sweet_spot: "600-800 words",
                aspect_ratio: AspectRatio::Wide,
                append_hashtags: false,
                compose_base: "https://medium.com/new-story",
                compose_accepts_text: false,
            },
        }
    }

    /// True for the one platform with a direct-publish API integration.
    pub fn supports_direct_publish(&self) -> bool {
        matches!(self, Platform::Facebook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_platform_has_a_complete_profile() {
        for platform in Platform::iter() {
            let profile = platform.profile();
            assert!(!profile.voice.is_empty());
            assert!(!profile.constraint.is_empty());
            assert!(!profile.sweet_spot.is_empty());
            assert!(!profile.compose_base.is_empty());
        }
    }

    #[test]
    fn medium_excludes_trailing_hashtags() {
        assert!(!Platform::Medium.profile().append_hashtags);
        assert!(Platform::LinkedIn.profile().append_hashtags);
    }

    #[test]
    fn aspect_ratio_defaults_follow_platform_format() {
        assert_eq!(Platform::Instagram.profile().aspect_ratio, AspectRatio::Square);
        assert_eq!(Platform::Facebook.profile().aspect_ratio, AspectRatio::Standard);
        assert_eq!(Platform::X.profile().aspect_ratio, AspectRatio::Wide);
        assert_eq!(Platform::Medium.profile().aspect_ratio, AspectRatio::Wide);
        assert_eq!(Platform::LinkedIn.profile().aspect_ratio, AspectRatio::Wide);
    }

    #[test]
    fn only_facebook_publishes_directly() {
        assert!(Platform::Facebook.supports_direct_publish());
        assert!(!Platform::LinkedIn.supports_direct_publish());
        assert!(!Platform::X.supports_direct_publish());
    }
}
