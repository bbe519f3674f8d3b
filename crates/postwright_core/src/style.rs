//! Visual style catalog for image generation.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Visual style of the generated illustration.
///
/// Each style maps to a fixed descriptive modifier string through
/// [`ImageStyle::descriptor`]; unknown style names fall back to the
/// default via [`ImageStyle::parse_or_default`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    derive_more::Display,
)]
pub enum ImageStyle {
    /// Clean shapes, generous negative space
    #[default]
    Minimalist,
    /// Photo-real rendering
    Photorealistic,
    /// Non-figurative composition
    Abstract,
    /// Neon-noir palette
    Cyberpunk,
    /// Muted, boardroom-safe palette
    Corporate,
    /// Soft washes and bleeds
    Watercolor,
    /// Dimensional render
    #[display("3D Render")]
    ThreeDRender,
}

impl ImageStyle {
    /// Fixed descriptive modifier injected into the image prompt.
    pub fn descriptor(&self) -> &'static str {
        match self {
            ImageStyle::Minimalist => "minimalist art style, clean lines, generous negative space",
            ImageStyle::Photorealistic => "photorealistic style, natural lighting, shallow depth of field",
            ImageStyle::Abstract => "abstract art style, geometric forms, bold composition",
            ImageStyle::Cyberpunk => "cyberpunk art style, neon accents, high contrast",
            ImageStyle::Corporate => "corporate illustration style, muted palette, professional polish",
            ImageStyle::Watercolor => "watercolor art style, soft washes, organic texture",
            ImageStyle::ThreeDRender => "3D rendered style, soft studio lighting, smooth materials",
        }
    }

    /// Parse a style name (case-insensitive), falling back to the
    /// default for unknown input.
    pub fn parse_or_default(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimalist" => ImageStyle::Minimalist,
            "photorealistic" => ImageStyle::Photorealistic,
            "abstract" => ImageStyle::Abstract,
            "cyberpunk" => ImageStyle::Cyberpunk,
            "corporate" => ImageStyle::Corporate,
            "watercolor" => ImageStyle::Watercolor,
            "3d render" | "3d" => ImageStyle::ThreeDRender,
            _ => ImageStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_style_has_a_descriptor() {
        for style in ImageStyle::iter() {
            assert!(!style.descriptor().is_empty());
        }
    }

    #[test]
    fn unknown_style_falls_back_to_default() {
        assert_eq!(ImageStyle::parse_or_default("Vaporwave"), ImageStyle::Minimalist);
        assert_eq!(ImageStyle::parse_or_default("Cyberpunk"), ImageStyle::Cyberpunk);
    }
}
