//! Image-generation request construction.

use postwright_core::{AspectRatio, ImageStyle, PostConfig};

/// A built image-generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Full prompt text, including style and the no-text directive
    pub prompt: String,
    /// Aspect ratio hint for the backend
    pub aspect_ratio: AspectRatio,
}

/// Build an image request from the configuration.
///
/// A supplied `aspect_ratio` overrides the platform default; a supplied
/// `manual_prompt` takes precedence over the topic-derived description.
/// Every request instructs the backend to render no embedded text.
pub fn build_image_request(
    config: &PostConfig,
    style: ImageStyle,
    aspect_ratio: Option<AspectRatio>,
    manual_prompt: Option<&str>,
) -> ImageRequest {
    let aspect_ratio = aspect_ratio.unwrap_or(config.platform().profile().aspect_ratio);

    let subject = match manual_prompt.map(str::trim) {
        Some(text) if !text.is_empty() => {
            format!("Create a digital illustration based on this description: \"{text}\".")
        }
        _ => format!(
            "Create a professional, modern, high-quality digital illustration \
             suitable for a {} post about: \"{}\".",
            config.platform(),
            config.effective_topic(),
        ),
    };

    let prompt = format!(
        "{subject}\n\
         Style: {style}.\n\
         Mood: {mood}.\n\
         Aspect Ratio: {aspect_ratio}.\n\
         Important: Do not include any text or words inside the image.",
        style = style.descriptor(),
        mood = config.tone(),
    );

    ImageRequest {
        prompt,
        aspect_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postwright_core::{Platform, Topic};

    #[test]
    fn platform_default_aspect_ratio_applies() {
        let config = PostConfig::builder().platform(Platform::Instagram).build().unwrap();
        let request = build_image_request(&config, ImageStyle::default(), None, None);
        assert_eq!(request.aspect_ratio, AspectRatio::Square);
    }

    #[test]
    fn explicit_aspect_ratio_overrides_default() {
        let config = PostConfig::builder().platform(Platform::Instagram).build().unwrap();
        let request =
            build_image_request(&config, ImageStyle::default(), Some(AspectRatio::Wide), None);
        assert_eq!(request.aspect_ratio, AspectRatio::Wide);
    }

    #[test]
    fn manual_prompt_takes_precedence_over_topic() {
        let config = PostConfig::builder()
            .topic(Topic::PredictiveForecasting)
            .build()
            .unwrap();
        let request = build_image_request(
            &config,
            ImageStyle::Cyberpunk,
            None,
            Some("a lighthouse made of graphs"),
        );
        assert!(request.prompt.contains("a lighthouse made of graphs"));
        assert!(!request.prompt.contains("Predictive Forecasting"));
    }

    #[test]
    fn blank_manual_prompt_falls_back_to_topic() {
        let config = PostConfig::builder().build().unwrap();
        let request = build_image_request(&config, ImageStyle::default(), None, Some("   "));
        assert!(request.prompt.contains("Autonomous Data Agents"));
    }

    #[test]
    fn no_text_directive_is_always_present() {
        let config = PostConfig::builder().build().unwrap();
        for manual in [None, Some("custom scene")] {
            let request = build_image_request(&config, ImageStyle::Abstract, None, manual);
            assert!(request.prompt.contains("Do not include any text or words"));
        }
    }

    #[test]
    fn style_descriptor_is_injected() {
        let config = PostConfig::builder().build().unwrap();
        let request = build_image_request(&config, ImageStyle::Watercolor, None, None);
        assert!(request.prompt.contains("watercolor art style"));
    }
}
