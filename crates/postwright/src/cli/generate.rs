//! Generate, rewrite, and schedule command handlers.

use crate::cli::commands::{GenerateArgs, RewriteArgs, ScheduleArgs};
use chrono::{DateTime, Utc};
use postwright_core::{GeneratedPost, ImageStyle, Platform, PostConfig, Tone, Topic};
use postwright_error::{ConfigError, PostwrightResult, StorageError, StorageErrorKind};
use postwright_models::{GeminiClient, Rewriter};
use postwright_studio::{Studio, schedule};
use std::path::Path;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::info;

/// Map a CLI platform name onto the catalog.
pub(crate) fn parse_platform(input: &str) -> PostwrightResult<Platform> {
    match input.to_ascii_lowercase().as_str() {
        "linkedin" => Ok(Platform::LinkedIn),
        "x" | "twitter" => Ok(Platform::X),
        "instagram" => Ok(Platform::Instagram),
        "facebook" => Ok(Platform::Facebook),
        "medium" => Ok(Platform::Medium),
        other => Err(ConfigError::new(format!(
            "unknown platform '{other}' (expected linkedin, x, instagram, facebook, or medium)"
        ))
        .into()),
    }
}

/// Accept either the variant name or the persona label, case-insensitive.
fn parse_tone(input: &str) -> PostwrightResult<Tone> {
    Tone::iter()
        .find(|tone| {
            format!("{tone:?}").eq_ignore_ascii_case(input)
                || tone.label().eq_ignore_ascii_case(input)
        })
        .ok_or_else(|| ConfigError::new(format!("unknown tone '{input}'")).into())
}

/// A preset name selects the catalog topic; anything else is a custom
/// topic verbatim.
fn parse_topic(input: Option<&str>) -> (Topic, String) {
    let Some(text) = input.map(str::trim).filter(|t| !t.is_empty()) else {
        return (Topic::AutonomousDataAgents, String::new());
    };
    match Topic::iter().find(|t| !t.is_custom() && t.to_string().eq_ignore_ascii_case(text)) {
        Some(preset) => (preset, String::new()),
        None => (Topic::Custom, text.to_string()),
    }
}

pub(crate) fn read_post(path: &Path) -> PostwrightResult<GeneratedPost> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| StorageError::new(StorageErrorKind::Io(e.to_string())))?;
    serde_json::from_str(&raw)
        .map_err(|e| StorageError::new(StorageErrorKind::Serde(e.to_string())).into())
}

fn write_post(path: &Path, post: &GeneratedPost) -> PostwrightResult<()> {
    let raw = serde_json::to_string_pretty(post)
        .map_err(|e| StorageError::new(StorageErrorKind::Serde(e.to_string())))?;
    std::fs::write(path, raw)
        .map_err(|e| StorageError::new(StorageErrorKind::Io(e.to_string())).into())
}

fn build_config(args: &GenerateArgs) -> PostwrightResult<(PostConfig, ImageStyle)> {
    let platform = parse_platform(&args.platform)?;
    let tone = parse_tone(&args.tone)?;
    let (topic, custom_topic) = parse_topic(args.topic.as_deref());
    let style = ImageStyle::parse_or_default(&args.image_style);

    let config = PostConfig::builder()
        .platform(platform)
        .topic(topic)
        .custom_topic(custom_topic)
        .tone(tone)
        .image_style(style)
        .include_emoji(!args.no_emoji)
        .include_hashtags(!args.no_hashtags)
        .include_prompt_chaining(args.prompt_chaining)
        .include_cta(args.cta)
        .comparison_format(args.comparison)
        .tldr_summary(args.tldr)
        .include_future_outlook(args.future_outlook)
        .include_devils_advocate(args.devils_advocate)
        .include_implementation_steps(args.implementation_steps)
        .build()
        .map_err(|e| ConfigError::new(e.to_string()))?;

    Ok((config, style))
}

/// Handle `postwright generate`.
pub async fn run_generate(args: GenerateArgs) -> PostwrightResult<()> {
    let (config, style) = build_config(&args)?;

    let client = Arc::new(GeminiClient::new()?);
    let studio = Studio::new(client.clone(), client.clone(), client);

    let composition = studio.compose(&config, style).await?;
    let post = &composition.post;

    info!(
        angle = %post.content_angle,
        sources = post.sources.len(),
        has_image = post.image_url.is_some(),
        "post generated"
    );

    match &args.out {
        Some(path) => {
            write_post(path, post)?;
            println!("Wrote {}", path.display());
        }
        None => {
            let raw = serde_json::to_string_pretty(post)
                .map_err(|e| StorageError::new(StorageErrorKind::Serde(e.to_string())))?;
            println!("{raw}");
        }
    }
    Ok(())
}

/// Handle `postwright rewrite`.
pub async fn run_rewrite(args: RewriteArgs) -> PostwrightResult<()> {
    let platform = parse_platform(&args.platform)?;
    let mut post = read_post(&args.file)?;

    let client = GeminiClient::new()?;
    // On failure the file is left exactly as it was.
    let rewritten = client.rewrite(&post.content, platform, &args.audience).await?;
    post.replace_content(rewritten);

    write_post(&args.file, &post)?;
    println!("Rewrote {} for '{}'", args.file.display(), args.audience);
    Ok(())
}

/// Handle `postwright schedule`.
pub fn run_schedule(args: ScheduleArgs) -> PostwrightResult<()> {
    let mut post = read_post(&args.file)?;

    let when: DateTime<Utc> = DateTime::parse_from_rfc3339(&args.at)
        .map_err(|e| ConfigError::new(format!("invalid --at time '{}': {e}", args.at)))?
        .with_timezone(&Utc);

    schedule(&mut post, when)?;
    write_post(&args.file, &post)?;
    println!("Scheduled {} for {}", args.file.display(), args.at);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_names_parse_case_insensitively() {
        assert_eq!(parse_platform("LinkedIn").unwrap(), Platform::LinkedIn);
        assert_eq!(parse_platform("twitter").unwrap(), Platform::X);
        assert!(parse_platform("myspace").is_err());
    }

    #[test]
    fn tone_accepts_variant_or_label() {
        assert_eq!(parse_tone("educational").unwrap(), Tone::Educational);
        assert_eq!(parse_tone("Practitioner").unwrap(), Tone::Educational);
        assert_eq!(parse_tone("contrarian").unwrap(), Tone::Controversial);
        assert!(parse_tone("sarcastic").is_err());
    }

    #[test]
    fn preset_topic_names_are_recognized() {
        let (topic, custom) = parse_topic(Some("Predictive Forecasting"));
        assert_eq!(topic, Topic::PredictiveForecasting);
        assert!(custom.is_empty());
    }

    #[test]
    fn free_text_becomes_a_custom_topic() {
        let (topic, custom) = parse_topic(Some("RAG evaluation pitfalls"));
        assert_eq!(topic, Topic::Custom);
        assert_eq!(custom, "RAG evaluation pitfalls");
    }

    #[test]
    fn missing_topic_falls_back_to_the_default() {
        let (topic, custom) = parse_topic(None);
        assert_eq!(topic, Topic::AutonomousDataAgents);
        assert!(custom.is_empty());
    }
}
