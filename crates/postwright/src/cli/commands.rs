//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Postwright - AI-assisted social post studio
#[derive(Parser, Debug)]
#[command(name = "postwright")]
#[command(about = "Generate, rewrite, and publish social posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a post with grounded text and an illustration
    Generate(GenerateArgs),

    /// Rewrite a saved post for a different audience
    Rewrite(RewriteArgs),

    /// Mark a saved post as scheduled for a future time
    Schedule(ScheduleArgs),

    /// Publish a saved post
    Publish(PublishArgs),

    /// Connect and list the Facebook Pages available for publishing
    Pages(PagesArgs),
}

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Target platform (linkedin, x, instagram, facebook, medium)
    #[arg(long, default_value = "linkedin")]
    pub platform: String,

    /// Topic: a preset name, or free text for a custom topic
    #[arg(long)]
    pub topic: Option<String>,

    /// Tone of voice (practitioner, visionary, executive, contrarian,
    /// builder, realist, architect)
    #[arg(long, default_value = "practitioner")]
    pub tone: String,

    /// Image style (minimalist, photorealistic, watercolor, ...)
    #[arg(long, default_value = "minimalist")]
    pub image_style: String,

    /// Skip emoji
    #[arg(long)]
    pub no_emoji: bool,

    /// Skip hashtags
    #[arg(long)]
    pub no_hashtags: bool,

    /// Include a prompt-chaining walkthrough
    #[arg(long)]
    pub prompt_chaining: bool,

    /// End with a call to action
    #[arg(long)]
    pub cta: bool,

    /// Structure as an old-way vs new-way comparison
    #[arg(long)]
    pub comparison: bool,

    /// Open with a TL;DR line
    #[arg(long)]
    pub tldr: bool,

    /// Close with a future outlook
    #[arg(long)]
    pub future_outlook: bool,

    /// Include a devil's-advocate caveat
    #[arg(long)]
    pub devils_advocate: bool,

    /// Include concrete implementation steps
    #[arg(long)]
    pub implementation_steps: bool,

    /// Write the post JSON here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for `rewrite`.
#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Path to a post JSON produced by `generate`
    #[arg(long)]
    pub file: PathBuf,

    /// Target platform for length and format rules
    #[arg(long, default_value = "linkedin")]
    pub platform: String,

    /// Audience to rewrite for, e.g. "startup founders"
    #[arg(long)]
    pub audience: String,
}

/// Arguments for `schedule`.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Path to a post JSON produced by `generate`
    #[arg(long)]
    pub file: PathBuf,

    /// Schedule time, RFC 3339 (e.g. 2026-09-01T09:00:00Z)
    #[arg(long)]
    pub at: String,
}

/// Arguments for `publish`.
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Path to a post JSON produced by `generate`
    #[arg(long)]
    pub file: PathBuf,

    /// Target platform
    #[arg(long, default_value = "facebook")]
    pub platform: String,

    /// Facebook App ID; cached for later runs
    #[arg(long)]
    pub app_id: Option<String>,

    /// Publish to this page id instead of the remembered/first page
    #[arg(long)]
    pub page: Option<String>,

    /// Force the manual compose flow and remember the choice
    #[arg(long)]
    pub manual: bool,
}

/// Arguments for `pages`.
#[derive(Args, Debug)]
pub struct PagesArgs {
    /// Facebook App ID; cached for later runs
    #[arg(long)]
    pub app_id: Option<String>,
}
