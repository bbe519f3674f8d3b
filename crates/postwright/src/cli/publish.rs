//! Publish and pages command handlers.

use crate::cli::commands::{PagesArgs, PublishArgs};
use crate::cli::generate::{parse_platform, read_post};
use base64::Engine;
use postwright_error::{PostwrightResult, StorageError, StorageErrorKind};
use postwright_publish::{
    ComposeActions, GraphSession, PublishOrchestrator, PublishOutcome,
};
use postwright_storage::{FileStore, Preferences};
use std::sync::Arc;
use tracing::info;

/// Terminal rendition of the compose seam: "copy" prints the text,
/// "download" decodes an inline image to a local file, "open" prints
/// the composer URL for the user to follow.
struct CliComposeActions;

impl ComposeActions for CliComposeActions {
    fn copy_text(&self, text: &str) -> PostwrightResult<()> {
        println!("--- post text (copy below) ---");
        println!("{text}");
        println!("------------------------------");
        Ok(())
    }

    fn download_image(&self, image: &str, filename: &str) -> PostwrightResult<()> {
        let Some(encoded) = image.split("base64,").nth(1) else {
            println!("Image: {image}");
            return Ok(());
        };
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| StorageError::new(StorageErrorKind::Serde(e.to_string())))?;
        std::fs::write(filename, bytes)
            .map_err(|e| StorageError::new(StorageErrorKind::Io(e.to_string())))?;
        println!("Saved image to {filename}");
        Ok(())
    }

    fn open_url(&self, url: &str) -> PostwrightResult<()> {
        println!("Open the composer: {url}");
        Ok(())
    }
}

fn orchestrator() -> PostwrightResult<PublishOrchestrator> {
    let store = FileStore::new()?;
    let preferences = Preferences::new(Arc::new(store));
    Ok(PublishOrchestrator::new(
        Arc::new(GraphSession::new()),
        preferences,
    ))
}

/// Handle `postwright publish`.
pub async fn run_publish(args: PublishArgs) -> PostwrightResult<()> {
    let platform = parse_platform(&args.platform)?;
    let post = read_post(&args.file)?;

    let mut orchestrator = orchestrator()?;
    if args.manual {
        orchestrator.set_manual_mode(true)?;
    }
    if let Some(app_id) = &args.app_id {
        orchestrator.set_app_id(app_id)?;
    }

    if platform.supports_direct_publish() && !orchestrator.manual_mode()? {
        orchestrator.connect().await?;
        info!(
            user = %orchestrator.user().map(|u| u.name.as_str()).unwrap_or("?"),
            pages = orchestrator.pages().len(),
            "connected"
        );
        if let Some(page) = &args.page {
            orchestrator.select_page(page)?;
        }
    }

    match orchestrator
        .publish_post(&post, platform, &CliComposeActions)
        .await?
    {
        PublishOutcome::Direct { post_id } => {
            println!("Published to Facebook: {post_id}");
        }
        PublishOutcome::Manual => {
            println!("Handed off to the {platform} composer.");
        }
    }
    Ok(())
}

/// Handle `postwright pages`.
pub async fn run_pages(args: PagesArgs) -> PostwrightResult<()> {
    let mut orchestrator = orchestrator()?;
    if let Some(app_id) = &args.app_id {
        orchestrator.set_app_id(app_id)?;
    }

    orchestrator.connect().await?;

    if let Some(user) = orchestrator.user() {
        println!("Connected as {} ({})", user.name, user.id);
    }
    if orchestrator.pages().is_empty() {
        println!("No pages available; the account administers no pages.");
        return Ok(());
    }

    let selected = orchestrator.selected_page().map(|p| p.id.clone());
    for page in orchestrator.pages() {
        let marker = if selected.as_deref() == Some(page.id.as_str()) {
            " (selected)"
        } else {
            ""
        };
        let category = page.category.as_deref().unwrap_or("-");
        println!("{}  {} [{category}]{marker}", page.id, page.name);
    }
    Ok(())
}
