//! The manual compose fallback.
//!
//! Copy the text, download the image when there is one, open the
//! platform's composer. The actions themselves (clipboard, file save,
//! browser) are a seam the embedding UI provides.

use postwright_core::{GeneratedPost, Platform};
use postwright_error::PostwrightResult;
use tracing::info;

/// Suggested filename for a downloaded post image.
const IMAGE_FILENAME: &str = "postwright-image.png";

/// UI-side actions the manual flow delegates to.
pub trait ComposeActions: Send + Sync {
    /// Put `text` on the clipboard.
    fn copy_text(&self, text: &str) -> PostwrightResult<()>;

    /// Save the image (a URL or `data:` URI) under `filename`.
    fn download_image(&self, image: &str, filename: &str) -> PostwrightResult<()>;

    /// Open `url` in the user's browser.
    fn open_url(&self, url: &str) -> PostwrightResult<()>;
}

/// The composer URL for a platform, with the post text pre-filled where
/// the platform's composer accepts it.
pub fn compose_url(platform: Platform, text: &str) -> String {
    let profile = platform.profile();
    if !profile.compose_accepts_text {
        return profile.compose_base.to_string();
    }
    let separator = if profile.compose_base.contains('?') {
        '&'
    } else {
        '?'
    };
    format!(
        "{}{}text={}",
        profile.compose_base,
        separator,
        urlencoding::encode(text)
    )
}

/// Run the manual flow for `post` on `platform`.
///
/// Makes no platform network calls; the sequence is copy, download
/// (when an image exists), open.
pub fn manual_publish(
    actions: &dyn ComposeActions,
    platform: Platform,
    post: &GeneratedPost,
) -> PostwrightResult<()> {
    actions.copy_text(&post.content)?;
    if let Some(image) = &post.image_url {
        actions.download_image(image, IMAGE_FILENAME)?;
    }
    actions.open_url(&compose_url(platform, &post.content))?;
    info!(platform = %platform, "manual compose flow completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linkedin_url_appends_text_to_existing_query() {
        let url = compose_url(Platform::LinkedIn, "hello world");
        assert_eq!(
            url,
            "https://www.linkedin.com/feed/?shareActive=true&text=hello%20world"
        );
    }

    #[test]
    fn x_url_starts_a_new_query() {
        let url = compose_url(Platform::X, "ship it & see");
        assert_eq!(url, "https://twitter.com/intent/tweet?text=ship%20it%20%26%20see");
    }

    #[test]
    fn platforms_without_prefill_get_the_bare_url() {
        assert_eq!(compose_url(Platform::Medium, "t"), "https://medium.com/new-story");
        assert_eq!(compose_url(Platform::Instagram, "t"), "https://www.instagram.com/");
        assert_eq!(compose_url(Platform::Facebook, "t"), "https://www.facebook.com/");
    }
}
