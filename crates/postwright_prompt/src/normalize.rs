//! Post-decode normalization of hashtags and grounding sources.

use postwright_core::{GroundingSource, Platform};
use std::collections::HashSet;

/// Normalize hashtags so each starts with exactly one `#`.
///
/// Blank tags are dropped; order is preserved.
pub fn normalize_hashtags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .filter_map(|tag| {
            let bare = tag.trim().trim_start_matches('#');
            if bare.is_empty() {
                None
            } else {
                Some(format!("#{bare}"))
            }
        })
        .collect()
}

/// Append a normalized tag block to the content, when the platform's
/// format convention allows trailing tags.
///
/// The exclusion is read from the platform profile rather than
/// hard-coded, so the policy cannot drift between call sites.
pub fn append_hashtag_block(content: &str, normalized_tags: &[String], platform: Platform) -> String {
    if normalized_tags.is_empty() || !platform.profile().append_hashtags {
        return content.to_string();
    }
    format!("{content}\n\n{}", normalized_tags.join(" "))
}

/// Drop grounding references with a repeated URI, keeping the first
/// occurrence.
pub fn dedup_sources(sources: Vec<GroundingSource>) -> Vec<GroundingSource> {
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .filter(|source| seen.insert(source.uri.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(title: &str, uri: &str) -> GroundingSource {
        GroundingSource {
            title: Some(title.to_string()),
            uri: uri.to_string(),
        }
    }

    #[test]
    fn every_tag_gets_exactly_one_hash() {
        let tags = vec!["ai".to_string(), "#ml".to_string(), "##rag".to_string()];
        assert_eq!(normalize_hashtags(&tags), vec!["#ai", "#ml", "#rag"]);
    }

    #[test]
    fn blank_tags_are_dropped() {
        let tags = vec!["".to_string(), "  ".to_string(), "#".to_string(), "ok".to_string()];
        assert_eq!(normalize_hashtags(&tags), vec!["#ok"]);
    }

    #[test]
    fn tag_block_is_separated_by_a_blank_line() {
        let tags = vec!["#ai".to_string(), "#data".to_string()];
        let out = append_hashtag_block("body", &tags, Platform::LinkedIn);
        assert_eq!(out, "body\n\n#ai #data");
    }

    #[test]
    fn medium_never_gets_a_tag_block() {
        let tags = vec!["#ai".to_string()];
        assert_eq!(append_hashtag_block("body", &tags, Platform::Medium), "body");
    }

    #[test]
    fn empty_tags_leave_content_untouched() {
        assert_eq!(append_hashtag_block("body", &[], Platform::X), "body");
    }

    #[test]
    fn duplicate_uris_keep_first_occurrence() {
        let sources = vec![
            source("First title", "https://a.example"),
            source("Second title", "https://a.example"),
            source("Other", "https://b.example"),
        ];
        let unique = dedup_sources(sources);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].title.as_deref(), Some("First title"));
        assert_eq!(unique[1].uri, "https://b.example");
    }
}
