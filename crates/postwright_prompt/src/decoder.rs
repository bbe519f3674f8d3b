//! Recovery of structured posts from unreliable model output.
//!
//! Models routinely wrap the requested JSON in commentary or code
//! fences, or return no JSON at all. [`decode`] is a small parser with
//! defined grammar tolerance and a guaranteed non-throwing contract:
//! for any input it returns a [`DecodedPost`] with all four fields
//! populated, falling back to the raw text as content when parsing
//! fails.

use serde::Deserialize;

/// Fallback research summary when the model output could not be parsed.
const PARSE_FALLBACK_SUMMARY: &str = "Could not parse research summary.";

/// Structured post recovered from model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPost {
    /// Synthesis of the research findings
    pub research_summary: String,
    /// Editorial angle label
    pub content_angle: String,
    /// Post body as returned by the model, before hashtag appending
    pub post_content: String,
    /// Raw hashtags, not yet normalized
    pub hashtags: Vec<String>,
}

/// Wire shape of the JSON object the prompt requests.
#[derive(Debug, Deserialize)]
struct WirePost {
    #[serde(rename = "researchSummary", default)]
    research_summary: String,
    #[serde(rename = "contentAngle", default = "default_angle")]
    content_angle: String,
    #[serde(rename = "postContent", default)]
    post_content: String,
    #[serde(default)]
    hashtags: Vec<String>,
}

fn default_angle() -> String {
    "General".to_string()
}

/// Decode raw model output into a structured post.
///
/// Extraction strategies, in order of preference:
/// 1. The inner content of a fenced code block tagged `json`.
/// 2. The substring from the first `{` to the last `}`, inclusive.
/// 3. On parse failure, a synthesized fallback: the raw text (with
///    fence markers stripped) becomes the content.
///
/// Never returns an error; the pipeline always yields a usable post.
pub fn decode(raw: &str) -> DecodedPost {
    let candidate = extract_candidate(raw);

    match serde_json::from_str::<WirePost>(candidate.trim()) {
        Ok(wire) => DecodedPost {
            research_summary: wire.research_summary,
            content_angle: wire.content_angle,
            post_content: wire.post_content,
            hashtags: wire.hashtags,
        },
        Err(_) => DecodedPost {
            research_summary: PARSE_FALLBACK_SUMMARY.to_string(),
            content_angle: default_angle(),
            post_content: strip_fences(raw),
            hashtags: Vec::new(),
        },
    }
}

/// Pick the most promising JSON substring from free-form output.
fn extract_candidate(raw: &str) -> &str {
    if let Some(inner) = fenced_json_block(raw) {
        return inner;
    }
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}'))
        && start < end
    {
        return &raw[start..=end];
    }
    raw
}

/// The inner content of the first ```json fenced block, if any.
fn fenced_json_block(raw: &str) -> Option<&str> {
    let open = raw.find("```json")?;
    let body = &raw[open + "```json".len()..];
    let close = body.find("```")?;
    Some(&body[..close])
}

/// Strip code-fence markers for the fallback content path.
fn strip_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{"researchSummary":"s","contentAngle":"a","postContent":"p","hashtags":["ai"]}"#;

    #[test]
    fn fenced_and_unfenced_json_decode_identically() {
        let fenced = format!("here you go:\n```json\n{WELL_FORMED}\n```");
        assert_eq!(decode(&fenced), decode(WELL_FORMED));
    }

    #[test]
    fn prose_around_bare_json_is_tolerated() {
        let wrapped = format!("Sure! Here's the post:\n{WELL_FORMED}\nHope that helps.");
        let decoded = decode(&wrapped);
        assert_eq!(decoded.post_content, "p");
        assert_eq!(decoded.hashtags, vec!["ai"]);
    }

    #[test]
    fn non_json_falls_back_to_raw_text() {
        let decoded = decode("not json at all");
        assert_eq!(decoded.post_content, "not json at all");
        assert_eq!(decoded.research_summary, PARSE_FALLBACK_SUMMARY);
        assert_eq!(decoded.content_angle, "General");
        assert!(decoded.hashtags.is_empty());
    }

    #[test]
    fn empty_input_yields_a_complete_fallback() {
        let decoded = decode("");
        assert_eq!(decoded.post_content, "");
        assert_eq!(decoded.content_angle, "General");
    }

    #[test]
    fn empty_object_decodes_with_defaults() {
        let decoded = decode("{}");
        assert_eq!(decoded.content_angle, "General");
        assert_eq!(decoded.post_content, "");
        assert!(decoded.hashtags.is_empty());
    }

    #[test]
    fn truncated_json_does_not_panic() {
        let decoded = decode(r#"{"researchSummary":"s","postCont"#);
        assert_eq!(decoded.research_summary, PARSE_FALLBACK_SUMMARY);
    }

    #[test]
    fn fallback_strips_fence_markers() {
        let decoded = decode("```json\nnot actually json\n```");
        assert_eq!(decoded.post_content, "not actually json");
    }
}
