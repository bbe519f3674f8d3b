//! Configuration to prompt mapping.

use postwright_core::{Platform, PostConfig};

/// Words the model is told never to use.
pub const FORBIDDEN_VOCABULARY: &[&str] = &[
    "delve",
    "tapestry",
    "landscape",
    "game-changer",
    "unleash",
    "realm",
    "bustling",
    "ever-evolving",
    "poised to",
    "paramount",
];

/// Sampling temperature for post generation. Biased toward creative
/// phrasing; fixed, not user-configurable.
const GENERATION_TEMPERATURE: f32 = 0.85;

/// A fully built generation request, ready for the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    /// Persona, style rules, and forbidden vocabulary
    pub system_instruction: String,
    /// The task prompt, including platform strategy and modifiers
    pub user_prompt: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Whether the search/grounding tool is enabled
    pub use_search: bool,
}

/// Conditional instruction fragments, evaluated in fixed declaration
/// order. Modifiers are independent and compose by concatenation.
const DIRECTIVES: &[(fn(&PostConfig) -> bool, &str)] = &[
    (|c| *c.include_emoji(), "Use emojis naturally (not spammy)."),
    (|c| !*c.include_emoji(), "NO emojis."),
    (
        |c| *c.include_hashtags(),
        "Suggest 3-5 relevant hashtags in the JSON hashtags field.",
    ),
    (
        |c| *c.include_prompt_chaining(),
        "Include a \"Prompt Chain\" example: a sequence of 2 linked prompts solving a specific task.",
    ),
    (
        |c| *c.include_cta(),
        "End with a clear call to action inviting readers to try one concrete thing.",
    ),
    (
        |c| *c.comparison_format(),
        "Structure the body as a direct comparison: the old way vs the new way, with a verdict.",
    ),
    (
        |c| *c.tldr_summary(),
        "Open with a one-line TL;DR stating the takeaway.",
    ),
    (
        |c| *c.include_future_outlook(),
        "Close with a short outlook: what changes about this in the next 12 months.",
    ),
    (
        |c| *c.include_devils_advocate(),
        "Add a devil's advocate paragraph arguing against your own main claim.",
    ),
    (
        |c| *c.include_implementation_steps(),
        "Include 3-5 numbered implementation steps a team could follow this week.",
    ),
];

fn system_instruction() -> String {
    let banned = FORBIDDEN_VOCABULARY
        .iter()
        .map(|w| format!("\"{w}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are an expert AI Engineer and Researcher with 10+ years of experience.\n\
         You write social media content that is researched, factual, and strictly \"Human-Mode\".\n\
         \n\
         CRITICAL STYLE RULES (STRICT ENFORCEMENT):\n\
         1. NO AI-SPEAK: Banned words include {banned}.\n\
         2. TONE: Write like a senior engineer or founder talking to peers. Be conversational but dense with value.\n\
         3. STRUCTURE: Use short paragraphs. Use bullet points for density.\n\
         4. OPINION: Don't just summarize; add a perspective. Is this useful? Is it hype?\n\
         \n\
         Your process:\n\
         1. RESEARCH: Use web search to find specific, real-world papers, repos, or news from the last 7 days.\n\
         2. SYNTHESIZE: Extract the \"so what?\" - why does this matter to engineers or business leaders?\n\
         3. WRITE: Draft the content for the specific platform format."
    )
}

/// Build the generation prompt for a configuration.
///
/// Pure function, no I/O. Callers validate the configuration first; a
/// custom topic with blank text must never reach this point (the
/// generation client refuses an empty effective topic regardless).
pub fn build_prompt(config: &PostConfig) -> PromptSpec {
    let topic = config.effective_topic();
    let platform = config.platform();
    let profile = platform.profile();

    let directives = DIRECTIVES
        .iter()
        .filter(|(active, _)| active(config))
        .map(|(_, fragment)| format!("    -   {fragment}"))
        .collect::<Vec<_>>()
        .join("\n");

    let user_prompt = format!(
        "TASK: Perform DEEP RESEARCH and write a viral, high-engagement {platform} post about \"{topic}\".\n\
         \n\
         STEP 1: DEEP WEB SEARCH (MANDATORY)\n\
         Use web search to find 3 distinct types of information from the last 2 weeks:\n\
         1.  **Hard Data**: A specific benchmark, cost metric, latency number, or financial figure.\n\
         2.  **Industry News**: A recent article from a major tech publication or a top engineering blog.\n\
         3.  **Community Pulse**: A controversial opinion or debate currently happening in the AI community.\n\
         \n\
         *Constraint*: Do not just invent facts. Find real ones.\n\
         \n\
         STEP 2: SYNTHESIS & ANGLE\n\
         Identify the \"So What?\". Why does this matter to an engineer or business leader right now?\n\
         Select an angle: {tone}.\n\
         \n\
         STEP 3: WRITE POST (HUMAN-MODE)\n\
         -   **Hook**: Start with a \"Pattern Interrupt\" - a surprising fact, a contrarian statement, or a \"Stop doing this\" command.\n\
         -   **Body**: Deliver the insight found in Step 1. Be specific. Use numbers.\n\
         -   **Formatting**: Use line breaks, bullet points, and bold text to make it skimmable.\n\
         -   **Interactive Ending**: Ask a specific question based on the content to drive comments.\n\
         -   **Style**: {style}\n\
         -   **Constraints**: {constraint} Sweet spot: {sweet_spot}.\n\
         {directives}\n\
         \n\
         STEP 4: FORMAT OUTPUT\n\
         Return a valid JSON object with these keys:\n\
         {{\n\
           \"researchSummary\": \"A concise summary of the specific papers, articles, or data points you found. Mention the source names.\",\n\
           \"contentAngle\": \"The specific angle taken (e.g., 'Cost Analysis', 'Architecture Deep Dive').\",\n\
           \"postContent\": \"The actual social media post text, formatted with Markdown.\",\n\
           \"hashtags\": [\"tag1\", \"tag2\"]\n\
         }}",
        tone = config.tone(),
        style = profile.voice,
        constraint = profile.constraint,
        sweet_spot = profile.sweet_spot,
    );

    PromptSpec {
        system_instruction: system_instruction(),
        user_prompt,
        temperature: GENERATION_TEMPERATURE,
        use_search: true,
    }
}

/// Build the single-shot rewrite prompt.
///
/// Raw text in, raw text out: the response is used verbatim as the new
/// post body, so the prompt forbids any wrapper commentary.
pub fn build_rewrite_prompt(content: &str, platform: Platform, audience: &str) -> PromptSpec {
    let banned = FORBIDDEN_VOCABULARY.join(", ");

    let user_prompt = format!(
        "Rewrite the following {platform} post for a more {audience} audience.\n\
         \n\
         Rules:\n\
         - Preserve every factual claim, number, and source mention from the original.\n\
         - Keep the platform format and roughly the same length.\n\
         - Never use these words: {banned}.\n\
         - Return ONLY the rewritten post text. No preamble, no commentary, no code fences.\n\
         \n\
         Original post:\n\
         {content}"
    );

    PromptSpec {
        system_instruction: system_instruction(),
        user_prompt,
        temperature: GENERATION_TEMPERATURE,
        use_search: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postwright_core::{Topic, Tone};

    #[test]
    fn effective_topic_flows_into_prompt() {
        let config = PostConfig::builder()
            .topic(Topic::Custom)
            .custom_topic("prompt caching economics".to_string())
            .build()
            .unwrap();
        let spec = build_prompt(&config);
        assert!(spec.user_prompt.contains("prompt caching economics"));
        assert!(!spec.user_prompt.contains("\"Custom\""));
    }

    #[test]
    fn platform_strategy_comes_from_the_profile_table() {
        let config = PostConfig::builder().platform(Platform::X).build().unwrap();
        let spec = build_prompt(&config);
        assert!(spec.user_prompt.contains("under 280 characters"));
        assert!(spec.user_prompt.contains("Viral one-liner"));
    }

    #[test]
    fn emoji_modifier_has_an_explicit_off_fragment() {
        let with = PostConfig::builder().include_emoji(true).build().unwrap();
        let without = PostConfig::builder().include_emoji(false).build().unwrap();
        assert!(build_prompt(&with).user_prompt.contains("Use emojis naturally"));
        assert!(build_prompt(&without).user_prompt.contains("NO emojis."));
    }

    #[test]
    fn modifiers_compose_in_declaration_order() {
        let config = PostConfig::builder()
            .tldr_summary(true)
            .include_devils_advocate(true)
            .build()
            .unwrap();
        let prompt = build_prompt(&config).user_prompt;
        let tldr = prompt.find("TL;DR").unwrap();
        let devil = prompt.find("devil's advocate").unwrap();
        assert!(tldr < devil);
    }

    #[test]
    fn generation_requests_search_and_fixed_temperature() {
        let spec = build_prompt(&PostConfig::default());
        assert!(spec.use_search);
        assert_eq!(spec.temperature, 0.85);
        assert!(spec.user_prompt.contains("researchSummary"));
        assert!(spec.user_prompt.contains("postContent"));
    }

    #[test]
    fn rewrite_prompt_is_plain_text_without_search() {
        let spec = build_rewrite_prompt("Original body", Platform::LinkedIn, "Technical");
        assert!(!spec.use_search);
        assert!(spec.user_prompt.contains("Original body"));
        assert!(spec.user_prompt.contains("Technical"));
        assert!(spec.user_prompt.contains("Preserve every factual claim"));
    }

    #[test]
    fn tone_selects_the_angle() {
        let config = PostConfig::builder().tone(Tone::Controversial).build().unwrap();
        assert!(build_prompt(&config).user_prompt.contains("Controversial"));
    }
}
