//! Tone catalog.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Editorial register for the generated post.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display,
)]
pub enum Tone {
    /// Deep dive, technical accuracy, "how-to"
    Educational,
    /// Future trends, big picture impact
    Visionary,
    /// Clean, business-focused, ROI-centric
    Professional,
    /// Challenging hype, "hot takes"
    Controversial,
    /// Excited about shipping code and products
    Enthusiastic,
    /// Cutting through marketing fluff
    Skeptical,
    /// System design framing, trade-off analysis
    Architectural,
}

impl Tone {
    /// Short persona label shown in selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Educational => "Practitioner",
            Tone::Visionary => "Visionary",
            Tone::Professional => "Executive",
            Tone::Controversial => "Contrarian",
            Tone::Enthusiastic => "Builder",
            Tone::Skeptical => "Realist",
            Tone::Architectural => "Architect",
        }
    }

    /// One-line description of the register.
    pub fn description(&self) -> &'static str {
        match self {
            Tone::Educational => "Deep dive, technical accuracy, \"how-to\".",
            Tone::Visionary => "Future trends, big picture impact.",
            Tone::Professional => "Clean, business-focused, ROI-centric.",
            Tone::Controversial => "Challenging hype, \"hot takes\".",
            Tone::Enthusiastic => "Excited about shipping code/products.",
            Tone::Skeptical => "Cutting through marketing fluff.",
            Tone::Architectural => "System design framing, trade-off analysis.",
        }
    }
}
