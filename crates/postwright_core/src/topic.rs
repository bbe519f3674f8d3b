//! Topic catalog.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Fixed topic catalog, plus a sentinel for user-supplied topics.
///
/// When [`Topic::Custom`] is selected the free-text topic on the
/// configuration must be non-empty before a request is valid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display,
)]
pub enum Topic {
    /// Forecasting future metrics from historical data
    #[display("Predictive Forecasting")]
    PredictiveForecasting,
    /// Conversational BI interfaces over live data
    #[display("Generative BI & Chat-with-Data")]
    GenerativeBi,
    /// Agents that explore and act on data autonomously
    #[display("Autonomous Data Agents")]
    AutonomousDataAgents,
    /// Streaming detection of outliers and drift
    #[display("Real-time Anomaly Detection")]
    RealTimeAnomalyDetection,
    /// Modeling customer intent from behavioral signals
    #[display("Customer Intent Analytics")]
    CustomerIntentAnalytics,
    /// Machine-written summaries of analytical findings
    #[display("Automated Insight Synthesis")]
    AutomatedInsightSynthesis,
    /// Privacy-preserving analytics practice
    #[display("Data Privacy in Analytics")]
    DataPrivacyInAnalytics,
    /// User-supplied topic; requires free text on the configuration
    #[display("Custom")]
    Custom,
}

impl Topic {
    /// True when this topic requires user-supplied text.
    pub fn is_custom(&self) -> bool {
        matches!(self, Topic::Custom)
    }
}
