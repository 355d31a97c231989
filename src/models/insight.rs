//! Synthesized recommendations.

use serde::{Deserialize, Serialize};

/// Priority of a how-to-win call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InsightPriority {
    High,
    Medium,
    Situational,
}

impl std::fmt::Display for InsightPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightPriority::High => write!(f, "HIGH"),
            InsightPriority::Medium => write!(f, "MEDIUM"),
            InsightPriority::Situational => write!(f, "SITUATIONAL"),
        }
    }
}

/// A prioritized tactical recommendation with its supporting metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub priority: InsightPriority,
    pub recommendation: String,
    pub metric: String,
}

impl Insight {
    pub fn new(
        priority: InsightPriority,
        recommendation: impl Into<String>,
        metric: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            recommendation: recommendation.into(),
            metric: metric.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_serialization() {
        let insight = Insight::new(InsightPriority::Situational, "BAIT BARON.", "Opening.");
        let json = serde_json::to_value(&insight).unwrap();

        assert_eq!(json["priority"], "SITUATIONAL");
        assert_eq!(json["recommendation"], "BAIT BARON.");

        let back: Insight = serde_json::from_value(json).unwrap();
        assert_eq!(back, insight);
    }
}
