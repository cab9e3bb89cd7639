//! Typed identifiers for dashboard records.
//!
//! Feedback drafts and notes are keyed by these ids rather than by display
//! titles, so two records sharing a title can never share a draft.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an operational [`Insight`](super::Insight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightId(pub u32);

/// Identifier of a strategic [`MacroInsight`](super::MacroInsight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacroInsightId(pub u32);

impl fmt::Display for InsightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insight-{}", self.0)
    }
}

impl fmt::Display for MacroInsightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "macro-{}", self.0)
    }
}

/// Anything a feedback form can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum FeedbackTarget {
    /// An opportunity/alert card on the trend analysis tab
    Insight(InsightId),
    /// A recommendation card on the strategic insights tab
    Macro(MacroInsightId),
}

impl FeedbackTarget {
    /// Namespace label used in logs ("trend" or "macro").
    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        match self {
            Self::Insight(_) => "trend",
            Self::Macro(_) => "macro",
        }
    }
}

impl fmt::Display for FeedbackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insight(id) => write!(f, "{id}"),
            Self::Macro(id) => write!(f, "{id}"),
        }
    }
}

impl From<InsightId> for FeedbackTarget {
    fn from(id: InsightId) -> Self {
        Self::Insight(id)
    }
}

impl From<MacroInsightId> for FeedbackTarget {
    fn from(id: MacroInsightId) -> Self {
        Self::Macro(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_with_same_number_are_distinct() {
        let a = FeedbackTarget::from(InsightId(1));
        let b = FeedbackTarget::from(MacroInsightId(1));
        assert_ne!(a, b);
        assert_eq!(a.namespace(), "trend");
        assert_eq!(b.namespace(), "macro");
    }

    #[test]
    fn target_serializes_with_kind_tag() {
        let json = serde_json::to_string(&FeedbackTarget::Macro(MacroInsightId(3))).unwrap();
        assert_eq!(json, r#"{"kind":"macro","id":3}"#);
    }
}
