//! Per-card feedback forms.
//!
//! A target has either no form or exactly one open form holding a sentiment
//! and a draft. Forms are never persisted: submitting hands a
//! [`FeedbackRecord`] to the sink and removes the form.

use crate::model::FeedbackTarget;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Direction of a feedback submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }

    /// Button label for this sentiment on the given kind of card.
    #[must_use]
    pub const fn label(&self, target: &FeedbackTarget) -> &'static str {
        match (target, self) {
            (FeedbackTarget::Insight(_), Self::Positive) => "Looks good",
            (FeedbackTarget::Insight(_), Self::Negative) => "Needs follow-up",
            (FeedbackTarget::Macro(_), Self::Positive) => "Greenlight",
            (FeedbackTarget::Macro(_), Self::Negative) => "Block / revisit",
        }
    }

    /// Placeholder prompt shown in an empty draft.
    #[must_use]
    pub const fn prompt(&self, target: &FeedbackTarget) -> &'static str {
        match (target, self) {
            (FeedbackTarget::Insight(_), Self::Positive) => {
                "Share why this holds up and the next action you suggest."
            }
            (FeedbackTarget::Insight(_), Self::Negative) => {
                "Point out the risk or gap so we can prioritize fixes."
            }
            (FeedbackTarget::Macro(_), Self::Positive) => {
                "Share why this initiative gets a green light and list the next moves."
            }
            (FeedbackTarget::Macro(_), Self::Negative) => {
                "Log objections, redlines, and the actions needed before this can ship."
            }
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An open feedback form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    pub sentiment: Sentiment,
    pub draft: String,
}

impl FeedbackForm {
    fn new(sentiment: Sentiment) -> Self {
        Self {
            sentiment,
            draft: String::new(),
        }
    }

    /// Whether the draft has any non-whitespace content.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.draft.trim().is_empty()
    }
}

/// A submitted piece of feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRecord {
    pub target: FeedbackTarget,
    pub title: String,
    pub sentiment: Sentiment,
    pub text: String,
}

/// All open feedback forms, in the order they were opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForms {
    forms: IndexMap<FeedbackTarget, FeedbackForm>,
}

impl FeedbackForms {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, target: &FeedbackTarget) -> Option<&FeedbackForm> {
        self.forms.get(target)
    }

    #[must_use]
    pub fn is_open(&self, target: &FeedbackTarget) -> bool {
        self.forms.contains_key(target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FeedbackTarget, &FeedbackForm)> {
        self.forms.iter()
    }

    /// Open, switch, or close a form.
    ///
    /// No form opens one with an empty draft; the same sentiment closes it;
    /// the other sentiment switches and discards the draft.
    pub fn toggle(&mut self, target: FeedbackTarget, sentiment: Sentiment) {
        let current = self.forms.get(&target).map(|f| f.sentiment);
        if current == Some(sentiment) {
            self.forms.shift_remove(&target);
        } else {
            // Replacing in place keeps the original open order
            self.forms.insert(target, FeedbackForm::new(sentiment));
        }
    }

    /// Replace the draft of an open form. Returns `false` if none is open.
    pub fn set_draft(&mut self, target: &FeedbackTarget, text: impl Into<String>) -> bool {
        match self.forms.get_mut(target) {
            Some(form) => {
                form.draft = text.into();
                true
            }
            None => false,
        }
    }

    /// Take the form for submission if its draft is non-blank.
    ///
    /// A blank draft leaves the form open.
    pub fn take_submittable(&mut self, target: &FeedbackTarget) -> Option<FeedbackForm> {
        if self.forms.get(target).is_some_and(FeedbackForm::is_submittable) {
            self.forms.shift_remove(target)
        } else {
            None
        }
    }

    /// Close a form without submitting.
    pub fn close(&mut self, target: &FeedbackTarget) -> bool {
        self.forms.shift_remove(target).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InsightId, MacroInsightId};

    const T: FeedbackTarget = FeedbackTarget::Insight(InsightId(1));

    #[test]
    fn test_toggle_opens_switches_and_closes() {
        let mut forms = FeedbackForms::new();

        forms.toggle(T, Sentiment::Positive);
        assert_eq!(forms.get(&T).map(|f| f.sentiment), Some(Sentiment::Positive));
        assert_eq!(forms.get(&T).map(|f| f.draft.as_str()), Some(""));

        forms.set_draft(&T, "solid");
        forms.toggle(T, Sentiment::Negative);
        let form = forms.get(&T).unwrap();
        assert_eq!(form.sentiment, Sentiment::Negative);
        assert!(form.draft.is_empty());

        forms.toggle(T, Sentiment::Negative);
        assert!(!forms.is_open(&T));
    }

    #[test]
    fn test_blank_draft_is_not_taken() {
        let mut forms = FeedbackForms::new();
        forms.toggle(T, Sentiment::Positive);
        forms.set_draft(&T, "  \n\t ");
        assert!(forms.take_submittable(&T).is_none());
        assert!(forms.is_open(&T));

        forms.set_draft(&T, "ship it");
        let form = forms.take_submittable(&T).unwrap();
        assert_eq!(form.draft, "ship it");
        assert!(forms.is_empty());
    }

    #[test]
    fn test_set_draft_requires_open_form() {
        let mut forms = FeedbackForms::new();
        assert!(!forms.set_draft(&T, "orphan"));
        assert!(forms.is_empty());
    }

    #[test]
    fn test_forms_keep_open_order() {
        let mut forms = FeedbackForms::new();
        let m = FeedbackTarget::Macro(MacroInsightId(1));
        forms.toggle(m, Sentiment::Negative);
        forms.toggle(T, Sentiment::Positive);
        let order: Vec<_> = forms.iter().map(|(t, _)| *t).collect();
        assert_eq!(order, vec![m, T]);
    }

    #[test]
    fn test_labels_depend_on_card_kind() {
        let m = FeedbackTarget::Macro(MacroInsightId(2));
        assert_eq!(Sentiment::Positive.label(&T), "Looks good");
        assert_eq!(Sentiment::Negative.label(&m), "Block / revisit");
        assert!(Sentiment::Negative.prompt(&T).starts_with("Point out"));
    }
}
