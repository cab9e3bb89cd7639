//! Slide-over assistant panels.

use crate::analysis::DirectionalSummary;

/// Progress of a root-cause request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RcaPhase {
    /// Waiting for the user to type and generate
    #[default]
    Input,
    /// Generated, waiting for the reveal delay to pass
    Pending { query: String },
    /// Result on screen
    Ready(DirectionalSummary),
}

/// Root-cause analysis panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RcaPanel {
    pub open: bool,
    pub query: String,
    pub phase: RcaPhase,
}

impl RcaPanel {
    #[must_use]
    pub fn summary(&self) -> Option<&DirectionalSummary> {
        match &self.phase {
            RcaPhase::Ready(summary) => Some(summary),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.phase, RcaPhase::Pending { .. })
    }

    /// Clear both the query and any result.
    pub fn reset(&mut self) {
        self.query.clear();
        self.phase = RcaPhase::Input;
    }
}

/// Funnel-stage assistant panel; open while a stage is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FunnelPanel {
    pub selected: Option<usize>,
}

impl FunnelPanel {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
