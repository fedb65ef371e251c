//! Review workflow phases

use serde::{Deserialize, Serialize};

/// The current phase of the keyword review workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReviewPhase {
    /// No extraction has run yet
    #[default]
    Empty,
    /// Keywords extracted and awaiting review
    Analyzed,
    /// Keywords approved by the user
    Approved,
    /// Keywords rejected, feedback recorded for regeneration
    Rejected,
    /// User-edited keywords staged in the feedback
    Editing,
    /// Approved and ranked results available for display
    Complete,
}

impl ReviewPhase {
    /// Check whether a transition to the given phase is allowed
    ///
    /// Re-analysis returns to `Analyzed` from any phase. The three review
    /// actions are allowed whenever keywords are on display, so repeated
    /// actions (approve twice, reject after edit) stay valid.
    pub fn can_transition_to(self, next: ReviewPhase) -> bool {
        use ReviewPhase::*;
        match next {
            Empty => false,
            Analyzed => true,
            Approved | Rejected | Editing => !matches!(self, Empty),
            Complete => matches!(self, Approved | Complete),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ReviewPhase::Empty => "Awaiting patent idea",
            ReviewPhase::Analyzed => "Keywords extracted, awaiting review",
            ReviewPhase::Approved => "Keywords approved",
            ReviewPhase::Rejected => "Keywords rejected, awaiting regeneration",
            ReviewPhase::Editing => "Edited keywords staged",
            ReviewPhase::Complete => "Search results available",
        }
    }
}

impl std::fmt::Display for ReviewPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
