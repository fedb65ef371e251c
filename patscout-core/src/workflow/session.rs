//! Per-session review workflow controller
//!
//! A [`ReviewSession`] owns all state for one user's approval loop. It is
//! created on first interaction and discarded with the hosting session;
//! nothing is persisted. Each operation takes `&mut self`, so a session is
//! logically single-threaded and never shared across users.

use std::collections::HashMap;

use crate::concept::{
    ConceptMatrix, ExtractionState, FeedbackAction, SearchResult, SeedKeywords,
};
use crate::extract::Extractor;
use crate::keywords::parse_keyword_edits;
use crate::render;
use crate::workflow::ReviewPhase;
use crate::{Error, Result};

/// Session state for the keyword review workflow
#[derive(Debug, Default)]
pub struct ReviewSession {
    /// Last full extraction payload
    current_state: Option<ExtractionState>,
    /// Concept matrix from the last extraction
    concept_matrix: Option<ConceptMatrix>,
    /// Seed keywords from the last extraction
    seed_keywords: Option<SeedKeywords>,
    /// Whether the user has approved the current keywords
    keywords_approved: bool,
    /// Latest feedback action taken by the user
    feedback: Option<FeedbackAction>,
    /// Replacement keywords staged by an edit action
    edited_keywords: Option<SeedKeywords>,
    /// Current workflow phase
    phase: ReviewPhase,
}

impl ReviewSession {
    /// Create a new empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current workflow phase
    pub fn phase(&self) -> ReviewPhase {
        self.phase
    }

    /// Get the concept matrix, if an extraction has run
    pub fn concept_matrix(&self) -> Option<&ConceptMatrix> {
        self.concept_matrix.as_ref()
    }

    /// Get the seed keywords, if an extraction has run
    pub fn seed_keywords(&self) -> Option<&SeedKeywords> {
        self.seed_keywords.as_ref()
    }

    /// Whether the current keywords have been approved
    pub fn keywords_approved(&self) -> bool {
        self.keywords_approved
    }

    /// Get the latest feedback action
    pub fn feedback(&self) -> Option<&FeedbackAction> {
        self.feedback.as_ref()
    }

    /// Get the staged keyword edits, if any
    pub fn edited_keywords(&self) -> Option<&SeedKeywords> {
        self.edited_keywords.as_ref()
    }

    /// Get the last full extraction payload
    pub fn extraction_state(&self) -> Option<&ExtractionState> {
        self.current_state.as_ref()
    }

    /// Get the ranked search results, if present in the payload
    pub fn final_results(&self) -> Option<&[SearchResult]> {
        self.current_state
            .as_ref()
            .and_then(|s| s.final_url.as_deref())
    }

    /// Run the extraction collaborator on a patent idea
    ///
    /// Empty or whitespace-only input is rejected without contacting the
    /// extractor. On success the new matrix and keywords replace any prior
    /// values and the previous review outcome (approval, feedback, staged
    /// edits) is cleared, since new keywords invalidate it. On failure all
    /// prior state is left untouched.
    pub async fn start_analysis(&mut self, extractor: &dyn Extractor, input_text: &str) -> Result<()> {
        if input_text.trim().is_empty() {
            return Err(Error::Validation(
                "patent idea description must not be empty".to_string(),
            ));
        }

        tracing::info!(extractor = extractor.name(), "Starting keyword extraction");
        let results = extractor.extract_keywords(input_text).await?;

        // Matrix and keywords come from one extraction call and must land
        // together; a partial payload aborts before any state changes.
        let (matrix, keywords) = match (&results.concept_matrix, &results.seed_keywords) {
            (Some(m), Some(k)) => (m.clone(), k.clone()),
            _ => {
                return Err(Error::Extraction(
                    "extractor returned an incomplete payload: concept matrix and seed keywords must both be present".to_string(),
                ))
            }
        };

        self.concept_matrix = Some(matrix);
        self.seed_keywords = Some(keywords);
        self.current_state = Some(results);
        self.keywords_approved = false;
        self.feedback = None;
        self.edited_keywords = None;
        self.set_phase(ReviewPhase::Analyzed);

        Ok(())
    }

    /// Approve the current keywords
    ///
    /// Idempotent: approving twice has the same net effect.
    pub fn approve(&mut self) -> Result<()> {
        self.check_transition(ReviewPhase::Approved)?;

        self.keywords_approved = true;
        self.feedback = Some(FeedbackAction::Approve);
        self.set_phase(ReviewPhase::Approved);

        // Results may already be present from the same payload.
        if self.final_results().is_some_and(|r| !r.is_empty()) {
            self.set_phase(ReviewPhase::Complete);
        }

        Ok(())
    }

    /// Reject the current keywords with free-text feedback
    ///
    /// Records intent only: approval state is not cleared and no
    /// re-extraction happens here. The consumer of the feedback is expected
    /// to call [`ReviewSession::start_analysis`] again.
    pub fn reject(&mut self, feedback_text: impl Into<String>) -> Result<()> {
        self.check_transition(ReviewPhase::Rejected)?;

        self.feedback = Some(FeedbackAction::Reject {
            feedback: feedback_text.into(),
        });
        self.set_phase(ReviewPhase::Rejected);

        Ok(())
    }

    /// Stage a full keyword replacement from user edits
    ///
    /// Takes one comma-separated string per category, keyed by the category
    /// key. All three categories must be present; on a validation error the
    /// existing feedback is left unchanged. The edited keywords are staged
    /// in the feedback and are NOT merged into the canonical seed keywords;
    /// the consumer of the feedback decides what becomes canonical.
    pub fn edit_keywords(&mut self, edits: &HashMap<String, String>) -> Result<()> {
        self.check_transition(ReviewPhase::Editing)?;

        let edited = parse_keyword_edits(edits)?;

        self.edited_keywords = Some(edited.clone());
        self.feedback = Some(FeedbackAction::Edit {
            edited_keywords: edited,
        });
        self.set_phase(ReviewPhase::Editing);

        Ok(())
    }

    /// Attach ranked results delivered after the initial extraction
    pub fn attach_results(&mut self, results: Vec<SearchResult>) {
        let state = self.current_state.get_or_insert_with(ExtractionState::default);
        state.final_url = Some(results);

        if self.keywords_approved && self.final_results().is_some_and(|r| !r.is_empty()) {
            self.set_phase(ReviewPhase::Complete);
        }
    }

    /// Render the concept matrix panel, or nothing if no extraction has run
    pub fn render_concept_matrix(&self) -> String {
        match (&self.concept_matrix, &self.seed_keywords) {
            (Some(matrix), Some(_)) => render::concept_matrix_panel(matrix),
            _ => String::new(),
        }
    }

    /// Render the seed keywords panel, or nothing if no extraction has run
    pub fn render_seed_keywords(&self) -> String {
        match (&self.concept_matrix, &self.seed_keywords) {
            (Some(_), Some(keywords)) => render::seed_keywords_panel(keywords),
            _ => String::new(),
        }
    }

    /// Render the final results panel
    ///
    /// Renders nothing unless the keywords are approved and a non-empty
    /// results list is present. Never errors.
    pub fn render_final_results(&self) -> String {
        if !self.keywords_approved {
            return String::new();
        }
        match self.final_results() {
            Some(results) if !results.is_empty() => render::final_results_panel(results),
            _ => String::new(),
        }
    }

    fn check_transition(&self, next: ReviewPhase) -> Result<()> {
        if !self.phase.can_transition_to(next) {
            return Err(Error::Validation(format!(
                "no keywords to review yet: cannot move from {:?} to {:?}",
                self.phase, next
            )));
        }
        Ok(())
    }

    fn set_phase(&mut self, next: ReviewPhase) {
        if self.phase != next {
            tracing::info!(from = ?self.phase, to = ?next, "Review phase transition");
        }
        self.phase = next;
    }
}
