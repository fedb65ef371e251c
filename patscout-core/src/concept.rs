//! Data model for extraction results and review feedback
//!
//! The extraction collaborator returns a concept matrix and seed keywords
//! over three fixed categories. The ranking collaborator later supplies
//! scored patent URLs in the same payload.

use serde::{Deserialize, Serialize};

/// The three fixed keyword categories used throughout the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    /// The technical problem the invention solves or its primary objective
    ProblemPurpose,
    /// The main object, device, system, material, or process
    ObjectSystem,
    /// The application domain, industry sector, or operational context
    EnvironmentField,
}

impl KeywordCategory {
    /// All categories, in display order
    pub const ALL: [KeywordCategory; 3] = [
        KeywordCategory::ProblemPurpose,
        KeywordCategory::ObjectSystem,
        KeywordCategory::EnvironmentField,
    ];

    /// The snake_case key used in payloads and edit forms
    pub fn key(&self) -> &'static str {
        match self {
            KeywordCategory::ProblemPurpose => "problem_purpose",
            KeywordCategory::ObjectSystem => "object_system",
            KeywordCategory::EnvironmentField => "environment_field",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            KeywordCategory::ProblemPurpose => "Problem/Purpose",
            KeywordCategory::ObjectSystem => "Object/System",
            KeywordCategory::EnvironmentField => "Environment/Field",
        }
    }
}

impl std::fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Concept matrix extracted from a patent idea
///
/// Read-only from the workflow's perspective; only the extractor writes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptMatrix {
    /// Problem or purpose described in the idea
    pub problem_purpose: String,
    /// Object or system the idea is about
    pub object_system: String,
    /// Environment or field the idea applies to
    pub environment_field: String,
}

impl ConceptMatrix {
    /// Get the text for a category
    pub fn get(&self, category: KeywordCategory) -> &str {
        match category {
            KeywordCategory::ProblemPurpose => &self.problem_purpose,
            KeywordCategory::ObjectSystem => &self.object_system,
            KeywordCategory::EnvironmentField => &self.environment_field,
        }
    }

    /// Iterate entries as (category, text) pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (KeywordCategory, &str)> {
        KeywordCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// Seed keywords per category, order preserved and duplicates allowed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedKeywords {
    /// Keywords for the problem/purpose category
    pub problem_purpose: Vec<String>,
    /// Keywords for the object/system category
    pub object_system: Vec<String>,
    /// Keywords for the environment/field category
    pub environment_field: Vec<String>,
}

impl SeedKeywords {
    /// Get the keyword list for a category
    pub fn get(&self, category: KeywordCategory) -> &[String] {
        match category {
            KeywordCategory::ProblemPurpose => &self.problem_purpose,
            KeywordCategory::ObjectSystem => &self.object_system,
            KeywordCategory::EnvironmentField => &self.environment_field,
        }
    }

    /// Set the keyword list for a category
    pub fn set(&mut self, category: KeywordCategory, keywords: Vec<String>) {
        match category {
            KeywordCategory::ProblemPurpose => self.problem_purpose = keywords,
            KeywordCategory::ObjectSystem => self.object_system = keywords,
            KeywordCategory::EnvironmentField => self.environment_field = keywords,
        }
    }

    /// Iterate entries as (category, keywords) pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (KeywordCategory, &[String])> {
        KeywordCategory::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
    }
}

/// A scored patent URL produced by the ranking collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Patent URL
    pub url: String,
    /// How well the patent's user scenario matches the idea
    pub user_scenario: f64,
    /// How well the patent's user problem matches the idea
    pub user_problem: f64,
}

/// Full extraction payload returned by the collaborator
///
/// Unknown fields from richer collaborator pipelines are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionState {
    /// Extracted concept matrix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept_matrix: Option<ConceptMatrix>,
    /// Extracted seed keywords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_keywords: Option<SeedKeywords>,
    /// Ranked search results, present once the ranking side has run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_url: Option<Vec<SearchResult>>,
}

/// User feedback on the extracted keywords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum FeedbackAction {
    /// Keywords accepted as-is
    Approve,
    /// Keywords rejected, with a reason for regeneration
    Reject {
        /// Free-text explanation of what went wrong
        feedback: String,
    },
    /// Keywords replaced in full by the user
    Edit {
        /// The replacement keyword map
        edited_keywords: SeedKeywords,
    },
}

impl FeedbackAction {
    /// Check if this is an approval
    pub fn is_approve(&self) -> bool {
        matches!(self, FeedbackAction::Approve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys() {
        assert_eq!(KeywordCategory::ProblemPurpose.key(), "problem_purpose");
        assert_eq!(KeywordCategory::ObjectSystem.key(), "object_system");
        assert_eq!(KeywordCategory::EnvironmentField.key(), "environment_field");
    }

    #[test]
    fn test_matrix_entries_order() {
        let matrix = ConceptMatrix {
            problem_purpose: "p".to_string(),
            object_system: "o".to_string(),
            environment_field: "e".to_string(),
        };

        let entries: Vec<_> = matrix.entries().collect();
        assert_eq!(entries[0], (KeywordCategory::ProblemPurpose, "p"));
        assert_eq!(entries[1], (KeywordCategory::ObjectSystem, "o"));
        assert_eq!(entries[2], (KeywordCategory::EnvironmentField, "e"));
    }

    #[test]
    fn test_feedback_action_serialization() {
        let approve = serde_json::to_value(FeedbackAction::Approve).unwrap();
        assert_eq!(approve["action"], "approve");

        let reject = serde_json::to_value(FeedbackAction::Reject {
            feedback: "too generic".to_string(),
        })
        .unwrap();
        assert_eq!(reject["action"], "reject");
        assert_eq!(reject["feedback"], "too generic");

        let edit = serde_json::to_value(FeedbackAction::Edit {
            edited_keywords: SeedKeywords::default(),
        })
        .unwrap();
        assert_eq!(edit["action"], "edit");
    }

    #[test]
    fn test_extraction_state_tolerates_extra_fields() {
        let json = r#"{
            "concept_matrix": {
                "problem_purpose": "a",
                "object_system": "b",
                "environment_field": "c"
            },
            "normalized_idea": "ignored downstream field"
        }"#;

        let state: ExtractionState = serde_json::from_str(json).unwrap();
        assert!(state.concept_matrix.is_some());
        assert!(state.seed_keywords.is_none());
        assert!(state.final_url.is_none());
    }

    #[test]
    fn test_extraction_state_skips_absent_fields() {
        let state = ExtractionState::default();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "{}");
    }
}
