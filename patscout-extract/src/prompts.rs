//! Extraction prompt templates
//!
//! Embedded templates for the phases the extraction service runs, with
//! `{{VARIABLE}}` placeholders rendered from a context.

use std::collections::HashMap;

use patscout_core::ConceptMatrix;

const NORMALIZATION_PROMPT: &str = include_str!("prompts/normalization.md");
const CONCEPT_MATRIX_PROMPT: &str = include_str!("prompts/concept_matrix.md");
const SEED_KEYWORDS_PROMPT: &str = include_str!("prompts/seed_keywords.md");

/// The extraction phases the collaborator runs in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPhase {
    /// Normalize the idea into problem + technical points
    Normalization,
    /// Extract the concept matrix
    ConceptMatrix,
    /// Generate seed keywords from the concept matrix
    SeedKeywords,
}

/// Get the raw prompt template for an extraction phase
pub fn get_template(phase: ExtractionPhase) -> &'static str {
    match phase {
        ExtractionPhase::Normalization => NORMALIZATION_PROMPT,
        ExtractionPhase::ConceptMatrix => CONCEPT_MATRIX_PROMPT,
        ExtractionPhase::SeedKeywords => SEED_KEYWORDS_PROMPT,
    }
}

/// Context for rendering a prompt template
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    variables: HashMap<String, String>,
}

impl PromptContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value (builder pattern)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Set the raw idea/document text
    pub fn with_input(self, input: impl Into<String>) -> Self {
        self.with("INPUT", input)
    }

    /// Set the three concept matrix fields
    pub fn with_concept_matrix(self, matrix: &ConceptMatrix) -> Self {
        self.with("PROBLEM_PURPOSE", &matrix.problem_purpose)
            .with("OBJECT_SYSTEM", &matrix.object_system)
            .with("ENVIRONMENT_FIELD", &matrix.environment_field)
    }
}

/// Render a prompt template for a phase with the given context
///
/// Unset `{{UPPERCASE}}` placeholders render as "(not specified)".
pub fn render(phase: ExtractionPhase, context: &PromptContext) -> String {
    let mut result = get_template(phase).to_string();

    for (key, value) in &context.variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    while let Some(start) = result.find("{{") {
        let Some(end) = result[start..].find("}}").map(|e| start + e) else {
            break;
        };
        let inside = &result[start + 2..end];
        if !inside.is_empty()
            && inside.chars().all(|c| c.is_ascii_uppercase() || c == '_')
        {
            result.replace_range(start..end + 2, "(not specified)");
        } else {
            break;
        }
    }

    result
}
