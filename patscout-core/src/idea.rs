//! Structured patent idea parsing
//!
//! Idea descriptions often arrive in a lightly formatted shape with
//! `**Idea title**:`, `**User scenario**:` and `**User problem**:` sections.
//! This parser pulls those out; free-form text without the markers simply
//! yields empty fields and the raw text is used as-is downstream.

use serde::{Deserialize, Serialize};

const TITLE_MARKER: &str = "**Idea title**:";
const SCENARIO_MARKER: &str = "**User scenario**:";
const PROBLEM_MARKER: &str = "**User problem**:";

/// A structured parse of a formatted patent idea description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdeaInput {
    /// Title line of the idea
    pub idea_title: String,
    /// Scenario in which a user would use the invention
    pub user_scenario: String,
    /// Problem the invention solves
    pub user_problem: String,
}

impl IdeaInput {
    /// Parse a formatted idea description
    ///
    /// Missing sections yield empty strings.
    pub fn parse(text: &str) -> Self {
        let idea_title = text
            .find(TITLE_MARKER)
            .map(|i| after_marker_line(&text[i + TITLE_MARKER.len()..]))
            .unwrap_or_default();

        let scenario_start = text.find(SCENARIO_MARKER);
        let problem_start = text.find(PROBLEM_MARKER);

        let user_scenario = scenario_start
            .map(|i| {
                let rest = &text[i + SCENARIO_MARKER.len()..];
                let end = problem_start
                    .filter(|&p| p > i)
                    .map(|p| p - (i + SCENARIO_MARKER.len()))
                    .unwrap_or(rest.len());
                rest[..end].trim().to_string()
            })
            .unwrap_or_default();

        let user_problem = problem_start
            .map(|i| text[i + PROBLEM_MARKER.len()..].trim().to_string())
            .unwrap_or_default();

        Self {
            idea_title,
            user_scenario,
            user_problem,
        }
    }

    /// Whether any section was recognized
    pub fn is_structured(&self) -> bool {
        !self.idea_title.is_empty()
            || !self.user_scenario.is_empty()
            || !self.user_problem.is_empty()
    }
}

fn after_marker_line(rest: &str) -> String {
    rest.lines().next().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
**Idea title**: Smart Irrigation System with IoT Sensors

**User scenario**: A farmer managing a large agricultural field needs to
optimize water usage while ensuring crops receive adequate moisture.

**User problem**: Traditional irrigation systems either over-water or
under-water crops because they operate on fixed schedules.
";

    #[test]
    fn test_parse_all_sections() {
        let idea = IdeaInput::parse(SAMPLE);
        assert_eq!(idea.idea_title, "Smart Irrigation System with IoT Sensors");
        assert!(idea.user_scenario.starts_with("A farmer managing"));
        assert!(idea.user_scenario.ends_with("adequate moisture."));
        assert!(idea.user_problem.starts_with("Traditional irrigation"));
        assert!(idea.is_structured());
    }

    #[test]
    fn test_parse_unstructured_text() {
        let idea = IdeaInput::parse("A self-cleaning water filter for home use");
        assert_eq!(idea, IdeaInput::default());
        assert!(!idea.is_structured());
    }

    #[test]
    fn test_parse_missing_problem_section() {
        let text = "**Idea title**: Filter\n\n**User scenario**: Someone filters water.";
        let idea = IdeaInput::parse(text);
        assert_eq!(idea.idea_title, "Filter");
        assert_eq!(idea.user_scenario, "Someone filters water.");
        assert_eq!(idea.user_problem, "");
    }
}
