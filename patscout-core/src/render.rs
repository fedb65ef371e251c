//! Plain-text panels for extraction results
//!
//! Rendering returns strings rather than printing so the display gating
//! rules can be tested; the CLI decides where the panels go.

use std::fmt::Write;

use crate::concept::{ConceptMatrix, SearchResult, SeedKeywords};

/// Render the concept matrix as a labeled panel
pub fn concept_matrix_panel(matrix: &ConceptMatrix) -> String {
    let mut out = String::new();
    out.push_str("Concept Matrix\n");
    out.push_str("==============\n");

    for (category, text) in matrix.entries() {
        let _ = writeln!(out, "{}:", category.label());
        let _ = writeln!(out, "  {}", text);
    }

    out
}

/// Render the seed keywords as a labeled panel
pub fn seed_keywords_panel(keywords: &SeedKeywords) -> String {
    let mut out = String::new();
    out.push_str("Generated Keywords\n");
    out.push_str("==================\n");

    for (category, list) in keywords.entries() {
        let _ = writeln!(out, "{} Keywords:", category.label());
        for keyword in list {
            let _ = writeln!(out, "  - {}", keyword);
        }
    }

    out
}

/// Render ranked search results with scores formatted to two decimals
pub fn final_results_panel(results: &[SearchResult]) -> String {
    let mut out = String::new();
    out.push_str("Search Results\n");
    out.push_str("==============\n");

    for result in results {
        let _ = writeln!(out, "Patent: {}", result.url);
        let _ = writeln!(out, "  User Scenario Score: {:.2}", result.user_scenario);
        let _ = writeln!(out, "  User Problem Score: {:.2}", result.user_problem);
        let _ = writeln!(out, "  View Patent: {}", result.url);
    }

    out
}
