//! Patscout Core - Core library for the patent search assistant
//!
//! This crate holds the review workflow that drives keyword approval:
//! a user submits a patent idea, an external extractor turns it into a
//! concept matrix and seed keywords, and the user approves, rejects, or
//! edits those keywords before search results are shown.

pub mod concept;
pub mod config;
pub mod error;
pub mod extract;
pub mod idea;
pub mod keywords;
pub mod render;
pub mod workflow;

pub use concept::{
    ConceptMatrix, ExtractionState, FeedbackAction, KeywordCategory, SearchResult, SeedKeywords,
};
pub use config::Config;
pub use error::{Error, Result};
pub use extract::Extractor;
pub use workflow::{ReviewPhase, ReviewSession};
