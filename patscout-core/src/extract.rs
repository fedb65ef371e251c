//! Extraction collaborator interface
//!
//! The extraction engine itself lives outside this repository. The workflow
//! only needs a callable that turns free text into an [`ExtractionState`].

use async_trait::async_trait;

use crate::concept::ExtractionState;
use crate::Result;

/// Trait for keyword extraction collaborators
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Get the name of this extractor
    fn name(&self) -> &'static str;

    /// Extract a concept matrix and seed keywords from a patent idea
    ///
    /// The returned payload may also carry ranked search results when the
    /// downstream ranking side has already run.
    async fn extract_keywords(&self, text: &str) -> Result<ExtractionState>;
}
