//! HTTP-backed extraction collaborator
//!
//! The extraction engine runs as a separate service; this client sends it
//! the idea text together with the rendered prompt phases and decodes the
//! returned extraction payload.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use patscout_core::config::ExtractorConfig;
use patscout_core::{ExtractionState, Extractor};

use crate::prompts::{render, ExtractionPhase, PromptContext};
use crate::{Error, Result};

/// Request body sent to the extraction service
#[derive(Debug, Serialize)]
struct ExtractRequest<'a> {
    /// Raw patent idea text
    text: &'a str,
    /// Model the service should run
    model: &'a str,
    /// Sampling temperature
    temperature: f64,
    /// Rendered prompts for the phases the service executes
    prompts: PhasePrompts,
}

#[derive(Debug, Serialize)]
struct PhasePrompts {
    normalization: String,
    concept_matrix: String,
    seed_keywords: String,
}

/// Client for the HTTP extraction service
pub struct HttpExtractor {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f64,
}

impl HttpExtractor {
    /// Create a client from the extractor configuration
    ///
    /// The configured timeout bounds the single blocking call the review
    /// workflow makes.
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(endpoint = %config.endpoint, model = %config.model, "Created extraction client");

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    /// Override the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request<'a>(&'a self, text: &'a str) -> ExtractRequest<'a> {
        // The seed keyword prompt leaves the matrix placeholders for the
        // service to fill from its own concept matrix phase output.
        let input_ctx = PromptContext::new().with_input(text);

        ExtractRequest {
            text,
            model: &self.model,
            temperature: self.temperature,
            prompts: PhasePrompts {
                normalization: render(ExtractionPhase::Normalization, &input_ctx),
                concept_matrix: render(ExtractionPhase::ConceptMatrix, &input_ctx),
                seed_keywords: crate::prompts::get_template(ExtractionPhase::SeedKeywords)
                    .to_string(),
            },
        }
    }

    async fn request(&self, text: &str) -> Result<ExtractionState> {
        let body = self.build_request(text);

        debug!(endpoint = %self.endpoint, "Sending extraction request");
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let state: ExtractionState = response.json().await?;
        debug!(
            has_matrix = state.concept_matrix.is_some(),
            has_keywords = state.seed_keywords.is_some(),
            has_results = state.final_url.is_some(),
            "Extraction response decoded"
        );

        Ok(state)
    }
}

impl std::fmt::Debug for HttpExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpExtractor")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Extractor for HttpExtractor {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn extract_keywords(&self, text: &str) -> patscout_core::Result<ExtractionState> {
        self.request(text)
            .await
            .map_err(|e| patscout_core::Error::Extraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ExtractorConfig {
        ExtractorConfig {
            endpoint: "http://localhost:8000/extract".to_string(),
            model: "qwen2.5:3b-instruct".to_string(),
            temperature: 0.7,
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_extractor_builder() {
        let extractor = HttpExtractor::new(&test_config())
            .unwrap()
            .with_endpoint("http://extract.internal/extract")
            .with_model("qwen2.5:7b-instruct");

        assert_eq!(extractor.endpoint(), "http://extract.internal/extract");
        assert_eq!(extractor.model, "qwen2.5:7b-instruct");
        assert_eq!(extractor.name(), "http");
    }

    #[test]
    fn test_build_request_renders_prompts() {
        let extractor = HttpExtractor::new(&test_config()).unwrap();
        let request = extractor.build_request("A self-cleaning water filter");

        assert_eq!(request.text, "A self-cleaning water filter");
        assert!(request
            .prompts
            .normalization
            .contains("A self-cleaning water filter"));
        assert!(request
            .prompts
            .concept_matrix
            .contains("A self-cleaning water filter"));
        // Matrix placeholders stay for the service to fill
        assert!(request.prompts.seed_keywords.contains("{{PROBLEM_PURPOSE}}"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_maps_to_extraction_error() {
        let mut config = test_config();
        config.endpoint = "http://127.0.0.1:1/extract".to_string();
        config.timeout_secs = 1;

        let extractor = HttpExtractor::new(&config).unwrap();
        let err = extractor.extract_keywords("idea").await.unwrap_err();
        assert!(matches!(err, patscout_core::Error::Extraction(_)));
    }
}
