//! Configuration management for Patscout
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (PATSCOUT_*)
//! 3. Config file (~/.config/patscout/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Extraction collaborator configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// HTTP endpoint of the extraction service
    pub endpoint: String,

    /// Model the extraction service should run
    pub model: String,

    /// Sampling temperature passed to the model
    pub temperature: f64,

    /// Request timeout in seconds for the extraction call
    pub timeout_secs: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/extract".to_string(),
            model: "qwen2.5:3b-instruct".to_string(),
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}

/// Search and classification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum results to request from the ranking side
    pub max_results: usize,

    /// WIPO IPC classification endpoint
    pub ipc_url: String,

    /// Number of IPC predictions to request
    pub ipc_predictions: u32,

    /// IPC hierarchic level for predictions
    pub ipc_level: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            ipc_url: "https://ipccat.wipo.int/EN/query".to_string(),
            ipc_predictions: 3,
            ipc_level: "SUBGROUP".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for exported extraction results
    pub output_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Extraction collaborator configuration
    pub extractor: ExtractorConfig,

    /// Search and classification configuration
    pub search: SearchConfig,

    /// Output configuration
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/patscout/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("patscout").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - PATSCOUT_ENDPOINT: Extraction service endpoint
    /// - PATSCOUT_MODEL: Model to use
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var("PATSCOUT_ENDPOINT") {
            self.extractor.endpoint = endpoint;
        }

        if let Ok(model) = std::env::var("PATSCOUT_MODEL") {
            self.extractor.model = model;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, endpoint: Option<String>, model: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.extractor.endpoint = endpoint;
        }

        if let Some(m) = model {
            self.extractor.model = m;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(endpoint: Option<String>, model: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(endpoint, model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extractor.model, "qwen2.5:3b-instruct");
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.search.ipc_predictions, 3);
        assert_eq!(config.output.output_dir, PathBuf::from("outputs"));
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(
            Some("http://extract.internal:9000/extract".to_string()),
            Some("qwen2.5:7b-instruct".to_string()),
        );

        assert_eq!(config.extractor.endpoint, "http://extract.internal:9000/extract");
        assert_eq!(config.extractor.model, "qwen2.5:7b-instruct");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[extractor]
endpoint = "http://10.0.0.5:8000/extract"
model = "qwen2.5:7b-instruct"
timeout_secs = 30

[search]
max_results = 10
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.extractor.endpoint, "http://10.0.0.5:8000/extract");
        assert_eq!(config.extractor.timeout_secs, 30);
        assert_eq!(config.search.max_results, 10);
        // Unset sections keep defaults
        assert_eq!(config.search.ipc_level, "SUBGROUP");
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[extractor]
model = "qwen2.5:7b-instruct"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.extractor.endpoint, "http://localhost:8000/extract");
        assert_eq!(config.extractor.model, "qwen2.5:7b-instruct");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\noutput_dir = \"/tmp/results\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.output.output_dir, PathBuf::from("/tmp/results"));
    }
}
