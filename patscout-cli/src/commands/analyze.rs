//! Analyze command - one-shot keyword extraction with JSON export

use std::path::PathBuf;

use clap::Args;
use patscout_core::idea::IdeaInput;
use patscout_core::{Config, ReviewSession};
use patscout_extract::HttpExtractor;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// The patent idea description
    pub text: Option<String>,

    /// Read the idea description from a file instead
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Directory for the exported results file (defaults to config)
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Skip writing the results file
    #[arg(long)]
    pub no_save: bool,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let text = self.read_input()?;

        if verbose {
            tracing::info!(chars = text.len(), "Starting analysis");
        }

        println!("Patscout Analysis");
        println!("=================");
        println!();

        let idea = IdeaInput::parse(&text);
        if idea.is_structured() {
            println!("Idea: {}", idea.idea_title);
            println!();
        }

        let extractor = HttpExtractor::new(&config.extractor)?;
        let mut session = ReviewSession::new();
        session.start_analysis(&extractor, &text).await?;

        println!("{}", session.render_concept_matrix());
        println!("{}", session.render_seed_keywords());

        if session.final_results().is_some() {
            println!("Search results are included in the payload; approve the");
            println!("keywords with `patscout review` to display them.");
            println!();
        }

        if !self.no_save {
            let path = self.save_results(&session, config)?;
            println!("Results saved to {}", path.display());
        }

        Ok(())
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
            (None, None) => anyhow::bail!("provide a patent idea description or --file"),
        }
    }

    fn save_results(&self, session: &ReviewSession, config: &Config) -> anyhow::Result<PathBuf> {
        let state = session
            .extraction_state()
            .ok_or_else(|| anyhow::anyhow!("no extraction results to save"))?;

        let dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| config.output.output_dir.clone());
        std::fs::create_dir_all(&dir)?;

        let filename = format!(
            "extraction_results_{}.json",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        let path = dir.join(filename);
        std::fs::write(&path, serde_json::to_string_pretty(state)?)?;

        Ok(path)
    }
}
