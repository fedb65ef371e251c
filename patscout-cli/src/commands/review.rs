//! Review command - interactive approve/reject/edit loop

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Args;
use patscout_core::{Config, KeywordCategory, ReviewSession};
use patscout_extract::HttpExtractor;

/// Arguments for the review command
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// The patent idea description
    pub text: Option<String>,

    /// Read the idea description from a file instead
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl ReviewArgs {
    /// Execute the review command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let text = match (&self.text, &self.file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => anyhow::bail!("provide a patent idea description or --file"),
        };

        if verbose {
            tracing::info!(chars = text.len(), "Starting review session");
        }

        let extractor = HttpExtractor::new(&config.extractor)?;
        let mut session = ReviewSession::new();

        println!("Analyzing your patent idea...");
        session.start_analysis(&extractor, &text).await?;
        println!();
        println!("{}", session.render_concept_matrix());
        println!("{}", session.render_seed_keywords());

        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("[a]pprove / [r]eject / [e]dit / [q]uit: ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next() else { break };
            match line?.trim() {
                "a" | "approve" => {
                    session.approve()?;
                    println!("Keywords approved.");
                    let results = session.render_final_results();
                    if results.is_empty() {
                        println!("No search results available yet.");
                    } else {
                        println!();
                        println!("{}", results);
                    }
                    break;
                }
                "r" | "reject" => {
                    print!("Feedback for regeneration: ");
                    std::io::stdout().flush()?;
                    let feedback = lines.next().transpose()?.unwrap_or_default();
                    session.reject(feedback.trim())?;
                    println!("Feedback recorded. Run the analysis again to regenerate.");
                    break;
                }
                "e" | "edit" => {
                    match self.prompt_edits(&session, &mut lines)? {
                        Some(edits) => match session.edit_keywords(&edits) {
                            Ok(()) => {
                                println!("Edited keywords staged for regeneration.");
                                break;
                            }
                            Err(e) => println!("Edit rejected: {}", e),
                        },
                        None => break,
                    }
                }
                "q" | "quit" => break,
                other => println!("Unknown choice: {}", other),
            }
        }

        if verbose {
            if let Some(feedback) = session.feedback() {
                tracing::info!(feedback = ?feedback, "Review session finished");
            }
        }

        Ok(())
    }

    /// Prompt for one comma-separated keyword line per category
    ///
    /// An empty line keeps the current keywords for that category.
    fn prompt_edits(
        &self,
        session: &ReviewSession,
        lines: &mut impl Iterator<Item = std::io::Result<String>>,
    ) -> anyhow::Result<Option<HashMap<String, String>>> {
        let Some(keywords) = session.seed_keywords() else {
            return Ok(None);
        };

        println!("Enter new keywords separated by commas (empty keeps current).");
        let mut edits = HashMap::new();

        for category in KeywordCategory::ALL {
            let current = keywords.get(category).join(", ");
            print!("{} [{}]: ", category.label(), current);
            std::io::stdout().flush()?;

            let Some(line) = lines.next().transpose()? else {
                return Ok(None);
            };
            let input = if line.trim().is_empty() {
                current
            } else {
                line.trim().to_string()
            };
            edits.insert(category.key().to_string(), input);
        }

        Ok(Some(edits))
    }
}
