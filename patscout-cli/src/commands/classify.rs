//! Classify command - IPC classification predictions

use clap::Args;
use patscout_core::Config;
use patscout_extract::IpcClient;

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Text to classify against the IPC scheme
    #[arg(required = true)]
    pub query: String,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = IpcClient::new(&config.search)?;
        let predictions = client.classify(&self.query).await?;

        println!("IPC Classification");
        println!("==================");
        println!();

        if predictions.is_empty() {
            println!("No predictions returned.");
            return Ok(());
        }

        println!("{:<6} {:<14} {}", "Rank", "Category", "Score");
        for prediction in &predictions {
            println!(
                "{:<6} {:<14} {}",
                prediction.rank, prediction.category, prediction.score
            );
        }

        Ok(())
    }
}
