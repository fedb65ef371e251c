//! Patscout CLI - Command line interface for the patent search assistant
//!
//! Extract concept matrices and seed keywords from patent ideas, review
//! them interactively, and classify ideas against the IPC scheme.

mod commands;

use clap::{Parser, Subcommand};
use patscout_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{AnalyzeArgs, ClassifyArgs, ReviewArgs};

/// Patscout: patent idea analysis and prior art keyword review
#[derive(Parser, Debug)]
#[command(name = "patscout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Extraction service endpoint (overrides config and env)
    #[arg(long, global = true, env = "PATSCOUT_ENDPOINT")]
    endpoint: Option<String>,

    /// Model to use (overrides config and env)
    #[arg(long, global = true, env = "PATSCOUT_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Extract keywords from a patent idea and export the results
    #[command(visible_alias = "a")]
    Analyze(AnalyzeArgs),

    /// Review extracted keywords interactively
    #[command(visible_alias = "r")]
    Review(ReviewArgs),

    /// Classify an idea against the IPC scheme
    Classify(ClassifyArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.endpoint.clone(), cli.model.clone())?;

    if cli.verbose {
        tracing::info!(
            endpoint = %config.extractor.endpoint,
            model = %config.extractor.model,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("patscout {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Analyze(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Review(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Classify(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Config) => {
            println!("Patscout Configuration");
            println!("======================");
            println!();
            println!("Extractor Settings:");
            println!("  endpoint: {}", config.extractor.endpoint);
            println!("  model: {}", config.extractor.model);
            println!("  temperature: {}", config.extractor.temperature);
            println!("  timeout_secs: {}", config.extractor.timeout_secs);
            println!();
            println!("Search Settings:");
            println!("  max_results: {}", config.search.max_results);
            println!("  ipc_url: {}", config.search.ipc_url);
            println!();
            println!("Output Settings:");
            println!("  output_dir: {}", config.output.output_dir.display());
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Patscout - patent idea analysis and prior art keyword review");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
