//! viralcopy command-line entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use viralcopy::ViralCopySettings;
use viralcopy::cli::{Cli, Commands, handle_generate_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = ViralCopySettings::load(cli.config.as_deref())?;

    let api_key = cli
        .api_key
        .or_else(|| viralcopy::GeminiConfig::from_env().api_key().clone());
    let config = settings.into_gemini_config(api_key)?;

    match cli.command {
        Commands::Generate(args) => {
            let output = handle_generate_command(&args, config).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
