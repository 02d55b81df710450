//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate short-video marketing copy with Gemini.
#[derive(Parser, Debug)]
#[command(name = "viralcopy")]
#[command(version)]
pub struct Cli {
    /// Path to settings file (default: ./viralcopy.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate copy options for a script and/or a frame
    Generate(GenerateArgs),
}

/// Arguments for `viralcopy generate`.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Script or context text; omit to work from the media alone
    #[arg(long, default_value = "")]
    pub content: String,

    /// Image or video frame to attach
    #[arg(long)]
    pub media: Option<PathBuf>,

    /// MIME type of the media (guessed from the extension if omitted)
    #[arg(long, requires = "media")]
    pub mime: Option<String>,

    /// Prior feedback note; repeat for several
    #[arg(long = "history")]
    pub history: Vec<String>,

    /// File with one feedback note per line
    #[arg(long)]
    pub history_file: Option<PathBuf>,

    /// Parse the response and print it pretty-formatted
    #[arg(long)]
    pub typed: bool,

    /// Check counts and long ticker lengths and log each deviation
    #[arg(long)]
    pub validate: bool,
}
