//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the viralcopy binary.

mod commands;
mod generate;

pub use commands::{Cli, Commands, GenerateArgs};
pub use generate::{build_request, handle_generate_command, load_history, load_media, run_generate};
