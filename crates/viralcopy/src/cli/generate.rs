//! Generate command handler.

use super::GenerateArgs;
use std::path::Path;
use tracing::{info, instrument, warn};
use viralcopy_core::{GeneratedCopy, GenerationRequest, InlineMedia, validate_copy};
use viralcopy_error::{ConfigError, IoError, ViralCopyResult};
use viralcopy_models::{CopyGenerationClient, GeminiConfig, GeminiTransport};

/// Runs one generation and returns what should be printed to stdout.
#[instrument(skip_all, fields(model = %config.model(), has_media = args.media.is_some()))]
pub async fn handle_generate_command(
    args: &GenerateArgs,
    config: GeminiConfig,
) -> ViralCopyResult<String> {
    let client = CopyGenerationClient::new(config)?;
    run_generate(args, &client).await
}

/// Runs the command against an existing client.
pub async fn run_generate<T: GeminiTransport>(
    args: &GenerateArgs,
    client: &CopyGenerationClient<T>,
) -> ViralCopyResult<String> {
    let request = build_request(args)?;
    let text = client.generate_request(&request).await?;
    info!(bytes = text.len(), "Generated copy");

    if !args.typed && !args.validate {
        return Ok(text);
    }

    let copy = GeneratedCopy::from_json(&text)?;

    if args.validate {
        let report = validate_copy(&copy);
        for warning in &report.warnings {
            warn!(%warning, "Generated copy deviates from requested format");
        }
        if report.is_clean() {
            info!("Generated copy matches requested format");
        }
    }

    if args.typed {
        serde_json::to_string_pretty(&copy)
            .map_err(|e| viralcopy_error::JsonError::new(e.to_string()).into())
    } else {
        Ok(text)
    }
}

/// Builds the generation request from command-line arguments.
pub fn build_request(args: &GenerateArgs) -> ViralCopyResult<GenerationRequest> {
    let media = args
        .media
        .as_deref()
        .map(|path| load_media(path, args.mime.as_deref()))
        .transpose()?;

    let mut history = match &args.history_file {
        Some(path) => load_history(path)?,
        None => Vec::new(),
    };
    history.extend(args.history.iter().cloned());

    Ok(GenerationRequest::new(args.content.clone(), media, history))
}

/// Reads an attachment and base64-encodes it.
pub fn load_media(path: &Path, mime: Option<&str>) -> ViralCopyResult<InlineMedia> {
    let mime = match mime {
        Some(mime) => mime.to_string(),
        None => mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string())
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "Cannot determine MIME type of '{}'; pass --mime",
                    path.display()
                ))
            })?,
    };

    let bytes = std::fs::read(path)
        .map_err(|e| IoError::new(format!("Failed to read '{}': {}", path.display(), e)))?;

    tracing::debug!(mime = %mime, bytes = bytes.len(), "Loaded media");
    Ok(InlineMedia::from_bytes(mime, bytes))
}

/// Reads feedback notes, one per non-empty line, in file order.
pub fn load_history(path: &Path) -> ViralCopyResult<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| IoError::new(format!("Failed to read '{}': {}", path.display(), e)))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
