//! Copy generation client.

use crate::gemini::{
    GeminiConfig, GeminiTransport, GenerateContentRequest, ReqwestTransport, conversions,
};
use tracing::{debug, error, instrument};
use viralcopy_core::{GeneratedCopy, GenerationRequest, InlineMedia};
use viralcopy_error::{ConfigError, ViralCopyResult};

/// Returned by [`CopyGenerationClient::generate`] when the model sent no text.
pub const EMPTY_RESULT: &str = "{}";

/// Sends one schema-constrained request to Gemini and returns the JSON text.
///
/// The client holds no mutable state; clones and concurrent calls are
/// independent. There is no retry and no timeout beyond the optional
/// transport timeout in [`GeminiConfig`].
///
/// # Examples
///
/// ```no_run
/// use viralcopy_models::{CopyGenerationClient, GeminiConfig};
///
/// # async fn run() -> viralcopy_error::ViralCopyResult<()> {
/// let client = CopyGenerationClient::new(GeminiConfig::from_env())?;
/// let json = client.generate("女儿第一次上学", None, &[]).await?;
/// println!("{json}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CopyGenerationClient<T = ReqwestTransport> {
    config: GeminiConfig,
    transport: T,
}

impl CopyGenerationClient<ReqwestTransport> {
    /// Creates a client that talks to the Gemini REST API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built. A missing API key
    /// is not an error here; it is reported by the first call.
    pub fn new(config: GeminiConfig) -> ViralCopyResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: GeminiTransport> CopyGenerationClient<T> {
    /// Creates a client over a custom transport.
    pub fn with_transport(config: GeminiConfig, transport: T) -> Self {
        debug!(model = %config.model(), "Created copy generation client");
        Self { config, transport }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        self.config.model()
    }

    /// Builds the request body without sending it.
    pub fn build_request(&self, req: &GenerationRequest) -> GenerateContentRequest {
        conversions::to_generate_request(req)
    }

    /// Generates copy for `content`, an optional attachment and prior feedback.
    ///
    /// Returns the raw JSON text, or `"{}"` when the model returned no text.
    ///
    /// # Errors
    ///
    /// A configuration error if no API key is configured (nothing is sent),
    /// otherwise the transport's error unchanged.
    pub async fn generate(
        &self,
        content: &str,
        media: Option<InlineMedia>,
        history: &[String],
    ) -> ViralCopyResult<String> {
        let req = GenerationRequest::new(content, media, history.to_vec());
        self.generate_request(&req).await
    }

    /// Like [`generate`](Self::generate), taking a prepared request.
    pub async fn generate_request(&self, req: &GenerationRequest) -> ViralCopyResult<String> {
        Ok(self
            .generate_raw(req)
            .await?
            .unwrap_or_else(|| EMPTY_RESULT.to_string()))
    }

    /// Performs the call and leaves the empty-result policy to the caller.
    ///
    /// Returns `Ok(None)` when the response carried no text.
    #[instrument(
        skip(self, req),
        fields(
            model = %self.config.model(),
            media_bytes = req.media().as_ref().map(InlineMedia::encoded_len),
            history_len = req.evolution_history().len()
        )
    )]
    pub async fn generate_raw(&self, req: &GenerationRequest) -> ViralCopyResult<Option<String>> {
        let api_key = self
            .config
            .credential()
            .ok_or_else(|| ConfigError::new("API Key not found"))?;

        let request = self.build_request(req);
        debug!(
            parts = request.contents().first().map(|c| c.parts().len()),
            "Sending copy generation request"
        );

        match self
            .transport
            .generate_content(self.config.model(), api_key, &request)
            .await
        {
            Ok(response) => {
                let text = response.text();
                debug!(
                    text_len = text.as_ref().map(String::len),
                    "Received copy generation response"
                );
                Ok(text)
            }
            Err(e) => {
                error!(error = %e, "Gemini API Error");
                Err(e.into())
            }
        }
    }

    /// Generates copy and parses it into [`GeneratedCopy`].
    ///
    /// # Errors
    ///
    /// As [`generate`](Self::generate), plus a JSON error if the text does not
    /// match the response schema.
    pub async fn generate_copy(&self, req: &GenerationRequest) -> ViralCopyResult<GeneratedCopy> {
        let text = self.generate_request(req).await?;
        GeneratedCopy::from_json(&text)
    }
}
