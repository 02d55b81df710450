//! The network seam of the client.

use crate::gemini::{GeminiConfig, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use viralcopy_error::{GeminiError, GeminiErrorKind};

/// Performs one `generateContent` call.
///
/// Implementations must not retry and must not log failures at error
/// level; the client logs the failure once before returning it.
#[async_trait]
pub trait GeminiTransport: Send + Sync {
    /// Sends `request` to `model` authenticated with `api_key`.
    async fn generate_content(
        &self,
        model: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError>;
}

/// HTTPS transport to the Gemini REST API.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Creates a transport for `config.base_url`, applying the optional timeout.
    ///
    /// # Errors
    ///
    /// Returns `ClientCreation` if the HTTP client cannot be built.
    #[instrument(skip_all, fields(base_url = %config.base_url()))]
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs() {
            builder = builder.timeout(Duration::from_secs(*secs));
        }

        let client = builder
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(timeout_secs = ?config.timeout_secs(), "Created Gemini HTTP transport");

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the `generateContent` method for `model`.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GeminiTransport for ReqwestTransport {
    #[instrument(skip(self, api_key, request))]
    async fn generate_content(
        &self,
        model: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = self.endpoint(model);
        debug!(url = %url, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            debug!(status = %status, "Gemini API returned an error status");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string())))?;

        debug!(
            candidates = body.candidates.len(),
            total_tokens = ?body.usage_metadata.as_ref().and_then(|u| u.total_token_count),
            "Received generateContent response"
        );

        Ok(body)
    }
}
