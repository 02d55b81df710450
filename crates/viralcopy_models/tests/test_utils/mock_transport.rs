//! Mock Gemini transport that records every call.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use viralcopy_error::{GeminiError, GeminiErrorKind};
use viralcopy_models::{GeminiTransport, GenerateContentRequest, GenerateContentResponse};

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// A single candidate with this text.
    Text(String),
    /// This exact response.
    Response(GenerateContentResponse),
    /// Fail with this error kind.
    Fail(GeminiErrorKind),
}

/// A call the mock received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub api_key: String,
    pub request: GenerateContentRequest,
}

/// Transport double. Clones share the call log.
#[derive(Debug, Clone)]
pub struct MockTransport {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(MockBehavior::Text(text.to_string()))
    }

    pub fn failing(kind: GeminiErrorKind) -> Self {
        Self::new(MockBehavior::Fail(kind))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock lock poisoned").len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }

    pub fn last_request(&self) -> GenerateContentRequest {
        self.calls()
            .pop()
            .expect("at least one call recorded")
            .request
    }
}

#[async_trait]
impl GeminiTransport for MockTransport {
    async fn generate_content(
        &self,
        model: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push(RecordedCall {
                model: model.to_string(),
                api_key: api_key.to_string(),
                request: request.clone(),
            });

        match &self.behavior {
            MockBehavior::Text(text) => Ok(GenerateContentResponse::from_text(text.clone())),
            MockBehavior::Response(response) => Ok(response.clone()),
            MockBehavior::Fail(kind) => Err(GeminiError::new(kind.clone())),
        }
    }
}
