//! LLM provider integration for viralcopy.
//!
//! Only Gemini is supported. The network call sits behind the
//! [`GeminiTransport`] trait so that request assembly can be tested without
//! a live endpoint.

mod gemini;

pub use gemini::*;
