//! Backend trait and normalized request/response types.
//!
//! The [`Backend`] trait abstracts over the generation provider,
//! translating between normalized [`LlmRequest`]/[`LlmResponse`] types
//! and the provider's HTTP API. The extraction engine only ever issues
//! one-shot, non-streaming completions, so the trait is a single method.
//!
//! ```text
//! Extractor ──► LlmRequest ──► Backend::complete() ──► LlmResponse
//!                                      │
//!                           ┌──────────┴──────────┐
//!                      OllamaBackend          MockBackend
//!                      /api/chat              canned responses
//! ```

pub mod mock;
pub mod ollama;

pub use mock::MockBackend;
pub use ollama::OllamaBackend;

use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// A normalized, provider-agnostic generation request.
///
/// The [`Extractor`](crate::extract::Extractor) builds this from the
/// assembled few-shot prompt; the [`Backend`] translates it into the
/// provider-specific HTTP request.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// Model identifier (e.g. `"gemma3:latest"`).
    pub model: String,

    /// The full prompt, sent as a single user-role message.
    pub prompt: String,
}

/// A normalized generation response.
#[derive(Debug)]
pub struct LlmResponse {
    /// The generated text content.
    pub text: String,

    /// HTTP status code (for diagnostics/logging).
    pub status: u16,

    /// Provider-specific metadata (token counts, timing, model info).
    /// Stored as raw JSON; each provider returns different fields.
    pub metadata: Option<serde_json::Value>,
}

/// Abstraction over generation providers.
///
/// Implementors translate between the normalized [`LlmRequest`]/
/// [`LlmResponse`] pair and the provider's HTTP API.
///
/// # Object Safety
///
/// This trait is object-safe and designed to be used as `Arc<dyn Backend>`.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Execute a non-streaming generation call.
    async fn complete(
        &self,
        client: &Client,
        base_url: &str,
        request: &LlmRequest,
    ) -> Result<LlmResponse>;

    /// Human-readable name for logging and diagnostics.
    fn name(&self) -> &'static str;
}
