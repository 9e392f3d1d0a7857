//! Schema-guarded extraction of structured arrays from free text.
//!
//! [`Extractor`] isolates the one non-deterministic component of the
//! pipeline behind a narrow interface: raw text plus a non-empty set of
//! few-shot examples in, a two-variant [`Extraction`] out. Generation
//! variance is handled by schema validation alone. Elements that fail
//! to deserialize into the target type are dropped, not repaired, and
//! nothing is retried or cached.

use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::backend::{Backend, LlmRequest, OllamaBackend};
use crate::error::Result;
use crate::{parsing, prompt};

/// One labeled (input, expected parsed array) pair steering the model.
///
/// Immutable, defined per call site, never persisted. String values
/// inside `parsed` must not contain spaces or newlines: the response
/// span is whitespace-stripped before parsing, and an example teaching
/// spaced values would teach a shape the validator can never see.
#[derive(Debug, Clone)]
pub struct Example<T> {
    pub input: String,
    pub parsed: Vec<T>,
}

/// Outcome of one extraction call.
///
/// `Failed` is data, not an error: the caller decides whether to
/// degrade (empty field) or surface it. Transport problems travel
/// separately as [`ForgeError`](crate::ForgeError).
#[derive(Debug)]
pub enum Extraction<T> {
    /// The surviving elements after per-element schema validation.
    Parsed(Vec<T>),
    /// The model's output could not be used; `reason` says why.
    Failed { reason: String },
}

/// Few-shot extraction engine bound to one generation backend.
///
/// Cheap to clone: the HTTP client and backend are reference-counted.
///
/// # Example
///
/// ```no_run
/// use monster_forge::extract::Extractor;
///
/// let extractor = Extractor::builder("http://localhost:11434")
///     .model("gemma3:latest")
///     .build();
/// ```
#[derive(Clone)]
pub struct Extractor {
    client: Client,
    base_url: String,
    model: String,
    backend: Arc<dyn Backend>,
}

impl Extractor {
    /// Create a new builder.
    pub fn builder(base_url: impl Into<String>) -> ExtractorBuilder {
        ExtractorBuilder {
            client: None,
            base_url: base_url.into(),
            model: None,
            backend: None,
        }
    }

    /// Parse `raw_text` into a validated array of `T`.
    ///
    /// Issues exactly one non-streaming generation call. The response is
    /// reduced to its first fenced JSON block (falling back to the whole
    /// response when no fence is present), stripped of spaces and
    /// newlines, and parsed. A non-JSON or non-array response yields
    /// [`Extraction::Failed`]; an array is filtered element-by-element
    /// through serde deserialization into `T`, silently dropping
    /// non-conforming elements.
    ///
    /// # Panics
    ///
    /// Panics if `examples` is empty; the engine is a few-shot parser
    /// and has no zero-shot mode.
    pub async fn extract_array<T>(
        &self,
        raw_text: &str,
        examples: &[Example<T>],
    ) -> Result<Extraction<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        assert!(
            !examples.is_empty(),
            "extract_array requires at least one example"
        );

        let mut blocks = Vec::with_capacity(examples.len());
        for (index, example) in examples.iter().enumerate() {
            let parsed_json = serde_json::to_string(&example.parsed)?;
            blocks.push(prompt::example_block(index, &example.input, &parsed_json));
        }
        let prompt = prompt::extraction_prompt(raw_text, &blocks);

        let request = LlmRequest {
            model: self.model.clone(),
            prompt,
        };
        let response = self
            .backend
            .complete(&self.client, &self.base_url, &request)
            .await?;

        if let Some(metadata) = &response.metadata {
            debug!(
                "completion via {} backend: {}",
                self.backend.name(),
                metadata
            );
        }

        let span = parsing::extract_json_block(&response.text)
            .unwrap_or_else(|| response.text.trim().to_string());
        let compact = span.replace(' ', "").replace('\n', "");

        let value: Value = match serde_json::from_str(&compact) {
            Ok(value) => value,
            Err(err) => {
                warn!("model response was not valid JSON: {}", err);
                return Ok(Extraction::Failed {
                    reason: format!("Failed to parse JSON from {}", response.text),
                });
            }
        };

        let items = match value {
            Value::Array(items) => items,
            _ => {
                warn!("Did not receive an array as a response.");
                return Ok(Extraction::Failed {
                    reason: "Did not receive an array as a response.".to_string(),
                });
            }
        };

        let total = items.len();
        let parsed: Vec<T> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();
        if parsed.len() < total {
            debug!(
                "dropped {} of {} extracted elements failing schema validation",
                total - parsed.len(),
                total
            );
        }

        Ok(Extraction::Parsed(parsed))
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("backend", &self.backend.name())
            .finish()
    }
}

/// Builder for [`Extractor`].
pub struct ExtractorBuilder {
    client: Option<Client>,
    base_url: String,
    model: Option<String>,
    backend: Option<Arc<dyn Backend>>,
}

impl ExtractorBuilder {
    /// Set the HTTP client. If not set, a default client with no request
    /// timeout is created; supply a client here to impose one.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the model identifier. Default: `gemma3:latest`.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the generation backend. Default: [`OllamaBackend`].
    pub fn backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Build the extractor.
    pub fn build(self) -> Extractor {
        Extractor {
            client: self.client.unwrap_or_default(),
            base_url: normalize_base_url(&self.base_url),
            model: self.model.unwrap_or_else(|| "gemma3:latest".to_string()),
            backend: self.backend.unwrap_or_else(|| Arc::new(OllamaBackend)),
        }
    }
}

/// Strip known provider path suffixes from a base URL; the backend
/// appends its own path.
/// e.g., "http://localhost:11434/api/chat" -> "http://localhost:11434"
fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    // Longest suffix first
    for suffix in &["/api/generate", "/api/chat", "/api"] {
        if let Some(stripped) = trimmed.strip_suffix(suffix) {
            return stripped.to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        name: String,
        value: i32,
    }

    fn extractor_with(mock: Arc<MockBackend>) -> Extractor {
        Extractor::builder("http://localhost:11434")
            .model("test-model")
            .backend(mock)
            .build()
    }

    fn examples() -> Vec<Example<Item>> {
        vec![Example {
            input: "sample input".to_string(),
            parsed: vec![Item {
                name: "sample".to_string(),
                value: 1,
            }],
        }]
    }

    #[tokio::test]
    async fn test_extracts_all_conforming_elements() {
        let mock = Arc::new(MockBackend::fixed(
            "Here you go:\n```json\n[{\"name\":\"bite\",\"value\":5},{\"name\":\"claw\",\"value\":7}]\n```",
        ));
        let extractor = extractor_with(mock);

        let result = extractor
            .extract_array::<Item>("input", &examples())
            .await
            .unwrap();
        match result {
            Extraction::Parsed(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].name, "bite");
                assert_eq!(items[1].value, 7);
            }
            Extraction::Failed { reason } => panic!("unexpected failure: {}", reason),
        }
    }

    #[tokio::test]
    async fn test_drops_non_conforming_elements() {
        let mock = Arc::new(MockBackend::fixed(
            "```json\n[{\"name\":\"good\",\"value\":1},{\"name\":\"bad\",\"value\":\"seven\"},{\"wrong\":true}]\n```",
        ));
        let extractor = extractor_with(mock);

        let result = extractor
            .extract_array::<Item>("input", &examples())
            .await
            .unwrap();
        match result {
            Extraction::Parsed(items) => {
                assert_eq!(items, vec![Item { name: "good".to_string(), value: 1 }]);
            }
            Extraction::Failed { reason } => panic!("unexpected failure: {}", reason),
        }
    }

    #[tokio::test]
    async fn test_non_json_response_fails_with_raw_output() {
        let mock = Arc::new(MockBackend::fixed("I cannot help with that."));
        let extractor = extractor_with(mock);

        let result = extractor
            .extract_array::<Item>("input", &examples())
            .await
            .unwrap();
        match result {
            Extraction::Failed { reason } => {
                assert!(reason.starts_with("Failed to parse JSON from"));
                assert!(reason.contains("I cannot help with that."));
            }
            Extraction::Parsed(_) => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn test_non_array_response_fails_with_fixed_reason() {
        let mock = Arc::new(MockBackend::fixed(
            "```json\n{\"name\":\"single\",\"value\":3}\n```",
        ));
        let extractor = extractor_with(mock);

        let result = extractor
            .extract_array::<Item>("input", &examples())
            .await
            .unwrap();
        match result {
            Extraction::Failed { reason } => {
                assert_eq!(reason, "Did not receive an array as a response.");
            }
            Extraction::Parsed(_) => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn test_whitespace_inside_fence_is_stripped() {
        let mock = Arc::new(MockBackend::fixed(
            "```json\n[\n  {\n    \"name\": \"bite\",\n    \"value\": 5\n  }\n]\n```",
        ));
        let extractor = extractor_with(mock);

        let result = extractor
            .extract_array::<Item>("input", &examples())
            .await
            .unwrap();
        match result {
            Extraction::Parsed(items) => assert_eq!(items[0].name, "bite"),
            Extraction::Failed { reason } => panic!("unexpected failure: {}", reason),
        }
    }

    #[tokio::test]
    async fn test_unfenced_response_falls_back_to_whole_text() {
        let mock = Arc::new(MockBackend::fixed("[{\"name\":\"bare\",\"value\":2}]"));
        let extractor = extractor_with(mock);

        let result = extractor
            .extract_array::<Item>("input", &examples())
            .await
            .unwrap();
        match result {
            Extraction::Parsed(items) => assert_eq!(items[0].name, "bare"),
            Extraction::Failed { reason } => panic!("unexpected failure: {}", reason),
        }
    }

    #[tokio::test]
    async fn test_empty_array_response_succeeds_empty() {
        let mock = Arc::new(MockBackend::fixed("```json\n[]\n```"));
        let extractor = extractor_with(mock);

        let result = extractor
            .extract_array::<Item>("input", &examples())
            .await
            .unwrap();
        match result {
            Extraction::Parsed(items) => assert!(items.is_empty()),
            Extraction::Failed { reason } => panic!("unexpected failure: {}", reason),
        }
    }

    #[test]
    fn test_builder_defaults() {
        let extractor = Extractor::builder("http://localhost:11434/").build();
        assert_eq!(extractor.base_url, "http://localhost:11434");
        assert_eq!(extractor.model, "gemma3:latest");
    }

    #[test]
    fn test_normalize_base_url_strips_api_paths() {
        assert_eq!(
            normalize_base_url("http://localhost:11434/api/chat"),
            "http://localhost:11434"
        );
        assert_eq!(
            normalize_base_url("http://localhost:11434/api/"),
            "http://localhost:11434"
        );
        assert_eq!(
            normalize_base_url("http://localhost:11434"),
            "http://localhost:11434"
        );
    }
}
