//! Sentiment analysis over a structured-output generative model.
//!
//! [`SentimentAnalyzer`] builds the prompt, issues exactly one request to a
//! [`GenerativeModel`], strictly parses the raw text as a JSON array and drops
//! entries whose sentiment is not one of the three recognized labels.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::config::DEFAULT_TEMPERATURE;
use crate::error::{AnalysisError, AnalysisResult};
use crate::prompt::build_prompt;
use crate::sentiment::{validate_verdicts, Sentiment, SentimentVerdict};

/// One structured-output generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: Value,
    pub temperature: f32,
}

/// A hosted model that answers with raw text constrained to a schema.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> anyhow::Result<String>;
}

/// Output schema: array of `{marca, sentimento, resumo}` with an enumerated sentiment.
pub fn response_schema() -> Value {
    let labels: Vec<&str> = Sentiment::ALL.iter().map(|s| s.as_label()).collect();
    let choices: Vec<String> = labels.iter().map(|l| format!("'{}'", l)).collect();
    let sentiment_description = format!(
        "O sentimento geral dos comentários sobre a marca. Deve ser um dos seguintes: {}.",
        choices.join(", ")
    );

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "marca": {
                    "type": "STRING",
                    "description": "O nome da marca de ração analisada."
                },
                "sentimento": {
                    "type": "STRING",
                    "enum": labels,
                    "description": sentiment_description
                },
                "resumo": {
                    "type": "STRING",
                    "description": "Um resumo conciso de uma frase explicando a razão para o sentimento atribuído."
                }
            },
            "required": ["marca", "sentimento", "resumo"]
        }
    })
}

/// Strictly parse the model output as a JSON array, then validate each entry.
///
/// Invalid JSON or a non-array value fails; ill-typed items are dropped.
pub fn parse_verdicts(raw_text: &str) -> AnalysisResult<Vec<SentimentVerdict>> {
    let raw: Vec<Value> = serde_json::from_str(raw_text.trim())?;
    Ok(validate_verdicts(&raw))
}

/// Sentiment Analysis Client.
#[derive(Clone)]
pub struct SentimentAnalyzer {
    model: Arc<dyn GenerativeModel>,
    temperature: f32,
}

impl SentimentAnalyzer {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Analyze the comments, optionally scoped to a comma-separated brand list.
    ///
    /// The caller checks that `comment_text` is not blank. The returned
    /// sequence may be empty.
    pub async fn analyze(
        &self,
        comment_text: &str,
        brand_names_raw: &str,
    ) -> AnalysisResult<Vec<SentimentVerdict>> {
        let request = GenerationRequest {
            prompt: build_prompt(comment_text, brand_names_raw),
            response_schema: response_schema(),
            temperature: self.temperature,
        };
        debug!(prompt_len = request.prompt.len(), "Requesting sentiment analysis");

        let result = match self.model.generate(&request).await {
            Ok(text) => parse_verdicts(&text),
            Err(e) => Err(AnalysisError::service(e)),
        };

        match &result {
            Ok(verdicts) => debug!(count = verdicts.len(), "Sentiment analysis finished"),
            Err(e) => error!(error = %e, "Error analyzing sentiments"),
        }

        result
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Returns a fixed reply and records every request it receives.
    pub(crate) struct ScriptedModel {
        reply: Result<String, String>,
        pub calls: AtomicUsize,
        pub last_request: Mutex<Option<GenerationRequest>>,
    }

    impl ScriptedModel {
        pub(crate) fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }

        pub(crate) fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerativeModel for ScriptedModel {
        async fn generate(&self, request: &GenerationRequest) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(anyhow::anyhow!(message.clone())),
            }
        }
    }

    #[tokio::test]
    async fn test_drops_invalid_sentiment() {
        let model = ScriptedModel::replying(
            r#"[
                {"marca": "Royal Canin", "sentimento": "Positivo", "resumo": "Cats love it."},
                {"marca": "Golden", "sentimento": "Mixed", "resumo": "Unclear."},
                {"marca": "Purina", "sentimento": "Negativo", "resumo": "A dog got sick."}
            ]"#,
        );
        let analyzer = SentimentAnalyzer::new(model.clone());

        let verdicts = analyzer.analyze("comments", "").await.unwrap();
        assert_eq!(verdicts.len(), 2);
        assert_eq!(verdicts[0].brand_name, "Royal Canin");
        assert_eq!(verdicts[0].sentiment, Sentiment::Positive);
        assert_eq!(verdicts[1].brand_name, "Purina");
        assert_eq!(verdicts[1].sentiment, Sentiment::Negative);
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mistyped_entries_are_dropped_not_fatal() {
        let model = ScriptedModel::replying(
            r#"[{"marca":"A","sentimento":"Positivo","resumo":"ok"},{"marca":"B","sentimento":null,"resumo":"?"},{"marca":"C","sentimento":3,"resumo":"?"},7]"#,
        );
        let analyzer = SentimentAnalyzer::new(model);

        let verdicts = analyzer.analyze("comments", "").await.unwrap();
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].brand_name, "A");
    }

    #[test]
    fn test_non_array_reply_fails() {
        let err = parse_verdicts(r#"{"marca":"A","sentimento":"Positivo","resumo":"ok"}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_fails() {
        let model = ScriptedModel::replying(r#"[{"marca": "X", "sentimento": "Positivo""#);
        let analyzer = SentimentAnalyzer::new(model);

        let err = analyzer.analyze("comments", "").await.unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
        assert!(err.to_string().starts_with("Failed to analyze sentiments. Details:"));
    }

    #[tokio::test]
    async fn test_fenced_json_is_not_recovered() {
        let model = ScriptedModel::replying("```json\n[]\n```");
        let analyzer = SentimentAnalyzer::new(model);
        assert!(analyzer.analyze("comments", "").await.is_err());
    }

    #[tokio::test]
    async fn test_empty_array_is_ok() {
        let model = ScriptedModel::replying("  []\n");
        let analyzer = SentimentAnalyzer::new(model);
        assert!(analyzer.analyze("comments", "").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_message() {
        let model = ScriptedModel::failing("connection refused");
        let analyzer = SentimentAnalyzer::new(model.clone());

        let err = analyzer.analyze("comments", "A").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to analyze sentiments. Details: connection refused"
        );
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_prompt_schema_and_temperature() {
        let model = ScriptedModel::replying("[]");
        let analyzer = SentimentAnalyzer::new(model.clone());
        analyzer.analyze("Golden is ok", "Golden").await.unwrap();

        let request = model.last_request.lock().unwrap().clone().unwrap();
        assert!(request.prompt.contains("Golden is ok"));
        assert_eq!(request.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(request.response_schema["type"], "ARRAY");
        assert_eq!(
            request.response_schema["items"]["properties"]["sentimento"]["enum"],
            json!(["Positivo", "Negativo", "Neutro"])
        );
        assert_eq!(
            request.response_schema["items"]["required"],
            json!(["marca", "sentimento", "resumo"])
        );
    }
}
