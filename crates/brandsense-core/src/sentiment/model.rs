//! Sentiment domain models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Overall sentiment of the comments about one brand.
///
/// Serialized with the pt-BR labels the model is asked to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "Positivo")]
    Positive,
    #[serde(rename = "Negativo")]
    Negative,
    #[serde(rename = "Neutro")]
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Parse a wire label. Anything other than the three exact labels is unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Positivo" => Some(Self::Positive),
            "Negativo" => Some(Self::Negative),
            "Neutro" => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Wire and display label.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Positive => "Positivo",
            Self::Negative => "Negativo",
            Self::Neutral => "Neutro",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// One brand's sentiment classification plus its one-sentence justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentVerdict {
    #[serde(rename = "marca")]
    pub brand_name: String,
    #[serde(rename = "sentimento")]
    pub sentiment: Sentiment,
    #[serde(rename = "resumo")]
    pub summary: String,
}

/// Read one array item as the model emitted it.
///
/// Returns `None` when the item is not an object, a field is missing or not a
/// string, the sentiment is unrecognized, or the brand is blank.
pub fn verdict_from_value(entry: &Value) -> Option<SentimentVerdict> {
    let sentiment = Sentiment::from_label(entry.get("sentimento")?.as_str()?)?;
    let brand_name = entry.get("marca")?.as_str()?.trim();
    if brand_name.is_empty() {
        return None;
    }
    let summary = entry.get("resumo")?.as_str()?;

    Some(SentimentVerdict {
        brand_name: brand_name.to_string(),
        sentiment,
        summary: summary.to_string(),
    })
}

/// One form interaction's input, handed from the session to the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisRequest {
    pub comment_text: String,
    pub brand_names_raw: String,
}
