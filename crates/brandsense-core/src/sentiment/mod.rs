//! Sentiment verdicts and their validation.

pub mod model;

pub use model::{verdict_from_value, AnalysisRequest, Sentiment, SentimentVerdict};

use serde_json::Value;
use tracing::warn;

/// Keep only well-formed entries with a recognized sentiment and a non-blank brand, in order.
pub fn validate_verdicts(raw: &[Value]) -> Vec<SentimentVerdict> {
    let total = raw.len();
    let verdicts: Vec<SentimentVerdict> = raw
        .iter()
        .filter_map(|entry| {
            let verdict = verdict_from_value(entry);
            if verdict.is_none() {
                warn!(entry = %entry, "Dropping unrecognized verdict");
            }
            verdict
        })
        .collect();

    if verdicts.len() < total {
        warn!(kept = verdicts.len(), total, "Some verdicts were dropped");
    }

    verdicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drops_unrecognized_sentiment() {
        let verdicts = validate_verdicts(&[
            json!({"marca": "A", "sentimento": "Positivo", "resumo": "About A."}),
            json!({"marca": "B", "sentimento": "Mixed", "resumo": "About B."}),
            json!({"marca": "C", "sentimento": "Neutro", "resumo": "About C."}),
        ]);
        assert_eq!(verdicts.len(), 2);
        assert_eq!(verdicts[0].brand_name, "A");
        assert_eq!(verdicts[1].brand_name, "C");
    }

    #[test]
    fn test_drops_mistyped_entries() {
        let verdicts = validate_verdicts(&[
            json!({"marca": "A", "sentimento": "Positivo", "resumo": "ok"}),
            json!({"marca": "B", "sentimento": null, "resumo": "?"}),
            json!(42),
        ]);
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].brand_name, "A");
    }

    #[test]
    fn test_empty_input() {
        assert!(validate_verdicts(&[]).is_empty());
    }
}
