//! View models derived from session state.

use crate::sentiment::{Sentiment, SentimentVerdict};
use crate::session::{AnalysisOutcome, Session};

/// Visual treatment of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    Positive,
    Negative,
    Neutral,
}

impl Treatment {
    /// CSS modifier used by the web templates.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl From<Sentiment> for Treatment {
    fn from(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => Self::Positive,
            Sentiment::Negative => Self::Negative,
            Sentiment::Neutral => Self::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub brand_name: String,
    pub label: String,
    pub summary: String,
    pub treatment: Treatment,
}

impl CardView {
    pub fn from_verdict(verdict: &SentimentVerdict) -> Self {
        Self {
            brand_name: verdict.brand_name.clone(),
            label: verdict.sentiment.as_label().to_string(),
            summary: verdict.summary.clone(),
            treatment: verdict.sentiment.into(),
        }
    }
}

/// Everything the page needs to draw one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub comment_text: String,
    pub brand_names_raw: String,
    pub inputs_enabled: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// In the order the model returned them.
    pub cards: Vec<CardView>,
}

impl PageView {
    pub fn from_session(session: &Session) -> Self {
        let (loading, error, cards) = match session.outcome() {
            AnalysisOutcome::Idle => (false, None, Vec::new()),
            AnalysisOutcome::Loading => (true, None, Vec::new()),
            AnalysisOutcome::Error(message) => (false, Some(message.clone()), Vec::new()),
            AnalysisOutcome::Results(verdicts) => {
                (false, None, verdicts.iter().map(CardView::from_verdict).collect())
            }
        };

        Self {
            comment_text: session.comment_text().to_string(),
            brand_names_raw: session.brand_names_raw().to_string(),
            inputs_enabled: session.inputs_enabled(),
            loading,
            error,
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(brand: &str, sentiment: Sentiment) -> SentimentVerdict {
        SentimentVerdict {
            brand_name: brand.to_string(),
            sentiment,
            summary: format!("{} summary", brand),
        }
    }

    #[test]
    fn test_cards_keep_order_and_treatment() {
        let mut session = Session::with_input("text", "");
        session.trigger_analyze();
        session.settle(Ok(vec![
            verdict("B", Sentiment::Negative),
            verdict("A", Sentiment::Positive),
            verdict("C", Sentiment::Neutral),
        ]));

        let view = PageView::from_session(&session);
        let brands: Vec<&str> = view.cards.iter().map(|c| c.brand_name.as_str()).collect();
        assert_eq!(brands, vec!["B", "A", "C"]);
        assert_eq!(view.cards[0].treatment, Treatment::Negative);
        assert_eq!(view.cards[1].label, "Positivo");
        assert_eq!(view.cards[2].treatment.css_class(), "neutral");
        assert!(view.error.is_none());
        assert!(!view.loading);
    }

    #[test]
    fn test_loading_view() {
        let mut session = Session::with_input("text", "");
        session.trigger_analyze();

        let view = PageView::from_session(&session);
        assert!(view.loading);
        assert!(!view.inputs_enabled);
        assert!(view.cards.is_empty());
    }

    #[test]
    fn test_error_view() {
        let mut session = Session::with_input(" ", "");
        session.trigger_analyze();

        let view = PageView::from_session(&session);
        assert_eq!(view.error.as_deref(), Some(crate::session::EMPTY_COMMENTS_MESSAGE));
        assert!(view.inputs_enabled);
    }
}
