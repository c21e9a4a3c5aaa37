//! Presentation state for one form interaction.
//!
//! The outcome is a single sum type so that, e.g., loading and showing an
//! error at the same time cannot be represented.

use tracing::info;

use crate::analysis::SentimentAnalyzer;
use crate::error::AnalysisResult;
use crate::sentiment::{AnalysisRequest, SentimentVerdict};

pub const EMPTY_COMMENTS_MESSAGE: &str = "Please enter some comments to analyze";
pub const NO_BRANDS_MESSAGE: &str =
    "No brand was found or analyzed from the provided comments. Try being more specific.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

pub const EXAMPLE_COMMENTS: &str = "A ração Royal Canin é ótima, meu gato adora, mas é muito cara. \
Já a Golden, tem um bom custo-benefício e meu cachorro come bem. \
Testei a Purina e meu cão passou mal, não recomendo.";
pub const EXAMPLE_BRANDS: &str = "Royal Canin, Golden, Purina";

/// What the results area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisOutcome {
    #[default]
    Idle,
    Loading,
    /// Never empty.
    Results(Vec<SentimentVerdict>),
    Error(String),
}

/// Result of pressing "analyze".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// An analysis is already in flight; nothing changed.
    Busy,
    /// Validation failed; the outcome now holds the error.
    Rejected,
    /// The session is loading; run this request and call [`Session::settle`].
    Start(AnalysisRequest),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    comment_text: String,
    brand_names_raw: String,
    outcome: AnalysisOutcome,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with both fields already filled in.
    pub fn with_input(comment_text: &str, brand_names_raw: &str) -> Self {
        Self {
            comment_text: comment_text.to_string(),
            brand_names_raw: brand_names_raw.to_string(),
            outcome: AnalysisOutcome::Idle,
        }
    }

    pub fn comment_text(&self) -> &str {
        &self.comment_text
    }

    pub fn brand_names_raw(&self) -> &str {
        &self.brand_names_raw
    }

    pub fn outcome(&self) -> &AnalysisOutcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, AnalysisOutcome::Loading)
    }

    pub fn inputs_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn analyze_enabled(&self) -> bool {
        !self.is_loading() && !self.comment_text.trim().is_empty()
    }

    /// Returns `false` when inputs are disabled.
    pub fn edit_comments(&mut self, text: &str) -> bool {
        if self.is_loading() {
            return false;
        }
        self.comment_text = text.to_string();
        true
    }

    /// Returns `false` when inputs are disabled.
    pub fn edit_brands(&mut self, text: &str) -> bool {
        if self.is_loading() {
            return false;
        }
        self.brand_names_raw = text.to_string();
        true
    }

    /// Fill both fields with the sample comments. The outcome is untouched.
    pub fn load_example(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.comment_text = EXAMPLE_COMMENTS.to_string();
        self.brand_names_raw = EXAMPLE_BRANDS.to_string();
        true
    }

    pub fn trigger_analyze(&mut self) -> Trigger {
        if self.is_loading() {
            return Trigger::Busy;
        }

        if self.comment_text.trim().is_empty() {
            self.outcome = AnalysisOutcome::Error(EMPTY_COMMENTS_MESSAGE.to_string());
            return Trigger::Rejected;
        }

        self.outcome = AnalysisOutcome::Loading;
        Trigger::Start(AnalysisRequest {
            comment_text: self.comment_text.clone(),
            brand_names_raw: self.brand_names_raw.clone(),
        })
    }

    /// Apply the analyzer's answer. Ignored unless loading.
    pub fn settle(&mut self, result: AnalysisResult<Vec<SentimentVerdict>>) {
        if !self.is_loading() {
            return;
        }

        self.outcome = match result {
            Ok(verdicts) if verdicts.is_empty() => {
                AnalysisOutcome::Error(NO_BRANDS_MESSAGE.to_string())
            }
            Ok(verdicts) => AnalysisOutcome::Results(verdicts),
            Err(e) => {
                let message = e.to_string();
                if message.trim().is_empty() {
                    AnalysisOutcome::Error(UNEXPECTED_ERROR_MESSAGE.to_string())
                } else {
                    AnalysisOutcome::Error(message)
                }
            }
        };
    }
}

/// Trigger an analysis and, if it starts, await the analyzer once and settle.
pub async fn run_analysis(session: &mut Session, analyzer: &SentimentAnalyzer) -> Trigger {
    let trigger = session.trigger_analyze();
    if let Trigger::Start(request) = &trigger {
        let result = analyzer
            .analyze(&request.comment_text, &request.brand_names_raw)
            .await;
        session.settle(result);

        if let AnalysisOutcome::Results(verdicts) = session.outcome() {
            info!(count = verdicts.len(), "Rendering sentiment verdicts");
        }
    }
    trigger
}
