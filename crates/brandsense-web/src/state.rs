//! Application state.

use brandsense_core::SentimentAnalyzer;
use std::sync::Arc;

/// Application state shared across handlers.
///
/// Holds no per-user data: every request builds its own session.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SentimentAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: SentimentAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}
