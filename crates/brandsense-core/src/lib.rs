//! Brandsense Core Library
//!
//! Prompt building, the Gemini-backed sentiment analyzer and the
//! presentation state of the brand sentiment form.

pub mod analysis;
pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod sentiment;
pub mod session;
pub mod view;

pub use analysis::{GenerationRequest, GenerativeModel, SentimentAnalyzer};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, AnalysisResult, ConfigError};
pub use gemini::GeminiClient;
pub use sentiment::{Sentiment, SentimentVerdict};
pub use session::{run_analysis, AnalysisOutcome, Session, Trigger};
