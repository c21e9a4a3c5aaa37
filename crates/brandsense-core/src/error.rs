//! Centralized error types for Brandsense.

use thiserror::Error;

/// Failure of one sentiment analysis.
///
/// The display message is what the user sees in the error banner.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to analyze sentiments. Details: {0}")]
    Service(String),

    #[error("Failed to analyze sentiments. Details: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Wrap any lower-level failure, keeping its full cause chain in the message.
    pub fn service(err: anyhow::Error) -> Self {
        Self::Service(format!("{:#}", err))
    }
}

/// Startup configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API_KEY environment variable not set.")]
    MissingApiKey,

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
