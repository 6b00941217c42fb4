//! Error types for nameguess-engine
//!
//! Source and predictor failures are recoverable by design of the load and
//! ranking pipelines (skip the source, rank rule-only), so they have their own
//! enums that callers can match on. [`EngineError`] is what the public facade
//! returns.

use thiserror::Error;

/// Engine result type
pub type Result<T> = std::result::Result<T, EngineError>;

/// Failure to read one name data source
#[derive(Debug, Error)]
pub enum SourceError {
    /// Local file could not be read
    #[error("IO error reading {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    /// HTTP request failed or returned a non-success status
    #[error("HTTP error fetching {url}: {message}")]
    Http { url: String, message: String },

    /// Source does not exist
    #[error("Source not found: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Http {
            url: err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "<unknown>".to_string()),
            message: err.to_string(),
        }
    }
}

/// Failure of the secondary predictor
#[derive(Debug, Error)]
pub enum PredictorError {
    /// Model file could not be read
    #[error("Model file error: {0}")]
    Io(#[from] std::io::Error),

    /// Model file is not a valid model
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Model has no names to predict
    #[error("Model vocabulary is empty")]
    EmptyVocabulary,
}

impl From<serde_json::Error> for PredictorError {
    fn from(err: serde_json::Error) -> Self {
        PredictorError::InvalidModel(err.to_string())
    }
}

/// Errors surfaced by the engine facade
#[derive(Debug, Error)]
pub enum EngineError {
    /// A data source failed in a context where that is fatal
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Predictor failed in a context where that is fatal
    #[error("Predictor error: {0}")]
    Predictor(#[from] PredictorError),

    /// Database was used before [`crate::NameDatabase::ensure_loaded`] completed
    #[error("Name database is not loaded")]
    NotLoaded,

    /// nameguess-common error (config, answer validation)
    #[error("Common error: {0}")]
    Common(#[from] nameguess_common::Error),
}
