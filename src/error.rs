use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while analyzing a single article.
///
/// Batch analysis never propagates these; each failing item is replaced by
/// the fallback result instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("input too large: {chars} chars exceeds limit of {limit}")]
    InputTooLarge { chars: usize, limit: usize },

    #[error("{stage} failed: {reason}")]
    Computation { stage: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
