// src/config/error.rs
use thiserror::Error;

/// Everything that can go wrong while resolving the army roster.
///
/// Row-level problems never surface here — the assembler downgrades those to
/// skipped rows. These are the load-aborting failures only.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sheet URL or ID is required")]
    MissingSheetRef,

    #[error("invalid spreadsheet URL or ID: {0}")]
    InvalidSheetRef(String),

    #[error("{0} environment variable is not set")]
    MissingEnvVar(&'static str),

    #[error("worksheet must have columns: {0}")]
    MissingColumns(String),

    #[error("no usable army configurations: {0}")]
    EmptyDataset(String),

    #[error("army configuration {index} is missing required field: {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("army configuration {index} has invalid webhook URL: {url}")]
    InvalidWebhookUrl { index: usize, url: String },

    /// Single failure shape every load error is wrapped into, exactly once,
    /// at the orchestrator boundary. The inner error stays downcastable.
    #[error("configuration loading failed: {0}")]
    LoadFailed(anyhow::Error),
}
