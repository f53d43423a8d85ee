//! Unified Error Type System
//!
//! Almost every failure inside an analysis is recovered locally (logged and
//! defaulted), so these variants surface from configuration handling, the
//! CLI, and the entry point that turns them into a message string.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Analysis error: {0}")]
    Analysis(String),
}

pub type Result<T> = std::result::Result<T, HookError>;

/// Attach context to a foreign error, producing [`HookError::Analysis`]
pub trait ResultExt<T> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| HookError::Analysis(format!("{}: {}", context.into(), e)))
    }
}
